//! Client behavior against a local mock task API.
//!
//! Spins up an axum server on a random port and exercises the accepted-status
//! sets: health treats 200 and 400 as reachable, create succeeds only on 201,
//! statistics pass through opaque JSON on 200.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use taskseed::client::{ApiError, TaskApiClient};
use taskseed::config::SeedConfig;

/// Serve `app` on a random local port; returns the task-API base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1/tasks")
}

/// A base URL pointing at a port nothing is listening on.
fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/v1/tasks")
}

fn client_for(base_url: &str) -> TaskApiClient {
    let config = SeedConfig::new(Some(base_url.to_string()), Some(2));
    TaskApiClient::new(&config).unwrap()
}

fn collection_returning(status: StatusCode) -> Router {
    Router::new().route("/api/v1/tasks", get(move || async move { status }))
}

// ─── check_health ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_accepts_200() {
    let base = serve(collection_returning(StatusCode::OK)).await;
    assert!(client_for(&base).check_health().await);
}

#[tokio::test]
async fn health_accepts_400() {
    // The real API rejects a bare GET for missing pagination params; that
    // still proves it is up.
    let base = serve(collection_returning(StatusCode::BAD_REQUEST)).await;
    assert!(client_for(&base).check_health().await);
}

#[tokio::test]
async fn health_rejects_500() {
    let base = serve(collection_returning(StatusCode::INTERNAL_SERVER_ERROR)).await;
    assert!(!client_for(&base).check_health().await);
}

#[tokio::test]
async fn health_false_on_connection_refused() {
    assert!(!client_for(&refused_base_url()).check_health().await);
}

// ─── create_task ──────────────────────────────────────────────────────────────

fn create_returning(status: StatusCode) -> Router {
    Router::new().route("/api/v1/tasks", post(move || async move { status }))
}

fn sample_record() -> taskseed::samples::SampleTask {
    let base = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    taskseed::samples::sample_tasks(base).remove(0)
}

#[tokio::test]
async fn create_true_only_on_201() {
    let base = serve(create_returning(StatusCode::CREATED)).await;
    assert!(client_for(&base).create_task(&sample_record()).await);
}

#[tokio::test]
async fn create_false_on_4xx_and_5xx() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::UNPROCESSABLE_ENTITY,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let base = serve(create_returning(status)).await;
        assert!(
            !client_for(&base).create_task(&sample_record()).await,
            "status {status} must not count as success"
        );
    }
}

#[tokio::test]
async fn create_false_on_connection_refused() {
    assert!(
        !client_for(&refused_base_url())
            .create_task(&sample_record())
            .await
    );
}

#[tokio::test]
async fn create_sends_api_shaped_body() {
    // The mock validates the wire contract: camelCase field names and
    // SCREAMING_SNAKE_CASE enum values.
    let app = Router::new().route(
        "/api/v1/tasks",
        post(|Json(body): Json<Value>| async move {
            let shaped = body.get("dueDate").is_some()
                && body.get("assignedTo").is_some()
                && body.get("estimatedHours").is_some()
                && body.get("createdBy").is_some()
                && body["status"] == "IN_PROGRESS"
                && body["priority"] == "HIGH";
            if shaped {
                StatusCode::CREATED
            } else {
                StatusCode::BAD_REQUEST
            }
        }),
    );
    let base = serve(app).await;
    assert!(client_for(&base).create_task(&sample_record()).await);
}

// ─── fetch_statistics ─────────────────────────────────────────────────────────

#[tokio::test]
async fn statistics_pass_through_opaque_json() {
    let stats = json!({
        "statusCounts": { "TODO": 12, "COMPLETED": 2 },
        "overall": { "total": 20, "overdue": 4 }
    });
    let body = stats.clone();
    let app = Router::new().route(
        "/api/v1/tasks/statistics",
        get(move || async move { Json(body) }),
    );
    let base = serve(app).await;

    let got = client_for(&base).fetch_statistics().await.unwrap();
    assert_eq!(got, stats);
}

#[tokio::test]
async fn statistics_report_unexpected_status() {
    let app = Router::new().route(
        "/api/v1/tasks/statistics",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(app).await;

    match client_for(&base).fetch_statistics().await {
        Err(ApiError::UnexpectedStatus(status)) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn statistics_report_transport_error() {
    match client_for(&refused_base_url()).fetch_statistics().await {
        Err(ApiError::Transport(_)) => {}
        other => panic!("expected Transport error, got {other:?}"),
    }
}
