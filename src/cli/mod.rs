// cli/mod.rs — `taskseed` argument definitions and command handlers.

use chrono::Local;
use clap::{Parser, Subcommand};

use crate::client::TaskApiClient;
use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::samples::{self, SampleTask};

#[derive(Debug, Parser)]
#[command(
    name = "taskseed",
    about = "Seed a running task-management API with sample data",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the task API collection endpoint
    #[arg(long, env = "TASKSEED_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "TASKSEED_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKSEED_LOG")]
    pub log: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Populate the API with sample tasks (default when no subcommand given).
    ///
    /// Checks reachability, creates every sample record one at a time, prints
    /// the success tally, then fetches statistics and prints example queries.
    ///
    /// Examples:
    ///   taskseed populate
    ///   taskseed
    Populate,
    /// Fetch and print current task statistics.
    ///
    /// Examples:
    ///   taskseed stats
    Stats,
    /// Print example API queries without touching the network.
    ///
    /// Examples:
    ///   taskseed examples
    Examples,
}

/// Outcome of a populate run: how many creates succeeded out of how many sent.
#[derive(Debug, Clone, Copy)]
pub struct PopulateSummary {
    pub created: usize,
    pub total: usize,
}

/// Probe the API and report the result on the console.
pub async fn check_api_health(client: &TaskApiClient) -> bool {
    println!("Checking API health...");
    if client.check_health().await {
        println!("✓ API is reachable at {}", client.base_url());
        true
    } else {
        eprintln!("✗ API is not reachable at {}", client.base_url());
        eprintln!("  Start the task API first, then re-run this command.");
        false
    }
}

/// Send every sample record sequentially, printing one progress line each.
///
/// A failed record never halts the run; it just shows up in the tally.
pub async fn populate_tasks(client: &TaskApiClient, records: &[SampleTask]) -> PopulateSummary {
    let total = records.len();
    let mut created = 0;

    for (i, record) in records.iter().enumerate() {
        let title: String = record.title.chars().take(50).collect();
        let mark = if client.create_task(record).await {
            created += 1;
            "✓"
        } else {
            "✗"
        };
        println!("Creating task {}/{}: {}... {}", i + 1, total, title, mark);
    }

    println!();
    println!("Results: {created}/{total} tasks created");
    PopulateSummary { created, total }
}

/// Fetch statistics and print them, or print why we couldn't.
pub async fn print_statistics(client: &TaskApiClient) {
    println!("Fetching task statistics...");
    match client.fetch_statistics().await {
        Ok(stats) => {
            println!("Task statistics:");
            let pretty = serde_json::to_string_pretty(&stats).unwrap_or_else(|_| stats.to_string());
            println!("{pretty}");
        }
        Err(e) => eprintln!("✗ Failed to fetch statistics: {e}"),
    }
}

/// The static example-query table: (description, curl invocation).
pub fn example_queries(base_url: &str) -> Vec<(String, String)> {
    [
        ("Get all tasks", format!("curl '{base_url}'")),
        (
            "Get paginated tasks",
            format!("curl '{base_url}?page=0&size=5&sortBy=priority&sortDir=desc'"),
        ),
        (
            "Filter high priority tasks",
            format!("curl '{base_url}/filter?priority=HIGH'"),
        ),
        ("Get overdue tasks", format!("curl '{base_url}/overdue'")),
        (
            "Search tasks",
            format!("curl '{base_url}/search?query=authentication'"),
        ),
        ("Get task statistics", format!("curl '{base_url}/statistics'")),
        ("Get tasks due today", format!("curl '{base_url}/due-today'")),
        (
            "Get high priority pending tasks",
            format!("curl '{base_url}/high-priority'"),
        ),
    ]
    .into_iter()
    .map(|(desc, cmd)| (desc.to_string(), cmd))
    .collect()
}

/// `taskseed examples` — print the query table. No network calls.
pub fn cmd_examples(base_url: &str) {
    println!("Example API queries:");
    for (description, command) in example_queries(base_url) {
        println!();
        println!("# {description}");
        println!("{command}");
    }
}

/// `taskseed stats` — health gate, then statistics.
pub async fn cmd_stats(client: &TaskApiClient) {
    if !check_api_health(client).await {
        return;
    }
    print_statistics(client).await;
}

/// `taskseed populate` — the full seeding workflow.
///
/// Halts early only when the health probe fails; every later failure is
/// reported and skipped past.
pub async fn cmd_populate(client: &TaskApiClient) -> PopulateSummary {
    if !check_api_health(client).await {
        return PopulateSummary {
            created: 0,
            total: 0,
        };
    }

    println!("Starting data population...");
    let records = samples::sample_tasks(Local::now().date_naive());
    let summary = populate_tasks(client, &records).await;

    print_statistics(client).await;
    cmd_examples(client.base_url());

    println!();
    println!("Data population complete.");
    summary
}
