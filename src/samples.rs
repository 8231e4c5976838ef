// SPDX-License-Identifier: MIT
//! Sample task records sent to the task API.
//!
//! The record set is a fixed, ordered list of 20 tasks spanning the API's
//! categories. Only the due dates vary between runs: each record carries a
//! literal day offset applied to the supplied base date. A few offsets are
//! negative on purpose so the seeded data contains overdue tasks.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Task workflow state, spelled the way the remote API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    OnHold,
    Completed,
}

/// Task priority, spelled the way the remote API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// One seed record, serialized as the task API's JSON create payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleTask {
    pub title: String,
    pub description: String,
    /// Serializes as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub category: String,
    pub assigned_to: String,
    pub estimated_hours: u32,
    pub created_by: String,
}

#[allow(clippy::too_many_arguments)]
fn task(
    base: NaiveDate,
    title: &str,
    description: &str,
    offset_days: i64,
    status: TaskStatus,
    priority: TaskPriority,
    category: &str,
    assigned_to: &str,
    estimated_hours: u32,
    created_by: &str,
) -> SampleTask {
    SampleTask {
        title: title.to_string(),
        description: description.to_string(),
        due_date: base + Duration::days(offset_days),
        status,
        priority,
        category: category.to_string(),
        assigned_to: assigned_to.to_string(),
        estimated_hours,
        created_by: created_by.to_string(),
    }
}

/// The fixed seed set, date-shifted relative to `base`.
///
/// Deterministic for a given `base`; callers pass today's date for a live run.
pub fn sample_tasks(base: NaiveDate) -> Vec<SampleTask> {
    use TaskPriority::*;
    use TaskStatus::*;

    vec![
        // Development
        task(
            base,
            "Implement User Authentication",
            "Add JWT-based authentication system with role-based access control and session management",
            15,
            InProgress,
            High,
            "Security",
            "john.doe@company.com",
            20,
            "manager@company.com",
        ),
        task(
            base,
            "Build REST API Endpoints",
            "Create comprehensive REST API with full CRUD operations, filtering, and pagination",
            10,
            Todo,
            High,
            "Development",
            "jane.smith@company.com",
            16,
            "lead@company.com",
        ),
        task(
            base,
            "Frontend Integration",
            "Integrate React frontend with the new API endpoints and implement responsive design",
            20,
            Todo,
            Medium,
            "Frontend",
            "frontend.dev@company.com",
            24,
            "manager@company.com",
        ),
        task(
            base,
            "Database Optimization",
            "Optimize database queries, add proper indexing, and implement connection pooling",
            8,
            InProgress,
            Medium,
            "Database",
            "db.admin@company.com",
            12,
            "architect@company.com",
        ),
        task(
            base,
            "Mobile App Development",
            "Develop native mobile applications for iOS and Android platforms",
            45,
            Todo,
            Low,
            "Mobile",
            "mobile.dev@company.com",
            80,
            "product@company.com",
        ),
        // Testing
        task(
            base,
            "Unit Test Coverage",
            "Increase unit test coverage to 95% for all critical components and services",
            12,
            Todo,
            Medium,
            "Testing",
            "qa.engineer@company.com",
            14,
            "qa.lead@company.com",
        ),
        task(
            base,
            "Performance Testing",
            "Conduct comprehensive load testing and stress testing for the application",
            18,
            OnHold,
            Low,
            "Testing",
            "perf.tester@company.com",
            16,
            "qa.lead@company.com",
        ),
        task(
            base,
            "Integration Testing",
            "Set up automated integration tests for all API endpoints and workflows",
            14,
            Todo,
            Medium,
            "Testing",
            "qa.engineer@company.com",
            10,
            "qa.lead@company.com",
        ),
        // Bug fixes (negative offsets: already overdue)
        task(
            base,
            "Fix Memory Leak Issue",
            "Resolve critical memory leak in the background task processor affecting performance",
            -5,
            Todo,
            Urgent,
            "Bug Fix",
            "senior.dev@company.com",
            8,
            "support@company.com",
        ),
        task(
            base,
            "Resolve Database Timeout",
            "Fix intermittent database connection timeout errors in production environment",
            -2,
            Todo,
            High,
            "Bug Fix",
            "db.admin@company.com",
            6,
            "support@company.com",
        ),
        task(
            base,
            "UI Responsiveness Bug",
            "Fix responsive design issues affecting mobile and tablet users",
            5,
            InProgress,
            Medium,
            "Bug Fix",
            "frontend.dev@company.com",
            4,
            "ux.designer@company.com",
        ),
        // Documentation
        task(
            base,
            "API Documentation",
            "Write comprehensive API documentation with examples, use cases, and best practices",
            8,
            InProgress,
            Medium,
            "Documentation",
            "tech.writer@company.com",
            12,
            "manager@company.com",
        ),
        task(
            base,
            "User Manual",
            "Create comprehensive user manual and help documentation for end users",
            22,
            Todo,
            Low,
            "Documentation",
            "tech.writer@company.com",
            20,
            "product@company.com",
        ),
        // DevOps
        task(
            base,
            "CI/CD Pipeline Setup",
            "Configure automated testing and deployment pipeline with Jenkins and Docker",
            10,
            Todo,
            High,
            "DevOps",
            "devops.engineer@company.com",
            18,
            "cto@company.com",
        ),
        task(
            base,
            "Monitoring Setup",
            "Implement application monitoring with Prometheus, Grafana, and alerting system",
            25,
            Todo,
            Medium,
            "DevOps",
            "sre.engineer@company.com",
            14,
            "devops.lead@company.com",
        ),
        // Security
        task(
            base,
            "Security Audit",
            "Conduct comprehensive security audit and penetration testing of the application",
            28,
            Todo,
            High,
            "Security",
            "security@company.com",
            24,
            "ciso@company.com",
        ),
        // Completed history
        task(
            base,
            "Database Schema Design",
            "Design and implement the initial database schema with proper relationships",
            -15,
            Completed,
            High,
            "Database",
            "db.admin@company.com",
            16,
            "architect@company.com",
        ),
        task(
            base,
            "Project Setup",
            "Initialize project structure, configure build tools, and set up development environment",
            -20,
            Completed,
            Medium,
            "Setup",
            "lead@company.com",
            8,
            "manager@company.com",
        ),
        // Maintenance
        task(
            base,
            "Dependency Updates",
            "Update all project dependencies to latest stable versions and resolve conflicts",
            5,
            Todo,
            Low,
            "Maintenance",
            "john.doe@company.com",
            4,
            "lead@company.com",
        ),
        // Design
        task(
            base,
            "User Interface Redesign",
            "Redesign user interface based on user feedback and modern design principles",
            35,
            Todo,
            Medium,
            "Design",
            "ux.designer@company.com",
            30,
            "design.lead@company.com",
        ),
    ]
}
