// SPDX-License-Identifier: MIT
//! taskseed — seeds a running task-management API with sample data.
//!
//! Library surface exists so integration tests drive the same code as the
//! `taskseed` binary.

pub mod cli;
pub mod client;
pub mod config;
pub mod samples;
