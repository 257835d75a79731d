// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Activity-Tracker: navigation and payload contracts for the activity app
//!
//! This crate provides the page route table consumed by the mobile client
//! and the versioned Activity/ActivityType payload contracts exchanged with
//! the backend, including the validation boundary where payloads enter.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
