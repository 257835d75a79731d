// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

use activity_tracker::config::Config;
use activity_tracker::models::Activity;
use activity_tracker::routes::create_router;
use activity_tracker::AppState;
use axum::body::Body;
use axum::http::Request;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with default config.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let state = Arc::new(AppState { config });
    (create_router(state.clone()), state)
}

/// Create a test app with the page table mounted under a base path.
#[allow(dead_code)]
pub fn create_test_app_with_base(base_path: &str) -> (axum::Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.base_path = base_path.to_string();
    let state = Arc::new(AppState { config });
    (create_router(state.clone()), state)
}

/// GET a path and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(
    app: &axum::Router,
    path: &str,
) -> (axum::http::StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

/// Stand-in for the external backend's create operation: assigns an id to
/// a not-yet-persisted activity, leaving everything else untouched.
#[allow(dead_code)]
pub struct MockBackend {
    next_id: u64,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn create(&mut self, mut activity: Activity) -> Activity {
        if activity.id.is_none() {
            activity.id = Some(format!("act-{}", self.next_id));
            self.next_id += 1;
        }
        activity
    }
}
