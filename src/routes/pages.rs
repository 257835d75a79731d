// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Page route table.
//!
//! Maps the navigation surface of the mobile client to named pages. A
//! resolved route answers with a [`ResolvedPage`] body naming the page to
//! mount and any bound path parameters; the actual rendering happens on
//! the client.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::AppState;

/// Named pages the router can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    NewActivity,
    Authentication,
    Activity,
    ActivityDetails,
    Profile,
    NotFound,
}

impl Page {
    /// Stable page name used in [`ResolvedPage`] bodies.
    pub const fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::NewActivity => "NewActivity",
            Page::Authentication => "Authentication",
            Page::Activity => "Activity",
            Page::ActivityDetails => "ActivityDetails",
            Page::Profile => "Profile",
            Page::NotFound => "NotFound",
        }
    }
}

/// Result of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct ResolvedPage {
    /// Page name to mount
    pub page: String,
    /// Bound path parameters (empty for literal routes)
    pub params: BTreeMap<String, String>,
}

impl ResolvedPage {
    fn new(page: Page) -> Self {
        Self {
            page: page.name().to_string(),
            params: BTreeMap::new(),
        }
    }

    fn with_param(page: Page, key: &str, value: String) -> Self {
        let mut resolved = Self::new(page);
        resolved.params.insert(key.to_string(), value);
        resolved
    }
}

/// Page routes. Literal paths take precedence over the `{id}` parameter;
/// the parameter matches any single non-empty segment.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(redirect_root))
        .route("/home", get(home))
        .route("/new-activity", get(new_activity))
        .route("/authentication", get(authentication))
        .route("/activity", get(activity_list))
        .route("/activity/{id}", get(activity_details))
        .route("/profile", get(profile))
}

/// Unconditional redirect from the root to the landing page, honoring the
/// configured history base path.
async fn redirect_root(State(state): State<Arc<AppState>>) -> Redirect {
    let base = state.config.base_path.trim_end_matches('/');
    Redirect::to(&format!("{base}/home"))
}

/// Landing page.
async fn home() -> Json<ResolvedPage> {
    Json(ResolvedPage::new(Page::Home))
}

/// Activity-creation form.
async fn new_activity() -> Json<ResolvedPage> {
    Json(ResolvedPage::new(Page::NewActivity))
}

async fn authentication() -> Json<ResolvedPage> {
    Json(ResolvedPage::new(Page::Authentication))
}

/// Activity list.
async fn activity_list() -> Json<ResolvedPage> {
    Json(ResolvedPage::new(Page::Activity))
}

/// Detail view for one activity; `id` is required and unvalidated here
/// (any non-empty segment matches, the backend owns id semantics).
async fn activity_details(Path(id): Path<String>) -> Json<ResolvedPage> {
    Json(ResolvedPage::with_param(Page::ActivityDetails, "id", id))
}

/// User profile.
async fn profile() -> Json<ResolvedPage> {
    Json(ResolvedPage::new(Page::Profile))
}

/// Catch-all for paths outside the route table.
pub async fn not_found() -> (StatusCode, Json<ResolvedPage>) {
    (StatusCode::NOT_FOUND, Json(ResolvedPage::new(Page::NotFound)))
}
