// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Data models for the application.

pub mod activity;
pub mod activity_type;
pub mod compat;

pub use activity::{Activity, ActivityListResponse, ActivityResponse};
pub use activity_type::ActivityType;
pub use compat::{decode_activity, PayloadError, VersionedActivity};
