// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Versioned activity payload decoding.
//!
//! The activity schema drifted across client revisions without a version
//! tag: the user field was renamed (`userName` -> `userNickname`), the
//! `comments` list was dropped, and the structured `location` pair was
//! replaced by an opaque string. Stored payloads of both revisions are
//! still in flight, so the wire contract is a union of shapes: decoding
//! tries the current shape first, falls back to the legacy one, and
//! migrates everything to the canonical [`Activity`].
//!
//! [`decode_activity`] is the single boundary where backend payloads enter
//! the application; nothing downstream sees an unvalidated or legacy shape.

use crate::models::Activity;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Structured location pair from the first schema revision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Activity payload as written by first-revision clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub duration: f64,
    pub calorie_consumption: f64,
    pub timestamp: i64,
    /// Renamed to `userNickname` in later revisions
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Dropped in later revisions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    /// Replaced by an opaque string in later revisions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
}

/// Union of the activity payload shapes observed on the wire.
///
/// The two revisions are discriminated by their required user field
/// (`userNickname` vs `userName`), so no explicit tag is needed and legacy
/// payloads keep decoding unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VersionedActivity {
    Current(Activity),
    V1(ActivityV1),
}

impl VersionedActivity {
    /// Normalize to the canonical current-schema [`Activity`].
    ///
    /// Legacy payloads get the field rename applied, the coordinate pair
    /// flattened to a `"lat,lon"` string, and any `comments` folded into
    /// `notes` so no user text is silently lost.
    pub fn migrate(self) -> Activity {
        match self {
            VersionedActivity::Current(activity) => activity,
            VersionedActivity::V1(legacy) => {
                let location = legacy
                    .location
                    .map(|c| format!("{},{}", c.latitude, c.longitude));
                let notes = merge_comments(legacy.notes, legacy.comments);
                Activity {
                    id: legacy.id,
                    activity_type: legacy.activity_type,
                    duration: legacy.duration,
                    calorie_consumption: legacy.calorie_consumption,
                    timestamp: legacy.timestamp,
                    user_nickname: legacy.user_name,
                    notes,
                    image_url: legacy.image_url,
                    location,
                }
            }
        }
    }
}

fn merge_comments(notes: Option<String>, comments: Option<Vec<String>>) -> Option<String> {
    let comments = match comments {
        Some(c) if !c.is_empty() => c.join("\n"),
        _ => return notes,
    };
    match notes {
        Some(notes) => Some(format!("{notes}\n{comments}")),
        None => Some(comments),
    }
}

/// Errors produced at the payload boundary.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The payload matched neither schema revision
    #[error("Malformed activity payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload parsed but violated a field constraint
    #[error("Invalid activity payload: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Decode an activity payload arriving from the backend.
///
/// Accepts either schema revision, migrates to the canonical shape, and
/// validates field constraints. This is the only entry point page logic
/// should receive activities through.
pub fn decode_activity(raw: &[u8]) -> Result<Activity, PayloadError> {
    let versioned: VersionedActivity = serde_json::from_slice(raw)?;
    let activity = versioned.migrate();
    activity.validate()?;
    Ok(activity)
}
