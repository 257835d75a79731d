// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Activity payload contract (current schema).
//!
//! Field names on the wire are camelCase to match the client's TypeScript
//! contract. These are pure shape contracts: presence of the required
//! fields is enforced by deserialization, value constraints by
//! [`validator::Validate`], and nothing else.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// One logged exercise event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct Activity {
    /// Unique identifier, assigned by the backend on creation.
    /// Absent for records not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Category label (references an [`ActivityType`] name)
    ///
    /// [`ActivityType`]: crate::models::ActivityType
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub activity_type: String,
    /// Elapsed time in minutes
    #[validate(range(min = 0.0, message = "duration must not be negative"))]
    pub duration: f64,
    /// Estimated energy expenditure in kilocalories
    #[validate(range(min = 0.0, message = "calorieConsumption must not be negative"))]
    pub calorie_consumption: f64,
    /// When the activity occurred, in milliseconds since the Unix epoch
    #[validate(range(min = 0, message = "timestamp must not be negative"))]
    pub timestamp: i64,
    /// Nickname of the authoring user
    #[validate(length(min = 1, message = "userNickname must not be empty"))]
    pub user_nickname: String,
    /// Free-text annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Reference to an associated image resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Opaque location label (legacy coordinate pairs are flattened to
    /// `"lat,lon"` on migration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Activity {
    /// The activity's timestamp as a UTC datetime, if representable.
    pub fn occurred_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::time_utils::timestamp_to_utc(self.timestamp)
    }
}

/// Backend response wrapping a single activity keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct ActivityResponse {
    pub activities_by_id: Activity,
}

/// Backend response wrapping a list of activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct ActivityListResponse {
    pub activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Activity {
        Activity {
            id: None,
            activity_type: "running".to_string(),
            duration: 30.0,
            calorie_consumption: 250.0,
            timestamp: 1_700_000_000_000,
            user_nickname: "ada".to_string(),
            notes: None,
            image_url: None,
            location: None,
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(minimal()).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("calorieConsumption").is_some());
        assert!(json.get("userNickname").is_some());
        // Absent optionals are omitted, not serialized as null
        assert!(json.get("id").is_none());
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_occurred_at() {
        let activity = minimal();
        let dt = activity.occurred_at().unwrap();
        assert_eq!(crate::time_utils::format_utc_rfc3339(dt), "2023-11-14T22:13:20Z");
    }
}
