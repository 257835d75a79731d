// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Activity type catalog entry contract.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Catalog entry describing a kind of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct ActivityType {
    /// Unique identifier
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    /// Display label
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Recommended duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_duration: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_only() {
        let parsed: ActivityType =
            serde_json::from_str(r#"{"id": "at-1", "name": "Running"}"#).unwrap();
        assert_eq!(parsed.id, "at-1");
        assert_eq!(parsed.name, "Running");
        assert!(parsed.description.is_none());
        assert!(parsed.recommended_duration.is_none());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_str::<ActivityType>(r#"{"id": "at-1"}"#);
        assert!(result.is_err());
    }
}
