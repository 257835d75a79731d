// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Shared helpers for date/time handling.
//!
//! Activity timestamps travel on the wire as milliseconds since the Unix
//! epoch (the client records them with `Date.now()`).

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Convert a wire timestamp (milliseconds since epoch) to a UTC datetime.
///
/// Returns `None` for values outside the representable range.
pub fn timestamp_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_utc() {
        let dt = timestamp_to_utc(1_700_000_000_000).unwrap();
        assert_eq!(format_utc_rfc3339(dt), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_timestamp_out_of_range() {
        assert!(timestamp_to_utc(i64::MAX).is_none());
    }
}
