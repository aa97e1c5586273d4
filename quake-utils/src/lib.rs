//! Shared utility functions for quake crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{DateTime, Datelike, Utc};

    /// Convert epoch milliseconds into a UTC timestamp.
    pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, DateError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| DateError(format!("epoch millis out of range: {}", millis)))
    }

    /// Format epoch milliseconds as an en-US numeric calendar date in UTC,
    /// e.g. 1704067200000 -> "1/1/2024". Month and day are not zero padded.
    pub fn format_calendar_date(millis: i64) -> Result<String, DateError> {
        let date = from_epoch_millis(millis)?;
        Ok(format!("{}/{}/{}", date.month(), date.day(), date.year()))
    }

    /// Format epoch milliseconds as a full UTC timestamp for popups,
    /// e.g. "Mon Jan 01 2024 00:00:00 UTC".
    pub fn format_event_time(millis: i64) -> Result<String, DateError> {
        let date = from_epoch_millis(millis)?;
        Ok(date.format("%a %b %d %Y %H:%M:%S UTC").to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        // 2024-01-01T00:00:00Z
        const NEW_YEAR_2024: i64 = 1_704_067_200_000;

        #[test]
        fn test_format_calendar_date() {
            assert_eq!(format_calendar_date(NEW_YEAR_2024).unwrap(), "1/1/2024");
            // 2023-12-31T23:59:59.999Z stays on the last day of the year in UTC
            assert_eq!(
                format_calendar_date(NEW_YEAR_2024 - 1).unwrap(),
                "12/31/2023"
            );
            // 2024-10-15T08:30:00Z
            assert_eq!(
                format_calendar_date(1_728_981_000_000).unwrap(),
                "10/15/2024"
            );
        }

        #[test]
        fn test_format_event_time() {
            assert_eq!(
                format_event_time(NEW_YEAR_2024).unwrap(),
                "Mon Jan 01 2024 00:00:00 UTC"
            );
        }

        #[test]
        fn test_out_of_range() {
            assert!(format_calendar_date(i64::MAX).is_err());
        }
    }
}

/// HTML helpers for popup and legend markup
pub mod html {
    /// Escape text for interpolation into HTML element content or a
    /// double-quoted attribute value.
    pub fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                c => out.push(c),
            }
        }
        out
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
