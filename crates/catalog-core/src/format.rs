//! # Display Helpers
//!
//! Small formatters for cards, tables and tooltips.

use chrono::{DateTime, Utc};

use crate::currency::{format_cents, CurrencyConfig};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// A price with full masking. Zero shows as `$0.00`.
///
/// ## Example
/// ```rust
/// use catalog_core::currency::CurrencyConfig;
/// use catalog_core::format::format_price;
///
/// assert_eq!(format_price(12999, &CurrencyConfig::default()), "$129.99");
/// ```
pub fn format_price(cents: i64, config: &CurrencyConfig) -> String {
    format_cents(cents, config)
}

/// Long US-style date: `January 5, 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Coarse "time ago" label.
///
/// Months are 30 days and years 365. A `then` in the future reads as
/// "Just now".
///
/// ## Example
/// ```rust
/// use chrono::{Duration, Utc};
/// use catalog_core::format::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(now - Duration::hours(3), now), "3 hours ago");
/// ```
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    let (count, unit) = match seconds {
        s if s < MINUTE => return "Just now".to_string(),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < MONTH => (s / DAY, "day"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap();
        assert_eq!(format_date(date), "January 5, 2024");

        let date = Utc.with_ymd_and_hms(2023, 11, 28, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "November 28, 2023");
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let ago = |delta: Duration| format_relative_time(now - delta, now);

        assert_eq!(ago(Duration::seconds(59)), "Just now");
        assert_eq!(ago(Duration::seconds(-30)), "Just now");
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(45)), "45 minutes ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
        assert_eq!(ago(Duration::days(2)), "2 days ago");
        assert_eq!(ago(Duration::days(29)), "29 days ago");
        assert_eq!(ago(Duration::days(30)), "1 month ago");
        assert_eq!(ago(Duration::days(200)), "6 months ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0, &CurrencyConfig::default()), "$0.00");
        assert_eq!(format_price(-550, &CurrencyConfig::default()), "-$5.50");
    }
}
