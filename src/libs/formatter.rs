//! Display formatting for derived report figures.
//!
//! Reports carry real-valued day figures and heterogeneous stored dates;
//! tables want short stable strings. Everything here is presentation only:
//! nothing is rounded or substituted before the report value is computed.
//!
//! ## Format Specifications
//!
//! - Day figures render with one decimal place ("12.3"); negative figures
//!   keep their sign, since a finish date before the creation date is
//!   surfaced as-is.
//! - Stored dates render as `%Y-%m-%d %H:%M` in UTC; an absent date renders
//!   as "-", an unconvertible one as its raw text.
//!
//! ## Examples
//!
//! ```rust
//! use obra::libs::formatter::{format_days, format_millis_as_days};
//!
//! assert_eq!(format_days(12.34), "12.3");
//! assert_eq!(format_days(-2.0), "-2.0");
//! assert_eq!(format_millis_as_days(129_600_000), "1.5 days");
//! ```

use super::dates::{to_epoch_millis, DateValue, MILLIS_PER_DAY};
use chrono::DateTime;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const ABSENT: &str = "-";

/// Renders a real-valued day figure with one decimal place.
pub fn format_days(days: f64) -> String {
    format!("{:.1}", days)
}

/// Renders a cumulative millisecond figure as days with one decimal place.
pub fn format_millis_as_days(millis: i64) -> String {
    format!("{:.1} days", millis as f64 / MILLIS_PER_DAY)
}

/// Renders a stored date for table display.
///
/// Absent dates render as "-". A value that cannot be converted renders as
/// its raw text so the table shows what the record actually holds.
pub fn format_date(value: Option<&DateValue>) -> String {
    let Some(value) = value else {
        return ABSENT.to_string();
    };
    match to_epoch_millis(Some(value)) {
        Ok(Some(millis)) => DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| ABSENT.to_string()),
        _ => match value {
            DateValue::Raw(raw) => raw.clone(),
            other => format!("{:?}", other),
        },
    }
}
