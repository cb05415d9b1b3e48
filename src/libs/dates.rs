//! Date arithmetic shared by both report generators.
//!
//! Store records carry dates in whatever shape the backend happened to write:
//! the backend timestamp wrapper (`{seconds, nanos}`, also seen as
//! `{_seconds, _nanoseconds}` in exports), an RFC 3339 string, a bare epoch
//! number, or a loosely formatted date string. [`DateValue`] absorbs all of
//! them at the deserialization boundary and this module normalizes them to
//! epoch milliseconds on demand.
//!
//! ## Conversion rules
//!
//! - An **absent** field is not an error. [`to_epoch_millis`] returns
//!   `Ok(None)` so callers can treat "no deadline" and "no creation date" as
//!   ordinary states.
//! - A **present but unconvertible** value is a [`RecordError::InvalidDate`].
//!   Callers absorb it at the metric that hit it (logged at debug level) and
//!   keep going; one bad record never aborts a report.
//!
//! ## Day figures
//!
//! [`days_between`] returns real-valued days and is never rounded here.
//! [`days_remaining`] applies the ceiling only to the positive case and
//! collapses everything at or past the deadline into [`RemainingDays::Finished`];
//! the caller must consult `project.status` to tell "done on time" apart from
//! "overdue". [`project_duration`] requires a usable creation date and falls
//! back to "now" only when the finish date is absent, so in-flight projects
//! report their duration so far.

use super::errors::RecordError;
use super::project::Project;
use crate::msg_debug;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Backend timestamp wrapper as stored by the platform.
///
/// Accepts both the live API spelling (`seconds`/`nanos`) and the export
/// spelling (`_seconds`/`_nanoseconds`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendTimestamp {
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    #[serde(default, alias = "_nanoseconds", alias = "nanoseconds")]
    pub nanos: u32,
}

impl BackendTimestamp {
    pub fn to_date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }
}

/// One date-like field as it arrives from the store.
///
/// Variant order matters for untagged deserialization: the wrapper object is
/// tried first, then a strict RFC 3339 string, then a bare number, and any
/// other string is kept verbatim for [`to_epoch_millis`] to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(BackendTimestamp),
    DateTime(DateTime<Utc>),
    Millis(i64),
    Raw(String),
}

/// Loose parser for date strings the strict RFC 3339 path rejected.
fn parse_raw_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Normalizes an optional date field to epoch milliseconds.
///
/// Absence is `Ok(None)`; a present value that cannot be converted is an
/// [`RecordError::InvalidDate`] carrying the offending representation.
pub fn to_epoch_millis(value: Option<&DateValue>) -> Result<Option<i64>, RecordError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let millis = match value {
        DateValue::Timestamp(ts) => ts.to_date_time().map(|dt| dt.timestamp_millis()),
        DateValue::DateTime(dt) => Some(dt.timestamp_millis()),
        DateValue::Millis(ms) => Some(*ms),
        DateValue::Raw(raw) => parse_raw_date(raw).map(|dt| dt.timestamp_millis()),
    };
    millis
        .map(Some)
        .ok_or_else(|| RecordError::InvalidDate {
            value: match value {
                DateValue::Raw(raw) => raw.clone(),
                other => format!("{:?}", other),
            },
        })
}

/// Real-valued days between two epoch instants, fractional, never rounded.
pub fn days_between(start_millis: i64, end_millis: i64) -> f64 {
    (end_millis - start_millis) as f64 / MILLIS_PER_DAY
}

/// Remaining-time classification of a project's deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainingDays {
    NoDeadline,
    Days(u32),
    Finished,
}

impl Serialize for RemainingDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RemainingDays::NoDeadline => serializer.serialize_str("No deadline"),
            RemainingDays::Days(days) => serializer.serialize_u32(*days),
            RemainingDays::Finished => serializer.serialize_str("Finished"),
        }
    }
}

impl fmt::Display for RemainingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemainingDays::NoDeadline => write!(f, "No deadline"),
            RemainingDays::Days(days) => write!(f, "{}", days),
            RemainingDays::Finished => write!(f, "Finished"),
        }
    }
}

/// Classifies how much time a project has left before its deadline.
///
/// No deadline and an unconvertible deadline are different cases: the former
/// is [`RemainingDays::NoDeadline`], the latter is absorbed into
/// [`RemainingDays::Finished`] after a debug log, matching how the platform
/// has always rendered unreadable deadlines.
pub fn days_remaining(project: &Project, now: DateTime<Utc>) -> RemainingDays {
    match to_epoch_millis(project.finish_date.as_ref()) {
        Ok(None) => RemainingDays::NoDeadline,
        Ok(Some(finish)) => {
            let days = days_between(now.timestamp_millis(), finish);
            if days > 0.0 {
                RemainingDays::Days(days.ceil() as u32)
            } else {
                RemainingDays::Finished
            }
        }
        Err(err) => {
            msg_debug!(format!("project {}: {}", project.id, err));
            RemainingDays::Finished
        }
    }
}

/// Duration of a project in real-valued days.
///
/// Requires a usable `createdAt`; without one the project is excluded from
/// duration aggregates (`None`), not counted as zero. The end boundary is
/// `finishDate` when present, otherwise "now". A finish date earlier than the
/// creation date yields a negative figure and is surfaced as-is.
pub fn project_duration(project: &Project, now: DateTime<Utc>) -> Option<f64> {
    let created = match to_epoch_millis(project.created_at.as_ref()) {
        Ok(Some(millis)) => millis,
        Ok(None) => return None,
        Err(err) => {
            msg_debug!(format!("project {}: {}, duration skipped", project.id, err));
            return None;
        }
    };
    let end = match to_epoch_millis(project.finish_date.as_ref()) {
        Ok(Some(millis)) => millis,
        Ok(None) => now.timestamp_millis(),
        Err(err) => {
            msg_debug!(format!("project {}: {}, duration skipped", project.id, err));
            return None;
        }
    };
    Some(days_between(created, end))
}

/// Cumulative milliseconds spent in each status, from the transition history.
///
/// Each transition accrues to the status being left; the final entry accrues
/// from its timestamp to "now". Entries without a status or without a
/// convertible timestamp are skipped.
pub fn time_in_status(project: &Project, now: DateTime<Utc>) -> BTreeMap<String, i64> {
    let mut entries: Vec<(&str, i64)> = Vec::new();
    for change in &project.status_history {
        if change.status.is_empty() {
            msg_debug!(format!("project {}: status change without a status, skipped", project.id));
            continue;
        }
        match to_epoch_millis(change.timestamp.as_ref()) {
            Ok(Some(millis)) => entries.push((change.status.as_str(), millis)),
            Ok(None) => {
                msg_debug!(format!("project {}: status change {:?} without a timestamp, skipped", project.id, change.status));
            }
            Err(err) => {
                msg_debug!(format!("project {}: status change {:?}: {}, skipped", project.id, change.status, err));
            }
        }
    }

    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for pair in entries.windows(2) {
        *totals.entry(pair[0].0.to_string()).or_insert(0) += pair[1].1 - pair[0].1;
    }
    if let Some((status, entered)) = entries.last() {
        *totals.entry(status.to_string()).or_insert(0) += now.timestamp_millis() - entered;
    }
    totals
}
