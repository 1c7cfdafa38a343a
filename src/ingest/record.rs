//! Loosely-typed event records as they arrive from files, and their
//! one-time validation into [`RawEvent`].

use crate::errors::ValidationError;
use crate::models::event::RawEvent;
use crate::models::event_type::EventType;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

/// Timestamp as supplied: epoch milliseconds or text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimestampField {
    Millis(i64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEventRecord {
    #[serde(default, alias = "employeeId")]
    pub employee_id: Option<String>,
    #[serde(default, alias = "kind")]
    pub action: Option<String>,
    #[serde(default)]
    pub timestamp: Option<TimestampField>,
}

/// Validate every record or fail on the first bad one.
/// `offset` interprets timestamps written without an offset.
pub fn validate_records(
    records: &[RawEventRecord],
    offset: &FixedOffset,
) -> Result<Vec<RawEvent>, ValidationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, rec)| validate_record(index, rec, offset))
        .collect()
}

pub fn validate_record(
    index: usize,
    rec: &RawEventRecord,
    offset: &FixedOffset,
) -> Result<RawEvent, ValidationError> {
    let employee_id = rec
        .employee_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingField {
            index,
            field: "employee_id",
        })?;

    let action = rec
        .action
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::MissingField {
            index,
            field: "action",
        })?;
    let kind = EventType::et_from_str(action).ok_or_else(|| ValidationError::UnknownAction {
        index,
        value: action.to_string(),
    })?;

    let timestamp = match &rec.timestamp {
        None => {
            return Err(ValidationError::MissingField {
                index,
                field: "timestamp",
            });
        }
        Some(TimestampField::Millis(ms)) => {
            in_range(*ms).ok_or_else(|| ValidationError::InvalidTimestamp {
                index,
                value: ms.to_string(),
            })?
        }
        Some(TimestampField::Text(text)) if text.trim().is_empty() => {
            return Err(ValidationError::MissingField {
                index,
                field: "timestamp",
            });
        }
        Some(TimestampField::Text(text)) => {
            parse_timestamp(text, offset).ok_or_else(|| ValidationError::InvalidTimestamp {
                index,
                value: text.clone(),
            })?
        }
    };

    Ok(RawEvent::new(employee_id, kind, timestamp))
}

/// Epoch milliseconds that chrono can place on a calendar.
fn in_range(ms: i64) -> Option<i64> {
    Utc.timestamp_millis_opt(ms).single().map(|_| ms)
}

/// Accepts epoch milliseconds, RFC 3339, or `YYYY-MM-DD HH:MM[:SS]`
/// (also with a `T` separator) read as local time in `offset`.
pub fn parse_timestamp(text: &str, offset: &FixedOffset) -> Option<i64> {
    let t = text.trim();

    if let Ok(ms) = t.parse::<i64>() {
        return in_range(ms);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.timestamp_millis());
    }

    const LOCAL_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    LOCAL_FORMATS.iter().find_map(|fmt| {
        let naive = NaiveDateTime::parse_from_str(t, fmt).ok()?;
        offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.timestamp_millis())
    })
}
