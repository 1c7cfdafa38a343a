use super::event_type::EventType;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A validated clock action. Immutable historical fact: the engine never
/// mutates or stores these, it only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub employee_id: String,
    pub kind: EventType,
    /// Epoch milliseconds. Source of truth for ordering and day bucketing.
    pub timestamp: i64,
}

impl RawEvent {
    pub fn new(employee_id: impl Into<String>, kind: EventType, timestamp: i64) -> Self {
        Self {
            employee_id: employee_id.into(),
            kind,
            timestamp,
        }
    }

    pub fn clock_in(employee_id: impl Into<String>, timestamp: i64) -> Self {
        Self::new(employee_id, EventType::In, timestamp)
    }

    pub fn clock_out(employee_id: impl Into<String>, timestamp: i64) -> Self {
        Self::new(employee_id, EventType::Out, timestamp)
    }

    /// The event's instant, `None` when the timestamp is outside chrono's range.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    /// Wall-clock instant of the event in the given offset.
    pub fn local(&self, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
        self.instant().map(|utc| utc.with_timezone(offset))
    }
}
