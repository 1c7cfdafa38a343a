//! Explicit environment of a reconciliation run.

use crate::core::calculator::grouping::Cutoff;
use crate::errors::ValidationError;
use crate::models::shift::ShiftWindow;
use crate::utils::time::parse_time;
use chrono::{FixedOffset, NaiveTime, Offset, Utc};
use std::fmt;
use std::str::FromStr;

/// Default cutoff used by [`OvernightPolicy::Auto`] for shifts that span midnight.
pub const AUTO_OVERNIGHT_CUTOFF_HOUR: u32 = 12;

/// How events after midnight are attributed to calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OvernightPolicy {
    /// `Cutoff(12:00)` when the shift spans midnight, `Off` otherwise.
    #[default]
    Auto,
    /// Every event stays on its own local date.
    Off,
    /// Clock-outs before this local time belong to the previous date. For a
    /// shift spanning midnight, clock-ins before it do too.
    Cutoff(NaiveTime),
}

impl OvernightPolicy {
    pub fn cutoff_for(&self, window: Option<&ShiftWindow>) -> Option<Cutoff> {
        let spans_midnight = window.is_some_and(ShiftWindow::spans_midnight);
        let time = match self {
            OvernightPolicy::Off => None,
            OvernightPolicy::Cutoff(t) => Some(*t),
            OvernightPolicy::Auto if spans_midnight => {
                NaiveTime::from_hms_opt(AUTO_OVERNIGHT_CUTOFF_HOUR, 0, 0)
            }
            OvernightPolicy::Auto => None,
        }?;

        Some(Cutoff {
            time,
            moves_ins: spans_midnight,
        })
    }
}

impl FromStr for OvernightPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(OvernightPolicy::Auto),
            "off" | "none" => Ok(OvernightPolicy::Off),
            other => parse_time(other)
                .map(OvernightPolicy::Cutoff)
                .ok_or_else(|| ValidationError::InvalidOvernightPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for OvernightPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OvernightPolicy::Auto => write!(f, "auto"),
            OvernightPolicy::Off => write!(f, "off"),
            OvernightPolicy::Cutoff(t) => write!(f, "{}", t.format("%H:%M")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Offset used to derive local dates and wall-clock times.
    pub offset: FixedOffset,
    pub overnight: OvernightPolicy,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
            overnight: OvernightPolicy::Auto,
        }
    }
}

impl ReconcileOptions {
    pub fn new(offset: FixedOffset, overnight: OvernightPolicy) -> Self {
        Self { offset, overnight }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }
}
