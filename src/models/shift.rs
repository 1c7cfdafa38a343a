use crate::errors::ValidationError;
use crate::utils::time::parse_time;
use chrono::{NaiveTime, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Shift roster kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    Morning,
    Mid,
    Night,
    Custom,
    None,
}

impl ShiftKind {
    /// Default (start, end) hours of the named shifts. Each spans 9 hours,
    /// unpaid lunch included. `Custom` and `None` have no table entry.
    pub fn default_hours(&self) -> Option<(u32, u32)> {
        match self {
            ShiftKind::Morning => Some((5, 14)),
            ShiftKind::Mid => Some((13, 22)),
            ShiftKind::Night => Some((22, 7)),
            ShiftKind::Custom | ShiftKind::None => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Mid => "mid",
            ShiftKind::Night => "night",
            ShiftKind::Custom => "custom",
            ShiftKind::None => "none",
        }
    }

    pub fn named() -> [ShiftKind; 3] {
        [ShiftKind::Morning, ShiftKind::Mid, ShiftKind::Night]
    }
}

/// Resolved wall-clock window of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftWindow {
    pub fn spans_midnight(&self) -> bool {
        self.start > self.end
    }

    pub fn start_minute(&self) -> i64 {
        (self.start.hour() * 60 + self.start.minute()) as i64
    }
}

/// Shift setup for one reconciliation run.
///
/// Named shifts take their hours from [`ShiftKind::default_hours`] unless
/// `start_hour`/`end_hour` override them; a `Custom` shift needs both
/// `custom_start` and `custom_end` as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub kind: ShiftKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_end: Option<String>,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self::none()
    }
}

impl ShiftConfig {
    pub fn named(kind: ShiftKind) -> Self {
        Self {
            kind,
            start_hour: None,
            end_hour: None,
            custom_start: None,
            custom_end: None,
        }
    }

    pub fn with_hours(kind: ShiftKind, start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour: Some(start_hour),
            end_hour: Some(end_hour),
            ..Self::named(kind)
        }
    }

    pub fn custom(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            custom_start: Some(start.into()),
            custom_end: Some(end.into()),
            ..Self::named(ShiftKind::Custom)
        }
    }

    pub fn none() -> Self {
        Self::named(ShiftKind::None)
    }

    /// Build a config from user-facing parts (config file or CLI flags).
    /// For named shifts `start`/`end` override the default hours and must
    /// be `HH` or `HH:00`; for `Custom` they are the `HH:MM` bounds.
    pub fn from_parts(
        kind: ShiftKind,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, ValidationError> {
        match kind {
            ShiftKind::Custom => Ok(Self {
                custom_start: start.map(str::to_string),
                custom_end: end.map(str::to_string),
                ..Self::named(kind)
            }),
            ShiftKind::None => Ok(Self::none()),
            _ => Ok(Self {
                start_hour: start.map(parse_hour).transpose()?,
                end_hour: end.map(parse_hour).transpose()?,
                ..Self::named(kind)
            }),
        }
    }

    /// Validate the configuration and resolve its wall-clock window.
    /// `Ok(None)` means no shift: lateness is never computed.
    pub fn window(&self) -> Result<Option<ShiftWindow>, ValidationError> {
        match self.kind {
            ShiftKind::None => Ok(None),
            ShiftKind::Custom => {
                let (Some(start), Some(end)) = (&self.custom_start, &self.custom_end) else {
                    return Err(ValidationError::CustomShiftIncomplete);
                };
                let start = parse_time(start)
                    .ok_or_else(|| ValidationError::InvalidShiftTime(start.clone()))?;
                let end =
                    parse_time(end).ok_or_else(|| ValidationError::InvalidShiftTime(end.clone()))?;
                Ok(Some(ShiftWindow { start, end }))
            }
            kind => {
                let (def_start, def_end) = kind.default_hours().unwrap_or((0, 0));
                let start = hour_to_time(self.start_hour.unwrap_or(def_start))?;
                let end = hour_to_time(self.end_hour.unwrap_or(def_end))?;
                Ok(Some(ShiftWindow { start, end }))
            }
        }
    }
}

fn parse_hour(s: &str) -> Result<u32, ValidationError> {
    let raw = s.trim();
    if let Ok(h) = raw.parse::<u32>() {
        return Ok(h);
    }
    match parse_time(raw) {
        Some(t) if t.minute() == 0 => Ok(t.hour()),
        _ => Err(ValidationError::InvalidShiftTime(s.to_string())),
    }
}

fn hour_to_time(hour: u32) -> Result<NaiveTime, ValidationError> {
    NaiveTime::from_hms_opt(hour, 0, 0).ok_or(ValidationError::InvalidShiftHour(hour))
}
