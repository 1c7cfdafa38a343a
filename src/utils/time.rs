//! Time utilities: parsing HH:MM and UTC offsets, minute arithmetic, formatting.

use crate::errors::ValidationError;
use chrono::{FixedOffset, NaiveTime, Timelike};

const MS_PER_MINUTE: i64 = 60_000;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Minutes since midnight, seconds ignored.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Millisecond span to whole minutes, rounded half away from zero.
pub fn ms_to_minutes_rounded(ms: i64) -> i64 {
    let half = MS_PER_MINUTE / 2;
    if ms >= 0 {
        ms.saturating_add(half) / MS_PER_MINUTE
    } else {
        ms.saturating_sub(half) / MS_PER_MINUTE
    }
}

/// Zero-padded `HH:MM`. Negative values clamp to `00:00`; hours may exceed 99.
pub fn format_minutes(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Parse `+HH:MM`, `-HH:MM`, `Z` or `UTC`.
pub fn parse_offset(s: &str) -> Result<FixedOffset, ValidationError> {
    let raw = s.trim();
    let err = || ValidationError::InvalidOffset(s.to_string());

    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(err);
    }

    let (sign, rest) = match raw.chars().next() {
        Some('+') => (1, &raw[1..]),
        Some('-') => (-1, &raw[1..]),
        _ => return Err(err()),
    };

    let (h, m) = rest.split_once(':').ok_or_else(err)?;
    let h: i32 = h.parse().map_err(|_| err())?;
    let m: i32 = m.parse().map_err(|_| err())?;
    if !(0..=23).contains(&h) || !(0..=59).contains(&m) {
        return Err(err());
    }

    FixedOffset::east_opt(sign * (h * 3600 + m * 60)).ok_or_else(err)
}
