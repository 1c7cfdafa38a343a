use crate::utils::time::format_minutes;
use chrono::NaiveDate;
use serde::Serialize;

/// Sentinel reported as clock-out for a day that has no clock-out yet.
pub const NO_CLOCK_OUT: &str = "N/A";

/// Reconciled view of one calendar day.
///
/// Every minute field is derived from the raw events of the day; none is
/// stored independently of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub clock_in: String,
    pub clock_out: String,
    pub late_minutes: i64,
    pub undertime_minutes: i64,
    pub regular_minutes: i64,
    pub overtime_minutes: i64,
    pub total_minutes: i64,
    /// The clock-out was attributed to this day from the following date.
    pub overnight: bool,
}

impl DailyRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_open(&self) -> bool {
        self.clock_out == NO_CLOCK_OUT
    }

    pub fn late(&self) -> String {
        format_minutes(self.late_minutes)
    }

    pub fn undertime(&self) -> String {
        format_minutes(self.undertime_minutes)
    }

    pub fn regular(&self) -> String {
        format_minutes(self.regular_minutes)
    }

    pub fn overtime(&self) -> String {
        format_minutes(self.overtime_minutes)
    }

    pub fn total(&self) -> String {
        format_minutes(self.total_minutes)
    }
}
