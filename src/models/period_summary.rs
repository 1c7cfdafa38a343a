use super::daily_record::DailyRecord;
use serde::Serialize;

/// Totals over a run of daily records, as shown in report footers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub days: usize,
    pub open_days: usize,
    pub late_days: usize,
    pub late_minutes: i64,
    pub undertime_minutes: i64,
    pub regular_minutes: i64,
    pub overtime_minutes: i64,
    pub total_minutes: i64,
}

impl PeriodSummary {
    pub fn from_records(records: &[DailyRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.days += 1;
            if r.is_open() {
                acc.open_days += 1;
            }
            if r.late_minutes > 0 {
                acc.late_days += 1;
            }
            acc.late_minutes += r.late_minutes;
            acc.undertime_minutes += r.undertime_minutes;
            acc.regular_minutes += r.regular_minutes;
            acc.overtime_minutes += r.overtime_minutes;
            acc.total_minutes += r.total_minutes;
            acc
        })
    }
}
