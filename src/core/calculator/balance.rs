/// Fixed standard workday, independent of the configured shift span.
pub const STANDARD_WORKDAY_MINUTES: i64 = 480;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkBalance {
    pub regular_minutes: i64,
    pub overtime_minutes: i64,
    pub undertime_minutes: i64,
}

/// Split a day's total against the standard workday.
pub fn split_workday(total_minutes: i64) -> WorkBalance {
    let total = total_minutes.max(0);

    if total >= STANDARD_WORKDAY_MINUTES {
        WorkBalance {
            regular_minutes: STANDARD_WORKDAY_MINUTES,
            overtime_minutes: total - STANDARD_WORKDAY_MINUTES,
            undertime_minutes: 0,
        }
    } else {
        WorkBalance {
            regular_minutes: total,
            overtime_minutes: 0,
            undertime_minutes: STANDARD_WORKDAY_MINUTES - total,
        }
    }
}
