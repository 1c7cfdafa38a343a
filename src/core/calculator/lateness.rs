use crate::models::shift::ShiftWindow;
use crate::utils::time::minute_of_day;
use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes between the expected shift start and the actual clock-in, both
/// taken as time-of-day. Early or on-time arrivals and runs without a shift
/// yield 0.
///
/// A clock-in `after_midnight` was moved back to the previous date by the
/// overnight cutoff and is measured against that date's shift start.
pub fn late_minutes(
    clock_in: NaiveTime,
    after_midnight: bool,
    window: Option<&ShiftWindow>,
) -> i64 {
    let Some(w) = window else {
        return 0;
    };

    let mut minute = minute_of_day(clock_in);
    if after_midnight {
        minute += MINUTES_PER_DAY;
    }
    (minute - w.start_minute()).max(0)
}
