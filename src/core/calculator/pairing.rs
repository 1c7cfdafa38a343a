//! Earliest-in / latest-out pairing of a day bucket.

use super::grouping::{DayBucket, Placed};
use crate::utils::time::ms_to_minutes_rounded;

#[derive(Debug, Clone, Copy)]
pub struct DayPair<'a> {
    pub first_in: Placed<'a>,
    pub last_out: Option<Placed<'a>>,
    pub total_minutes: i64,
}

/// Collapse a bucket to its extremes. Intermediate in/out pairs are not
/// validated or summed. `None` when the day has no clock-in: such buckets
/// hold only unpaired clock-outs and are discarded.
pub fn pair_day<'a>(bucket: &DayBucket<'a>) -> Option<DayPair<'a>> {
    let first_in = *bucket.ins.first()?;
    let last_out = bucket.outs.last().copied();

    // No close event: total stays 0 regardless of elapsed time.
    let total_minutes = last_out
        .map(|out| {
            let span = out.event.timestamp.saturating_sub(first_in.event.timestamp);
            ms_to_minutes_rounded(span).max(0)
        })
        .unwrap_or(0);

    Some(DayPair {
        first_in,
        last_out,
        total_minutes,
    })
}
