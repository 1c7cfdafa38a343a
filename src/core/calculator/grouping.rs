//! Partition raw events into local calendar-day buckets.

use crate::models::event::RawEvent;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// An event placed in a bucket with its local wall-clock instant,
/// remembering whether the overnight cutoff moved it back from the
/// following date.
#[derive(Debug, Clone, Copy)]
pub struct Placed<'a> {
    pub event: &'a RawEvent,
    pub local: DateTime<FixedOffset>,
    pub rolled_back: bool,
}

/// Events of one local calendar day, each side ascending by timestamp.
#[derive(Debug, Default, Clone)]
pub struct DayBucket<'a> {
    pub ins: Vec<Placed<'a>>,
    pub outs: Vec<Placed<'a>>,
}

/// Which events the overnight cutoff applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    pub time: NaiveTime,
    /// Clock-ins before `time` also belong to the previous date. Only set
    /// for shifts that span midnight.
    pub moves_ins: bool,
}

/// Group events by local date.
///
/// With a `cutoff`, clock-outs whose local time is strictly before it are
/// attributed to the previous date, and so are clock-ins when
/// [`Cutoff::moves_ins`] is set. Events whose timestamp has no local
/// instant are skipped; `Core::reconcile` rejects them before grouping.
pub fn group_by_day<'a>(
    events: &'a [RawEvent],
    offset: &FixedOffset,
    cutoff: Option<Cutoff>,
) -> BTreeMap<NaiveDate, DayBucket<'a>> {
    let mut sorted: Vec<&RawEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut days: BTreeMap<NaiveDate, DayBucket<'a>> = BTreeMap::new();

    for ev in sorted {
        let Some(local) = ev.local(offset) else {
            continue;
        };
        let date = local.date_naive();
        let is_in = ev.kind.is_in();

        let rolled_back = cutoff.is_some_and(|c| (!is_in || c.moves_ins) && local.time() < c.time);
        let target = if rolled_back {
            date.pred_opt().unwrap_or(date)
        } else {
            date
        };

        let placed = Placed {
            event: ev,
            local,
            rolled_back,
        };
        let bucket = days.entry(target).or_default();
        if is_in {
            bucket.ins.push(placed);
        } else {
            bucket.outs.push(placed);
        }
    }

    days
}
