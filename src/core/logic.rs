use crate::core::calculator::{balance, grouping, lateness, pairing};
use crate::core::options::ReconcileOptions;
use crate::errors::ValidationError;
use crate::models::daily_record::{DailyRecord, NO_CLOCK_OUT};
use crate::models::event::RawEvent;
use crate::models::shift::ShiftConfig;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub struct Core;

impl Core {
    /// Reconcile one employee's events into one record per calendar day
    /// holding at least one clock-in, ascending by date.
    ///
    /// Pure and deterministic: the same inputs always produce the same
    /// records. An empty slice is a successful empty result.
    pub fn reconcile(
        events: &[RawEvent],
        shift: &ShiftConfig,
        options: &ReconcileOptions,
    ) -> Result<Vec<DailyRecord>, ValidationError> {
        let window = shift.window()?;

        let Some(first) = events.first() else {
            return Ok(Vec::new());
        };
        let employee_id = first.employee_id.as_str();
        if let Some(other) = events.iter().find(|e| e.employee_id != employee_id) {
            return Err(ValidationError::MixedEmployees {
                first: employee_id.to_string(),
                other: other.employee_id.clone(),
            });
        }

        if let Some(bad) = events.iter().find(|e| e.instant().is_none()) {
            return Err(ValidationError::TimestampOutOfRange {
                employee: bad.employee_id.clone(),
                timestamp: bad.timestamp,
            });
        }

        let cutoff = options.overnight.cutoff_for(window.as_ref());
        let days = grouping::group_by_day(events, &options.offset, cutoff);

        debug!(
            employee = employee_id,
            events = events.len(),
            days = days.len(),
            shift = shift.kind.as_str(),
            overnight = %options.overnight,
            "reconciling timesheet"
        );

        let mut records = Vec::with_capacity(days.len());

        for (date, bucket) in &days {
            let Some(pair) = pairing::pair_day(bucket) else {
                warn!(
                    employee = employee_id,
                    %date,
                    discarded = bucket.outs.len(),
                    "clock-outs without a clock-in discarded"
                );
                continue;
            };

            let clock_in = pair.first_in.local.time();
            let late_minutes =
                lateness::late_minutes(clock_in, pair.first_in.rolled_back, window.as_ref());
            let split = balance::split_workday(pair.total_minutes);

            let (clock_out, overnight) = match pair.last_out {
                Some(out) => (out.local.format("%H:%M").to_string(), out.rolled_back),
                None => (NO_CLOCK_OUT.to_string(), false),
            };

            records.push(DailyRecord {
                employee_id: employee_id.to_string(),
                date: *date,
                clock_in: clock_in.format("%H:%M").to_string(),
                clock_out,
                late_minutes,
                undertime_minutes: split.undertime_minutes,
                regular_minutes: split.regular_minutes,
                overtime_minutes: split.overtime_minutes,
                total_minutes: pair.total_minutes,
                overnight,
            });
        }

        Ok(records)
    }

    /// Partition a batch by employee and reconcile each partition on its own.
    pub fn reconcile_by_employee(
        events: &[RawEvent],
        shift: &ShiftConfig,
        options: &ReconcileOptions,
    ) -> Result<BTreeMap<String, Vec<DailyRecord>>, ValidationError> {
        let mut partitions: BTreeMap<&str, Vec<RawEvent>> = BTreeMap::new();
        for ev in events {
            partitions
                .entry(ev.employee_id.as_str())
                .or_default()
                .push(ev.clone());
        }

        let mut out = BTreeMap::new();
        for (employee, evs) in partitions {
            out.insert(employee.to_string(), Self::reconcile(&evs, shift, options)?);
        }

        // Validate the shift even when there is nothing to reconcile.
        if out.is_empty() {
            shift.window()?;
        }

        Ok(out)
    }
}
