//! Timesheet reconciliation engine. No I/O happens below this module.

pub mod calculator;
pub mod logic;
pub mod options;

pub use calculator::balance::STANDARD_WORKDAY_MINUTES;
pub use logic::Core;
pub use options::{OvernightPolicy, ReconcileOptions};

use crate::errors::ValidationError;
use crate::models::{DailyRecord, RawEvent, ShiftConfig};
use std::collections::BTreeMap;

/// See [`Core::reconcile`].
pub fn reconcile(
    events: &[RawEvent],
    shift: &ShiftConfig,
    options: &ReconcileOptions,
) -> Result<Vec<DailyRecord>, ValidationError> {
    Core::reconcile(events, shift, options)
}

/// See [`Core::reconcile_by_employee`].
pub fn reconcile_by_employee(
    events: &[RawEvent],
    shift: &ShiftConfig,
    options: &ReconcileOptions,
) -> Result<BTreeMap<String, Vec<DailyRecord>>, ValidationError> {
    Core::reconcile_by_employee(events, shift, options)
}
