//! Glue shared by `report` and `export`: settings resolution, ingestion and
//! reconciliation.

use crate::cli::parser::{InputArgs, ShiftArgs};
use crate::config::Config;
use crate::core::{ReconcileOptions, reconcile_by_employee};
use crate::errors::AppResult;
use crate::export::range::filter_by_range;
use crate::ingest;
use crate::models::{DailyRecord, ShiftConfig};
use crate::utils::path::expand_tilde;
use std::collections::BTreeMap;
use tracing::info;

/// Merge CLI flags over the configuration file. Switching to a different
/// shift kind on the command line drops the configured start/end.
pub(crate) fn resolve_settings(
    args: &ShiftArgs,
    cfg: &Config,
) -> AppResult<(ShiftConfig, ReconcileOptions)> {
    let mut effective = cfg.clone();

    if let Some(kind) = args.shift.filter(|k| *k != cfg.shift) {
        effective.shift = kind;
        effective.shift_start = None;
        effective.shift_end = None;
    }
    if let Some(start) = &args.start {
        effective.shift_start = Some(start.clone());
    }
    if let Some(end) = &args.end {
        effective.shift_end = Some(end.clone());
    }
    if let Some(offset) = &args.offset {
        effective.utc_offset = offset.clone();
    }
    if let Some(overnight) = &args.overnight {
        effective.overnight = overnight.clone();
    }

    let shift = effective.shift_config()?;
    // Fail on a bad shift before touching the input file.
    shift.window()?;

    Ok((shift, effective.reconcile_options()?))
}

/// Load, validate and reconcile the input file; one entry per employee,
/// records filtered by `--range`.
pub(crate) fn reconcile_input(
    args: &InputArgs,
    cfg: &Config,
) -> AppResult<BTreeMap<String, Vec<DailyRecord>>> {
    let (shift, options) = resolve_settings(&args.shift, cfg)?;

    let mut events = ingest::load_events(&expand_tilde(&args.input), &options.offset)?;
    if let Some(employee) = &args.employee {
        events.retain(|e| &e.employee_id == employee);
    }

    info!(
        input = %args.input,
        events = events.len(),
        shift = shift.kind.as_str(),
        "reconciling input file"
    );

    let per_employee = reconcile_by_employee(&events, &shift, &options)?;

    let mut out = BTreeMap::new();
    for (employee, records) in per_employee {
        out.insert(employee, filter_by_range(records, args.range.as_deref())?);
    }
    Ok(out)
}
