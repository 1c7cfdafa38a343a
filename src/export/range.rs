// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::daily_record::DailyRecord;
use chrono::NaiveDate;

fn invalid(msg: &str) -> AppError {
    AppError::InvalidRange(msg.to_string())
}

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start_raw, end_raw) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start_raw.len() != end_raw.len() {
        return Err(invalid("start and end must have same format"));
    }

    let (d1, _) = period_bounds(start_raw)?;
    let (_, d2) = period_bounds(end_raw)?;

    if d1 > d2 {
        return Err(invalid("start is after end"));
    }
    Ok((d1, d2))
}

/// First and last day of a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("invalid month"))?;
            let next = d1
                .checked_add_months(chrono::Months::new(1))
                .ok_or_else(|| invalid("invalid month"))?;
            let d2 = next.pred_opt().ok_or_else(|| invalid("invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported --range format")),
    }
}

/// Keep the records whose date falls inside `range` (`None` or `all` keeps everything).
pub fn filter_by_range(records: Vec<DailyRecord>, range: Option<&str>) -> AppResult<Vec<DailyRecord>> {
    let bounds = match range {
        None => return Ok(records),
        Some(r) if r.eq_ignore_ascii_case("all") => return Ok(records),
        Some(r) => parse_range(r)?,
    };

    Ok(records
        .into_iter()
        .filter(|rec| rec.date >= bounds.0 && rec.date <= bounds.1)
        .collect())
}
