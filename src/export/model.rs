// src/export/model.rs

use crate::models::daily_record::DailyRecord;
use serde::Serialize;

/// Flat export row: every duration rendered as `HH:MM`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DailyRecordExport {
    pub employee_id: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub late: String,
    pub undertime: String,
    pub regular: String,
    pub overtime: String,
    pub total: String,
    pub overnight: bool,
}

impl From<&DailyRecord> for DailyRecordExport {
    fn from(r: &DailyRecord) -> Self {
        Self {
            employee_id: r.employee_id.clone(),
            date: r.date_str(),
            clock_in: r.clock_in.clone(),
            clock_out: r.clock_out.clone(),
            late: r.late(),
            undertime: r.undertime(),
            regular: r.regular(),
            overtime: r.overtime(),
            total: r.total(),
            overnight: r.overnight,
        }
    }
}

/// Column headers, in serialization order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "employee_id",
        "date",
        "clock_in",
        "clock_out",
        "late",
        "undertime",
        "regular",
        "overtime",
        "total",
        "overnight",
    ]
}

pub(crate) fn records_to_export(records: &[DailyRecord]) -> Vec<DailyRecordExport> {
    records.iter().map(DailyRecordExport::from).collect()
}
