//! Event file ingestion (JSON / CSV).

pub mod record;

pub use record::{RawEventRecord, TimestampField, parse_timestamp, validate_records};

use crate::errors::{AppError, AppResult};
use crate::models::event::RawEvent;
use chrono::FixedOffset;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// CSV rows keep every column as text; numbers are re-detected on validation.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default, alias = "employeeId")]
    employee_id: Option<String>,
    #[serde(default, alias = "kind")]
    action: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

impl From<CsvRow> for RawEventRecord {
    fn from(row: CsvRow) -> Self {
        RawEventRecord {
            employee_id: row.employee_id,
            action: row.action,
            timestamp: row.timestamp.map(TimestampField::Text),
        }
    }
}

pub fn read_json<R: Read>(reader: R) -> AppResult<Vec<RawEventRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn read_csv<R: Read>(reader: R) -> AppResult<Vec<RawEventRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut out = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        out.push(row?.into());
    }
    Ok(out)
}

/// Load and validate an event file, choosing the format by extension.
pub fn load_events(path: &Path, offset: &FixedOffset) -> AppResult<Vec<RawEvent>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let file = fs::File::open(path)?;
    let records = match ext.as_str() {
        "json" => read_json(file)?,
        "csv" => read_csv(file)?,
        _ => return Err(AppError::InvalidInputFormat(path.display().to_string())),
    };

    debug!(path = %path.display(), records = records.len(), "event file read");

    Ok(validate_records(&records, offset)?)
}
