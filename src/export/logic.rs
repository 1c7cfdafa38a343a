// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::records_to_export;
use crate::models::daily_record::DailyRecord;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write already reconciled (and filtered) records to `file`.
    /// An existing file is only replaced with `force` or after confirmation.
    pub fn export(
        records: &[DailyRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("No daily records for the selected range.");
        }

        let rows = records_to_export(records);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
