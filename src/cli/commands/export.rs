use super::common::reconcile_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let per_employee = reconcile_input(input, cfg)?;
        let records: Vec<_> = per_employee.into_values().flatten().collect();
        ExportLogic::export(&records, *format, file, *force)?;
    }
    Ok(())
}
