use super::common::reconcile_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{DailyRecord, PeriodSummary};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_clock_out, colorize_minutes, colorize_optional};
use crate::utils::format_minutes;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        newest_first,
        totals,
        plain,
    } = cmd
    {
        let per_employee = reconcile_input(input, cfg)?;

        if per_employee.values().all(Vec::is_empty) {
            info("No daily records for the selected input.");
            return Ok(());
        }

        for (employee, mut records) in per_employee {
            if records.is_empty() {
                continue;
            }
            // Canonical order is ascending; reverse only for display.
            if *newest_first || cfg.newest_first {
                records.reverse();
            }

            header(&employee);
            print!("{}", render_records(&records, !*plain));

            if *totals {
                print_totals(&PeriodSummary::from_records(&records));
            }
            println!();
        }
    }
    Ok(())
}

fn render_records(records: &[DailyRecord], color: bool) -> String {
    let mut table = Table::new(
        [
            "Date", "In", "Out", "Late", "Regular", "Overtime", "Undertime", "Total",
        ]
        .into_iter()
        .map(Column::new)
        .collect(),
    );

    for r in records {
        let out = if r.overnight {
            format!("{} (+1)", r.clock_out)
        } else {
            r.clock_out.clone()
        };

        let row = if color {
            vec![
                r.date_str(),
                r.clock_in.clone(),
                colorize_clock_out(&out, r.is_open()),
                colorize_minutes(&r.late(), r.late_minutes, false),
                colorize_optional(&r.regular()),
                colorize_minutes(&r.overtime(), r.overtime_minutes, true),
                colorize_minutes(&r.undertime(), r.undertime_minutes, false),
                colorize_optional(&r.total()),
            ]
        } else {
            vec![
                r.date_str(),
                r.clock_in.clone(),
                out,
                r.late(),
                r.regular(),
                r.overtime(),
                r.undertime(),
                r.total(),
            ]
        };
        table.add_row(row);
    }

    table.render()
}

fn print_totals(s: &PeriodSummary) {
    println!(
        "Days: {} | Open: {} | Late days: {}",
        s.days, s.open_days, s.late_days
    );
    println!(
        "Late: {} | Regular: {} | Overtime: {} | Undertime: {} | Total: {}",
        format_minutes(s.late_minutes),
        format_minutes(s.regular_minutes),
        format_minutes(s.overtime_minutes),
        format_minutes(s.undertime_minutes),
        format_minutes(s.total_minutes),
    );
}
