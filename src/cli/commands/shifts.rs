use crate::errors::AppResult;
use crate::models::shift::{ShiftConfig, ShiftKind};
use crate::utils::table::{Column, Table};

/// Handle the `shifts` command: print the named shift table.
pub fn handle() -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::new("Shift"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Overnight"),
    ]);

    for kind in ShiftKind::named() {
        let Some(window) = ShiftConfig::named(kind).window()? else {
            continue;
        };
        table.add_row(vec![
            kind.as_str().to_string(),
            window.start.format("%H:%M").to_string(),
            window.end.format("%H:%M").to_string(),
            if window.spans_midnight() { "yes" } else { "no" }.to_string(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
