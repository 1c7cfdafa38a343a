use crate::export::ExportFormat;
use crate::models::shift::ShiftKind;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to reconcile clock-in/clock-out events into daily timesheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile clock-in/clock-out events into daily lateness, regular, overtime and undertime",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests or per-project setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Shift and clock settings; each flag overrides the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ShiftArgs {
    #[arg(long, value_enum, help = "Shift: morning, mid, night, custom or none")]
    pub shift: Option<ShiftKind>,

    #[arg(
        long,
        help = "Shift start: HH:MM for custom, hour override (HH) for named shifts"
    )]
    pub start: Option<String>,

    #[arg(
        long,
        help = "Shift end: HH:MM for custom, hour override (HH) for named shifts"
    )]
    pub end: Option<String>,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "UTC offset of local wall-clock time (+HH:MM / -HH:MM)"
    )]
    pub offset: Option<String>,

    #[arg(
        long,
        help = "Overnight clock-out attribution: auto, off or a HH:MM cutoff"
    )]
    pub overnight: Option<String>,
}

/// Where the events come from and which records to keep.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Event file (.json or .csv)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: String,

    #[arg(long, help = "Only reconcile events of this employee")]
    pub employee: Option<String>,

    #[arg(
        long,
        short = 'r',
        value_name = "RANGE",
        help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
    )]
    pub range: Option<String>,

    #[command(flatten)]
    pub shift: ShiftArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the named shifts and their default hours
    Shifts,

    /// Print the reconciled daily timesheet
    Report {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long = "newest-first", help = "Most recent day first")]
        newest_first: bool,

        #[arg(long, help = "Append period totals")]
        totals: bool,

        #[arg(long, help = "Disable colored output")]
        plain: bool,
    },

    /// Export the reconciled daily timesheet
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
