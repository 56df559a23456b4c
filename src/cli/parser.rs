use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for tsheet
/// Log hours against friendly project names and export them with the organization charge codes
#[derive(Parser)]
#[command(
    name = "tsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: log hours by friendly project name, export with charge codes",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (relative paths inside it resolve against its directory)
    #[arg(global = true, long = "config", value_name = "FILE", default_value = "config.toml")]
    pub config: String,

    /// Diagnostic output on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the charge_codes, data and exports directories
    Init {
        #[arg(long = "sample", help = "Also write a sample charge code CSV")]
        sample: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "get", value_name = "KEY", help = "Print one value, e.g. features.default_hours")]
        get: Option<String>,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print rows from the activity log")]
        print: bool,
    },

    /// Log hours against a charge code
    Add {
        /// Friendly name of the charge code (a unique prefix is enough)
        code: String,

        /// Hours worked (default: features.default_hours)
        #[arg(allow_negative_numbers = true)]
        hours: Option<f64>,

        #[arg(long, short, help = "Date of the entry: YYYY-MM-DD, today or yesterday")]
        date: Option<String>,

        #[arg(long, short, help = "Free text notes")]
        notes: Option<String>,
    },

    /// Delete a time entry by id, or every entry of a date
    Del {
        /// Entry id or its first characters, as shown by `list`
        #[arg(required_unless_present = "date", conflicts_with = "date")]
        id: Option<String>,

        #[arg(long, help = "Delete every entry of this date")]
        date: Option<String>,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every time entry
    Clear {
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Entry history, newest first (default: last 14 days)
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        range: Option<String>,

        #[arg(long, conflicts_with = "range", help = "First date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, conflicts_with = "range", help = "Last date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, short, help = "Only entries for this friendly name")]
        code: Option<String>,

        #[arg(long = "details", help = "Show the full charge code of each entry")]
        details: bool,
    },

    /// Entries of one day against the daily limit
    Today {
        #[arg(long, short, help = "Show another day: YYYY-MM-DD, today or yesterday")]
        date: Option<String>,
    },

    /// Dashboard: totals, per-project hours, daily trend and weekly breakdown
    Summary {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        range: Option<String>,

        #[arg(long, conflicts_with = "range", help = "First date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, conflicts_with = "range", help = "Last date (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// List the loaded charge codes
    Codes {
        #[arg(long, help = "Reload the newest charge code file")]
        refresh: bool,

        #[arg(long, value_name = "NAME", help = "Show the full charge code of one project")]
        show: Option<String>,
    },

    /// Export time entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: exports/<name>_<timestamp>.<ext>)")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day, a custom range or 'all'"
        )]
        range: Option<String>,

        #[arg(long, conflicts_with = "range", help = "First date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, conflicts_with = "range", help = "Last date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,

        #[arg(long, help = "Print the first rows instead of writing a file")]
        preview: bool,
    },
}
