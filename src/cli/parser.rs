use crate::export::ExportFormat;
use crate::models::view_mode::ViewMode;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rIndirect
/// CLI application to plan indirect time (lunch, breaks) against the end of shift
#[derive(Parser)]
#[command(
    name = "rindirect",
    version = env!("CARGO_PKG_VERSION"),
    about = "Indirect Scheduler: plan lunch and breaks backward from the end of your shift",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that builds a plan.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// End of shift (HH:MM, 24h). Defaults to the configured end_time
    #[arg(long = "end", value_name = "HH:MM")]
    pub end: Option<String>,

    /// Indirect entry as LABEL=MINUTES (repeatable). Defaults to the configured entries
    #[arg(long = "entry", value_name = "LABEL=MINUTES")]
    pub entries: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

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

    /// Show the full plan once: times, entries and schedule (or EOD)
    Plan {
        #[command(flatten)]
        plan: PlanArgs,

        /// Show the EOD view (decimal hours + Prod) instead of the schedule
        #[arg(long = "eod")]
        eod: bool,

        /// Pretend the current time is HH:MM
        #[arg(long = "now", value_name = "HH:MM")]
        now: Option<String>,
    },

    /// Print only the free time left before the end of shift
    Remaining {
        #[command(flatten)]
        plan: PlanArgs,

        /// Pretend the current time is HH:MM
        #[arg(long = "now", value_name = "HH:MM")]
        now: Option<String>,
    },

    /// Edit the plan interactively (reads commands from stdin)
    Session {
        #[command(flatten)]
        plan: PlanArgs,

        /// Initial view
        #[arg(long = "view", value_enum)]
        view: Option<ViewMode>,
    },

    /// Re-render the plan every minute
    Watch {
        #[command(flatten)]
        plan: PlanArgs,

        #[arg(long = "eod")]
        eod: bool,

        /// Stop after N refreshes (default: run until Ctrl-C)
        #[arg(long = "ticks", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,
    },

    /// Export the computed schedule
    Export {
        #[command(flatten)]
        plan: PlanArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
