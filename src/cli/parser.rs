use crate::export::ExportFormat;
use crate::image::ImageHost;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stockinbound
#[derive(Parser)]
#[command(
    name = "stockinbound",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register inbound stock: look up orders, attach a photo and keep a spreadsheet-backed daily log",
    long_about = None
)]
pub struct Cli {
    /// Override the store directory (useful for tests or a shared folder)
    #[arg(global = true, long = "store", value_name = "DIR")]
    pub store: Option<String>,

    /// Override the image host
    #[arg(global = true, long = "image-host", value_enum)]
    pub image_host: Option<ImageHost>,

    /// Run in test mode (configuration file neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the store worksheets
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// List catalog orders with their category and vendor
    Orders {
        /// Only orders whose number contains this text (case-insensitive)
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Show category and vendor of an order
    Lookup {
        /// Order number
        order: String,
    },

    /// Save an inbound record: upload the photo and append it to the log
    Add {
        /// Order number
        order: String,

        /// Photo of the received goods
        #[arg(long, short, value_name = "FILE")]
        image: String,

        /// Category to record instead of the catalog one
        #[arg(long)]
        category: Option<String>,

        /// Vendor to record instead of the catalog one
        #[arg(long)]
        vendor: Option<String>,
    },

    /// Show today's inbound records
    Today {
        /// Only print the number of records
        #[arg(long)]
        count: bool,

        /// Day to show instead of today (YYYY-MM-DD or "yesterday")
        #[arg(long)]
        day: Option<String>,
    },

    /// Show today's counters: pickup ready and inbound done
    Scorecard {
        /// Day to count instead of today (YYYY-MM-DD or "yesterday")
        #[arg(long)]
        day: Option<String>,
    },

    /// Show the whole inbound log, oldest first
    History,

    /// Delete an inbound record by its number in `history`
    Del {
        /// Record number (as shown by `history`)
        number: usize,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export inbound records
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only the records of this day (YYYY-MM-DD, "today" or "yesterday")
        #[arg(long)]
        day: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log
    Log {
        /// Print rows from the internal `log` worksheet
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Interactive session keeping lookup and counters cached between commands
    Shell,
}
