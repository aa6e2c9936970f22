//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use wellog::adapters::CsvEntryStore;
use wellog::config::GlobalConfig;
use wellog::core::services::EntryForm;
use wellog::output::OutputMode;
use wellog::paths;

/// wellog - Wellness entry logging and reporting
#[derive(Parser, Debug)]
#[command(
    name = "wellog",
    version,
    about = "Log student wellness entries and view aggregate counts"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Data file to read and write (defaults to ./wellness_entries.csv)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate and record one entry
    Add {
        /// Student name (letters and spaces)
        #[arg(short, long)]
        name: String,

        /// Wellness activity (letters and spaces)
        #[arg(short, long)]
        wellness: String,

        /// Me-time activity (letters and spaces)
        #[arg(short = 't', long = "me-time")]
        me_time: String,

        /// Screen-free time in minutes
        #[arg(short, long = "screen-free", allow_hyphen_values = true)]
        screen_free: String,

        /// How often, like "3x" or "2 times"
        #[arg(short = 'q', long)]
        frequency: String,
    },

    /// List all logged entries with aggregate counts
    List,

    /// Delete one entry by its row number
    Delete {
        /// 1-based row number as shown by `list`
        row: usize,
    },

    /// Clear all entries
    Clear,

    /// Show total, Healthy, and Needs More Me-Time counts
    Stats,

    /// Start the local web UI
    Ui {
        /// Port to serve on (overrides the config default)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the UI in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let store = CsvEntryStore::new(resolve_data_file(cli.file));

    match cli.command {
        Some(Command::Add {
            name,
            wellness,
            me_time,
            screen_free,
            frequency,
        }) => {
            let form = EntryForm {
                student_name: name,
                wellness_activity: wellness,
                me_time_activity: me_time,
                screen_free_time: screen_free,
                frequency,
            };
            commands::add(&store, &form, output_mode)
        },
        Some(Command::List) => commands::list(&store, output_mode),
        Some(Command::Delete { row }) => commands::delete(&store, row, output_mode),
        Some(Command::Clear) => commands::clear(&store, output_mode),
        Some(Command::Stats) => commands::stats(&store, output_mode),
        Some(Command::Ui { port, open }) => {
            let port = port.unwrap_or_else(|| GlobalConfig::load().ui.port);
            commands::ui(&store, port, open)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("wellog v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("wellog v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'wellog --help' for usage");
                println!("Run 'wellog add --help' to log an entry");
            }
            Ok(())
        },
    }
}

/// Resolve the data file path: `--file` flag, then config, then default
fn resolve_data_file(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| GlobalConfig::load().data_file)
        .unwrap_or_else(paths::default_data_file)
}
