//! datatables CLI
//!
//! Builds DataTables widget payloads from JSON record files and manages
//! reset nonces in a session file.

mod commands;
mod file_session;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use simplelog::WriteLogger;

use crate::commands::TableArgs;

/// datatables - payloads and reset nonces for the DataTables widget
#[derive(Parser)]
#[command(name = "datatables")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write debug logs to this file instead of warnings to stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TableOpts {
    /// Records-oriented JSON file with the table rows
    #[arg(long)]
    data: PathBuf,
    /// JSON file with table options (pageLength, select, actions, ...)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Widget key, overriding the config file
    #[arg(long)]
    key: Option<String>,
}

impl From<TableOpts> for TableArgs {
    fn from(opts: TableOpts) -> Self {
        TableArgs {
            data: opts.data,
            config: opts.config,
            key: opts.key,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the payload sent to the widget
    Payload {
        #[command(flatten)]
        table: TableOpts,
        /// Session file holding reset nonces
        #[arg(long)]
        state: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Clear a widget's selection by bumping its reset nonce
    Reset {
        /// Session file holding reset nonces
        #[arg(long)]
        state: PathBuf,
        /// Widget key
        #[arg(long)]
        key: String,
    },
    /// Print the columns the widget displays
    Columns {
        #[command(flatten)]
        table: TableOpts,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging(log_file: Option<&PathBuf>) {
    let result = match log_file {
        Some(path) => match File::create(path) {
            Ok(file) => WriteLogger::init(LevelFilter::Debug, Config::default(), file),
            Err(e) => {
                eprintln!("Warning: cannot create log file {}: {}", path.display(), e);
                return;
            }
        },
        None => TermLogger::init(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    if let Err(e) = result {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref());

    let output = match cli.command {
        Commands::Payload { table, state, pretty } => commands::payload(&table.into(), state.as_deref(), pretty),
        Commands::Reset { state, key } => commands::reset(&state, &key),
        Commands::Columns { table, pretty } => commands::columns(&table.into(), pretty),
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
