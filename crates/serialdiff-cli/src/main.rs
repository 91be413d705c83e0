//! serialdiff CLI
//!
//! Command-line interface for comparing inventory serials across two saves

use clap::{Parser, Subcommand, ValueEnum};
use serialdiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "serialdiff")]
#[command(about = "serialdiff - Inventory serial analysis between two saves", long_about = None)]
struct Cli {
    /// Emit logs to stderr in this format (default: no logs)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare an original save against a live save
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(format) = cli.log_format {
        init(format.profile());
    }

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
