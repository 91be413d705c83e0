//! Analyze command
//!
//! Usage: serialdiff analyze --original <FILE> --live <FILE> [--output <FILE>]

use clap::{Args, ValueEnum};
use serialdiff_core::diff::ReportFormat;
use serialdiff_engine::{analyze, AnalyzeOptions};
use serialdiff_store::TagPolicy;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Earlier save document
    #[arg(long)]
    pub original: PathBuf,

    /// Later save document
    #[arg(long)]
    pub live: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Only flatten these YAML tags; others fail decoding (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Execute analyze command
pub fn execute(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = AnalyzeOptions::new(args.original, args.live);
    options.output_path = args.output;
    options.format = args.format.into();
    if !args.tags.is_empty() {
        options.decode.tag_policy = TagPolicy::flatten_only(args.tags)?;
    }

    let outcome = analyze(&options)?;

    match outcome.written_to {
        Some(path) => println!("✓ Report written to {}", path.display()),
        None => print!("{}", outcome.report),
    }

    Ok(())
}
