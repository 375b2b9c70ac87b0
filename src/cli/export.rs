//! CLI command for request export
//!
//! Writes the review board's requests to a file or stdout.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::review::load_queue;
use crate::config::Settings;
use crate::error::{ReimburseError, ReimburseResult};
use crate::export::{export_requests_csv, export_requests_json, export_requests_yaml};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one line per entry)
    Csv,
    /// JSON format (readable back with --requests)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Requests file to export instead of the demo requests
    #[arg(long, env = "REIMBURSE_CLI_REQUESTS")]
    pub requests: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> ReimburseResult<()> {
    let requests = load_queue(settings, args.requests.as_deref())?.into_requests();

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                ReimburseError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&requests, args.format, args.pretty, &mut writer)?;
            writer.flush()?;
            println!(
                "Exported {} requests to: {}",
                requests.len(),
                output.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(&requests, args.format, args.pretty, &mut writer)?;
            if args.format == ExportFormat::Json {
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    requests: &[crate::models::Request],
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> ReimburseResult<()> {
    match format {
        ExportFormat::Csv => export_requests_csv(requests, writer),
        ExportFormat::Json => export_requests_json(requests, writer, pretty),
        ExportFormat::Yaml => export_requests_yaml(requests, writer),
    }
}
