//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `kml_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;
use structopt::StructOpt;

use kml_export::initialization::init_logger_with;
use kml_export::{export_kml, ExportOptions, ExportReport, LogFormat, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let opt = Opt::from_args();

    // Initialize logger based on options
    let log_format = opt.log_format.clone();
    init_logger_with(opt.log_level.clone().into(), log_format.clone())
        .context("Failed to initialize logger")?;

    let opts = ExportOptions::from(opt);

    match export_kml(&opts).await {
        Ok(report) => {
            print_summary(&report, &log_format)?;
            Ok(())
        }
        Err(e) => {
            eprintln!("kml_export error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Prints the export summary.
///
/// The summary goes to stderr when the document itself was written to stdout.
fn print_summary(report: &ExportReport, format: &LogFormat) -> Result<()> {
    let summary = match format {
        LogFormat::Json => serde_json::to_string(report).context("Failed to serialize report")?,
        LogFormat::Plain => {
            let mut line = format!(
                "Exported {} placemark{} ({} pass, {} slow, {} fail) in {:.1}s",
                report.exported,
                if report.exported == 1 { "" } else { "s" },
                report.pass,
                report.slow,
                report.fail,
                report.elapsed_seconds
            );
            if report.skipped > 0 {
                line.push_str(&format!(
                    ", skipped {} row{} without coordinates",
                    report.skipped,
                    if report.skipped == 1 { "" } else { "s" }
                ));
            }
            if let Some(output) = &report.output {
                line.push_str(&format!(" - saved in {}", output.display()));
            }
            line
        }
    };

    if report.output.is_some() {
        println!("{}", summary);
    } else {
        eprintln!("{}", summary);
    }
    Ok(())
}
