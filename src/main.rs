//! CLI entry point for the border crossing report tool.
//!
//! Provides subcommands for deriving the running-average report from a raw
//! crossing CSV and for inspecting an input without writing a report.

use anyhow::Result;
use border_crossing_report::{
    fetch::load_source,
    output::{print_json, print_pretty, write_report},
    parser::parse_records,
    report::pipeline::build_report,
    summary::RunSummary,
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "border_crossing_report")]
#[command(about = "A tool to derive running-average reports from border crossing data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the report from a crossing CSV and write it out
    Report {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// CSV file to write the report to
        #[arg(short, long, default_value = "report.csv")]
        output: String,
    },
    /// Parse a crossing CSV and log a run summary without writing a report
    Inspect {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/border_crossing_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("border_crossing_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { source, output } => {
            let bytes = load_source(&source).await?;
            let parsed = parse_records(&bytes)?;
            let (rows_read, rows_skipped) = (parsed.rows_read, parsed.rows_skipped);

            let rows = build_report(parsed.records);
            write_report(&output, &rows)?;

            let summary = RunSummary::new(rows_read, rows_skipped, &rows);
            print_json(&summary)?;
            info!(output, rows = rows.len(), "Report written");
        }
        Commands::Inspect { source } => {
            let bytes = load_source(&source).await?;
            let parsed = parse_records(&bytes)?;
            let (rows_read, rows_skipped) = (parsed.rows_read, parsed.rows_skipped);

            let rows = build_report(parsed.records);

            let summary = RunSummary::new(rows_read, rows_skipped, &rows);
            print_pretty(&summary);
            print_json(&summary)?;
        }
    }

    Ok(())
}
