use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use approved_makes_to_json::{BatchOptions, BatchReport, ErrorPolicy, extract_directory};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "makes2json",
    version,
    about = "Extract approved-makes tables from a directory of PDFs into one JSON file"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a directory of PDFs and write the aggregate JSON output.
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input directory containing .pdf files.
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON path.
    #[arg(short, long, default_value = "extracted_json.json")]
    output: PathBuf,

    /// Minimum cells required per candidate table row.
    #[arg(long, default_value_t = 2)]
    min_cols: usize,

    /// Abort the batch on the first unreadable PDF instead of recording it
    /// as table_not_found.
    #[arg(long)]
    strict: bool,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(args: &ExtractArgs) -> BatchOptions {
    BatchOptions {
        min_cols: args.min_cols,
        error_policy: if args.strict {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Isolate
        },
    }
}

fn log_report(report: &BatchReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!(
        "warning: {} file(s) without extractable tables",
        report.warnings.len()
    );
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} {}: {}",
                warning.code, warning.file_name, warning.message
            );
        }
    }
}

fn run_extract(args: &ExtractArgs) -> Result<BatchReport> {
    let options = parse_options(args);
    extract_directory(&args.input, &args.output, &options)
        .with_context(|| format!("failed to extract tables from '{}'", args.input.display()))
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("approved_makes_to_json=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => match run_extract(&args) {
            Ok(report) => {
                log_report(&report, args.verbose);
                println!(
                    "extraction complete: {} of {} file(s) -> {}",
                    report.extracted_count,
                    report.file_count,
                    args.output.display()
                );
                if report.extracted_count > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
