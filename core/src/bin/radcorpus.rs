use clap::{Parser, ValueEnum};
use log::{debug, error, info, warn};
use radparse_core::cli::setup_logging;
use radparse_core::source::{read_reports, DEFAULT_EXTENSION};
use radparse_core::{assemble, Corpus, Field, ReportExtractor, Result};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

/// CLI tool for turning a directory of radiology reports into one table
#[derive(Parser, Debug)]
#[command(name = "radcorpus")]
#[command(about = "Extract fields from every report in a directory into a CSV table")]
#[command(version)]
struct Cli {
    /// Directory containing plain-text reports
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "notes_df.csv")]
    output: PathBuf,

    /// Extension of report files
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Comma-separated values with a row index column
    Csv,
    /// JSON array of records
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let start = Instant::now();

    if let Err(e) = run(&cli) {
        error!("Failed to build corpus: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!(
        "Completed in {:.2} seconds.",
        start.elapsed().as_secs_f64()
    );
}

fn run(cli: &Cli) -> Result<Corpus> {
    info!("Processing directory: {}", cli.directory.display());

    // Collect and read all report files
    let reports = read_reports(&cli.directory, &cli.extension)?;
    if reports.is_empty() {
        warn!(
            "No .{} files found in {}",
            cli.extension,
            cli.directory.display()
        );
    } else {
        info!("Found {} report files", reports.len());
    }

    // Log reports with missing markers
    for report in &reports {
        let missing = ReportExtractor::inspect(&report.text).missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|field| field.column_name()).collect();
            debug!(
                "{}: markers missing for {}",
                report.path.display(),
                names.join(", ")
            );
        }
    }

    // Extract fields into one table
    let corpus = assemble(reports.iter().map(|report| report.text.as_str()));
    log_summary(&corpus);

    // Write output
    write_output(&corpus, &cli.output, &cli.format)?;
    Ok(corpus)
}

fn log_summary(corpus: &Corpus) {
    let summary = corpus.summary();
    info!("Assembled {} rows", summary.rows);
    for field in Field::ALL {
        debug!(
            "  {:<12}{}/{}",
            field.column_name(),
            summary.populated(field),
            summary.rows
        );
    }
}

fn write_output(corpus: &Corpus, output: &Path, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => corpus.write_csv_path(output),
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                let file = std::fs::File::create(output)?;
                serde_json::to_writer_pretty(std::io::BufWriter::new(file), corpus)?;
                info!("Wrote {} rows to {}", corpus.len(), output.display());
                Ok(())
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
