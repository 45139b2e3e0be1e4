use clap::Parser;
use log::{error, info, warn};
use radparse_core::cli::{setup_logging, Cli, OutputFormat};
use radparse_core::source::read_report;
use radparse_core::{FieldDiagnostics, FieldRecord, ReportExtractor, TextReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    info!("Processing report: {}", cli.file.display());

    // Read report text
    let text = match read_report(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read report: {}", e);
            eprintln!("Error: Failed to read {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    // Extract fields
    let (record, diagnostics) = ReportExtractor::extract_with_diagnostics(&text);

    let missing = diagnostics.missing_fields();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|field| field.column_name()).collect();
        warn!("Markers missing for: {}", names.join(", "));
    }

    // Output results
    output_record(&record, &diagnostics, cli.format);
}

fn output_record(record: &FieldRecord, diagnostics: &FieldDiagnostics, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(record, diagnostics);
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(record) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
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
