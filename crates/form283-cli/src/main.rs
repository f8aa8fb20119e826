//! Form 283 extraction and validation CLI.
//!
//! Processes scanned Form 283 PDFs through OCR, LLM field extraction,
//! and quality validation, or re-validates already-extracted records.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use form283_pipeline::{shape_record, FormProcessor};
use form283_validation::{ValidationReport, Validator};

#[derive(Parser)]
#[command(name = "form283")]
#[command(about = "Extract and validate Israeli National Insurance Form 283 documents")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a single scanned PDF end to end
    Process {
        /// Path to the PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for JSON outputs (overrides DATA_OUTPUT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Skip writing output files
        #[arg(long)]
        no_save: bool,
    },

    /// Process every PDF in a directory
    Batch {
        /// Directory containing PDF files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Directory for JSON outputs (overrides DATA_OUTPUT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Re-run quality validation on an extracted record JSON
    Validate {
        /// Path to an extracted record JSON file (Hebrew keys)
        #[arg(short, long)]
        json: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(
                    "form283_pipeline=info"
                        .parse()
                        .expect("directive is compile-time constant"),
                )
                .add_directive(
                    "form283_extract=info"
                        .parse()
                        .expect("directive is compile-time constant"),
                ),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Process {
            input,
            output_dir,
            no_save,
        } => {
            if let Some(dir) = output_dir {
                std::env::set_var("DATA_OUTPUT_DIR", dir);
            }
            process_single(&input, !no_save).await?;
        }
        Command::Batch {
            input_dir,
            output_dir,
        } => {
            if let Some(dir) = output_dir {
                std::env::set_var("DATA_OUTPUT_DIR", dir);
            }
            batch(&input_dir).await?;
        }
        Command::Validate { json } => {
            validate_json(&json)?;
        }
    }

    Ok(())
}

async fn process_single(input: &Path, save: bool) -> Result<()> {
    let processor = FormProcessor::from_env()?;
    let outcome = processor.process(input, save).await?;

    let record = &outcome.record;
    println!(
        "Applicant: {} {} ({})",
        record.first_name, record.last_name, record.id_number
    );
    println!("Injury date: {}", record.date_of_injury.to_display_string());
    println!("Address: {}", record.address.to_display_string());
    println!();

    print_report(&outcome.report);
    println!(
        "Tokens: {} prompt + {} completion = {} total ({})",
        outcome.metadata.prompt_tokens,
        outcome.metadata.completion_tokens,
        outcome.metadata.total_tokens,
        outcome.metadata.model,
    );

    Ok(())
}

async fn batch(input_dir: &Path) -> Result<()> {
    let processor = FormProcessor::from_env()?;

    let mut pdfs: Vec<PathBuf> = std::fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read {}", input_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    pdfs.sort();

    if pdfs.is_empty() {
        warn!(dir = %input_dir.display(), "No PDF files found");
        return Ok(());
    }

    info!(count = pdfs.len(), "Starting batch processing");
    let mut processed = 0usize;
    let mut failed = 0usize;

    for pdf in &pdfs {
        println!("--- {}", pdf.display());
        match processor.process(pdf, true).await {
            Ok(outcome) => {
                println!("{}", outcome.report.summary);
                processed += 1;
            }
            Err(e) => {
                warn!(file = %pdf.display(), error = %e, "Document failed");
                failed += 1;
            }
        }
    }

    println!("Batch complete: {processed} processed, {failed} failed");
    Ok(())
}

fn validate_json(path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("{} is not JSON", path.display()))?;
    let record = shape_record(value)?;

    let report = Validator::new().validate(&record);
    print_report(&report);

    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!("{}", report.summary);

    if !report.corrections.is_empty() {
        println!("\nQuality issues:");
        for correction in &report.corrections {
            println!(
                "  {}: \"{}\" - {}",
                correction.field, correction.value, correction.reason
            );
        }
    }

    if !report.missing_fields.is_empty() {
        println!("\nMissing fields ({}):", report.missing_fields.len());
        for field in &report.missing_fields {
            println!("  {field}");
        }
    }
}
