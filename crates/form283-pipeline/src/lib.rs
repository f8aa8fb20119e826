//! End-to-end Form 283 processing pipeline.
//!
//! Orchestrates the full workflow for one scanned document:
//!
//! 1. OCR with Azure Document Intelligence
//! 2. Field extraction with Azure OpenAI (JSON mode)
//! 3. Schema shaping into a typed [`FormRecord`]
//! 4. Quality validation (completeness/accuracy scoring)
//! 5. Optional JSON output persistence
//!
//! The pipeline owns all I/O and error surfaces; the validation step is
//! the pure engine from `form283-validation`.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use form283_core::{Form283Error, FormRecord};
use form283_extract::{DocumentIntelligenceClient, ExtractionClient, ExtractionMetadata, Settings};
use form283_validation::{ValidationReport, Validator};

/// Everything produced for one processed document.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// The typed, schema-validated record.
    pub record: FormRecord,
    /// Token usage and model metadata from the extraction call.
    pub metadata: ExtractionMetadata,
    /// Quality validation report.
    pub report: ValidationReport,
}

/// Main processor for the Form 283 extraction pipeline.
pub struct FormProcessor {
    di: DocumentIntelligenceClient,
    llm: ExtractionClient,
    validator: Validator,
    settings: Settings,
}

impl FormProcessor {
    /// Build a processor from explicit settings.
    ///
    /// # Errors
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            di: DocumentIntelligenceClient::from_settings(&settings)?,
            llm: ExtractionClient::from_settings(&settings)?,
            validator: Validator::new(),
            settings,
        })
    }

    /// Build a processor from environment configuration.
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing.
    pub fn from_env() -> Result<Self> {
        Self::new(Settings::from_env()?)
    }

    /// Process a Form 283 document end to end.
    ///
    /// When `save_output` is set, the OCR text, extracted record, and
    /// validation report are written under the configured output
    /// directory.
    ///
    /// # Errors
    /// Returns an error for oversized/unreadable inputs, service
    /// failures, or extraction output that does not match the schema.
    pub async fn process(&self, path: &Path, save_output: bool) -> Result<ProcessOutcome> {
        let size = fs::metadata(path)
            .with_context(|| format!("Input file not found: {}", path.display()))?
            .len();
        let max_bytes = self.settings.max_file_size_mb * 1024 * 1024;
        if size > max_bytes {
            bail!(
                "Input file is {size} bytes, above the {} MB limit",
                self.settings.max_file_size_mb
            );
        }

        info!(file = %path.display(), size_bytes = size, "Starting document processing");

        info!("Step 1/4: Running OCR with Azure Document Intelligence");
        let ocr_text = self.di.analyze(path).await?;

        info!("Step 2/4: Extracting fields with the language model");
        let (raw, metadata) = self.llm.extract_fields(&ocr_text).await?;

        info!("Step 3/4: Shaping extracted JSON into the form schema");
        let record = shape_record(raw)?;

        info!("Step 4/4: Running quality validation");
        let report = self.validator.validate(&record);

        info!(
            accuracy = report.accuracy_score,
            completeness = report.completeness_score,
            quality_issues = report.corrections.len(),
            "Processing complete"
        );

        if save_output {
            save_outputs(
                path,
                &ocr_text,
                &record,
                &metadata,
                &report,
                Path::new(&self.settings.output_dir),
            )?;
        }

        Ok(ProcessOutcome {
            record,
            metadata,
            report,
        })
    }
}

/// Shape raw extraction JSON into a typed record.
///
/// # Errors
/// Returns [`Form283Error::Schema`] (wrapped) when the JSON does not
/// conform to the Form 283 schema — a typed failure, never coerced.
pub fn shape_record(raw: serde_json::Value) -> Result<FormRecord> {
    serde_json::from_value(raw)
        .map_err(Form283Error::Schema)
        .context("Extracted JSON does not match the Form 283 schema")
}

/// Write all processing outputs as UTF-8 JSON/text files.
///
/// Layout under `output_dir`:
/// - `ocr_text/{stem}_extracted.txt`
/// - `extracted_json/{stem}_form_data.json` (Hebrew keys)
/// - `validation_reports/{stem}_validation.json`
///
/// # Errors
/// Returns an error if a directory or file cannot be written.
pub fn save_outputs(
    input: &Path,
    ocr_text: &str,
    record: &FormRecord,
    metadata: &ExtractionMetadata,
    report: &ValidationReport,
    output_dir: &Path,
) -> Result<()> {
    let ocr_dir = output_dir.join("ocr_text");
    let json_dir = output_dir.join("extracted_json");
    let validation_dir = output_dir.join("validation_reports");
    for dir in [&ocr_dir, &json_dir, &validation_dir] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf");
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let ocr_file = ocr_dir.join(format!("{stem}_extracted.txt"));
    fs::write(&ocr_file, format!("FILE: {file_name}\n\n{ocr_text}"))
        .with_context(|| format!("Failed to write {}", ocr_file.display()))?;
    info!(file = %ocr_file.display(), "OCR text saved");

    let json_file = json_dir.join(format!("{stem}_form_data.json"));
    fs::write(&json_file, serde_json::to_string_pretty(record)?)
        .with_context(|| format!("Failed to write {}", json_file.display()))?;
    info!(file = %json_file.display(), "Form data saved");

    let validation_file = validation_dir.join(format!("{stem}_validation.json"));
    let validation_payload = serde_json::json!({
        "file": file_name,
        "processing_metadata": metadata,
        "validation_report": report,
    });
    fs::write(
        &validation_file,
        serde_json::to_string_pretty(&validation_payload)?,
    )
    .with_context(|| format!("Failed to write {}", validation_file.display()))?;
    info!(file = %validation_file.display(), "Validation report saved");

    Ok(())
}
