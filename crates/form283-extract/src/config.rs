//! Environment-driven configuration for the Azure services.

use anyhow::{Context, Result};
use std::env;

/// Application settings loaded from environment variables.
///
/// Required:
/// - `AZURE_DI_ENDPOINT` / `AZURE_DI_KEY` — Document Intelligence
/// - `AZURE_OPENAI_ENDPOINT` / `AZURE_OPENAI_KEY` — Azure OpenAI
///
/// Optional (with defaults):
/// - `AZURE_OPENAI_API_VERSION` (default `2024-02-15-preview`)
/// - `AZURE_OPENAI_DEPLOYMENT_NAME` (default `gpt-4o`)
/// - `DATA_OUTPUT_DIR` (default `data/output`)
/// - `MAX_FILE_SIZE_MB` (default `10`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Azure Document Intelligence endpoint URL.
    pub di_endpoint: String,
    /// Azure Document Intelligence API key.
    pub di_key: String,
    /// Azure OpenAI endpoint URL.
    pub openai_endpoint: String,
    /// Azure OpenAI API key.
    pub openai_key: String,
    /// Azure OpenAI API version.
    pub openai_api_version: String,
    /// Azure OpenAI deployment name.
    pub openai_deployment: String,
    /// Directory for JSON/OCR outputs.
    pub output_dir: String,
    /// Maximum accepted input file size, in megabytes.
    pub max_file_size_mb: u64,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// # Errors
    /// Returns an error naming the first missing required variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            di_endpoint: required("AZURE_DI_ENDPOINT")?,
            di_key: required("AZURE_DI_KEY")?,
            openai_endpoint: required("AZURE_OPENAI_ENDPOINT")?,
            openai_key: required("AZURE_OPENAI_KEY")?,
            openai_api_version: env::var("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|_| "2024-02-15-preview".to_string()),
            openai_deployment: env::var("AZURE_OPENAI_DEPLOYMENT_NAME")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            output_dir: env::var("DATA_OUTPUT_DIR").unwrap_or_else(|_| "data/output".to_string()),
            max_file_size_mb: env::var("MAX_FILE_SIZE_MB")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} environment variable not set"))
}
