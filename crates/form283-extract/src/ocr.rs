//! Azure Document Intelligence client for OCR text extraction.
//!
//! Uses the `prebuilt-layout` model: submit the PDF bytes, then poll the
//! returned operation until analysis completes, and return the extracted
//! text content in reading order.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;

const API_VERSION: &str = "2024-11-30";
const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLLS: u32 = 90;

/// Client for the Azure Document Intelligence analyze API.
#[derive(Debug, Clone)]
pub struct DocumentIntelligenceClient {
    endpoint: String,
    key: String,
    http: reqwest::Client,
}

/// Poll response of a running or finished analyze operation.
#[derive(Debug, Deserialize)]
struct AnalyzeOperation {
    status: String,
    #[serde(rename = "analyzeResult")]
    analyze_result: Option<AnalyzeResult>,
    error: Option<OperationError>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResult {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    code: Option<String>,
    message: Option<String>,
}

impl DocumentIntelligenceClient {
    /// Create a client for the given endpoint and API key.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: &str, key: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
            http,
        })
    }

    /// Create a client from loaded [`Settings`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.di_endpoint, &settings.di_key)
    }

    /// Analyze a PDF document and return its text content.
    ///
    /// # Errors
    /// Returns an error for missing/non-PDF inputs, HTTP failures, or a
    /// failed analysis operation.
    pub async fn analyze(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            bail!("Input file not found: {}", path.display());
        }
        if path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(true, |e| !e.eq_ignore_ascii_case("pdf"))
        {
            bail!("Only PDF files are supported, got {}", path.display());
        }

        let body = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        info!(
            file = %path.display(),
            size_bytes = body.len(),
            "Starting document analysis"
        );

        let url = format!(
            "{}/documentintelligence/documentModels/prebuilt-layout:analyze?api-version={API_VERSION}",
            self.endpoint
        );

        let response = self
            .http
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header("Content-Type", "application/pdf")
            .body(body)
            .send()
            .await
            .context("Failed to submit document for analysis")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            bail!("Document Intelligence API error ({status}): {error_text}");
        }

        let operation_url = response
            .headers()
            .get("operation-location")
            .and_then(|v| v.to_str().ok())
            .context("Analyze response missing operation-location header")?
            .to_string();

        let content = self.poll_operation(&operation_url).await?;

        info!(
            file = %path.display(),
            text_length = content.len(),
            "Document analysis completed"
        );

        Ok(content)
    }

    /// Poll the operation URL until the analysis succeeds or fails.
    async fn poll_operation(&self, operation_url: &str) -> Result<String> {
        for _ in 0..MAX_POLLS {
            let response = self
                .http
                .get(operation_url)
                .header("Ocp-Apim-Subscription-Key", &self.key)
                .send()
                .await
                .context("Failed to poll analyze operation")?;

            let operation: AnalyzeOperation = response
                .json()
                .await
                .context("Failed to parse analyze operation response")?;

            match operation.status.as_str() {
                "succeeded" => return Ok(extract_content(operation)),
                "failed" => {
                    let detail = operation
                        .error
                        .map(|e| {
                            format!(
                                "{}: {}",
                                e.code.unwrap_or_default(),
                                e.message.unwrap_or_default()
                            )
                        })
                        .unwrap_or_else(|| "no error detail".to_string());
                    bail!("Document analysis failed: {detail}");
                }
                _ => tokio::time::sleep(POLL_INTERVAL).await,
            }
        }

        bail!("Document analysis did not complete after {MAX_POLLS} polls")
    }
}

fn extract_content(operation: AnalyzeOperation) -> String {
    operation
        .analyze_result
        .and_then(|r| r.content)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_succeeded_operation() {
        let json = r#"{
            "status": "succeeded",
            "analyzeResult": {"content": "שם משפחה: כהן\nמספר זהות: 123456782"}
        }"#;
        let operation: AnalyzeOperation = serde_json::from_str(json).unwrap();
        assert_eq!(operation.status, "succeeded");
        assert!(extract_content(operation).contains("כהן"));
    }

    #[test]
    fn test_parse_running_operation() {
        let json = r#"{"status": "running"}"#;
        let operation: AnalyzeOperation = serde_json::from_str(json).unwrap();
        assert_eq!(operation.status, "running");
        assert!(operation.analyze_result.is_none());
    }

    #[test]
    fn test_parse_failed_operation() {
        let json = r#"{
            "status": "failed",
            "error": {"code": "InvalidRequest", "message": "corrupt document"}
        }"#;
        let operation: AnalyzeOperation = serde_json::from_str(json).unwrap();
        let error = operation.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("InvalidRequest"));
    }

    #[test]
    fn test_missing_content_is_empty_not_error() {
        let json = r#"{"status": "succeeded", "analyzeResult": {}}"#;
        let operation: AnalyzeOperation = serde_json::from_str(json).unwrap();
        assert_eq!(extract_content(operation), "");
    }

    #[tokio::test]
    async fn test_rejects_non_pdf_paths() {
        let client = DocumentIntelligenceClient::new("https://di.example.com", "key").unwrap();
        let err = client.analyze(Path::new("form.png")).await.unwrap_err();
        assert!(err.to_string().contains("not found") || err.to_string().contains("PDF"));
    }

    #[test]
    fn test_endpoint_trailing_slash_is_normalized() {
        let client = DocumentIntelligenceClient::new("https://di.example.com/", "key").unwrap();
        assert_eq!(client.endpoint, "https://di.example.com");
    }
}
