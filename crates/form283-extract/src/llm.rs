//! Azure OpenAI client for structured field extraction.
//!
//! Sends the OCR text with the schema-bearing extraction prompt to a
//! chat-completions deployment in JSON mode and returns the raw
//! extracted JSON plus token-usage metadata. Shaping the JSON into a
//! typed record (and any schema mismatch it surfaces) happens in the
//! pipeline, not here.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::prompts::{extraction_prompt, SYSTEM_MESSAGE};

/// Low temperature for consistent extraction.
const TEMPERATURE: f32 = 0.1;

/// Chat-completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest {
    messages: Vec<Message>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

/// Chat-completions response body.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Usage,
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Token usage and model metadata for one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Model that served the request.
    pub model: String,
    /// Prompt tokens consumed.
    pub prompt_tokens: u32,
    /// Completion tokens produced.
    pub completion_tokens: u32,
    /// Total tokens billed.
    pub total_tokens: u32,
    /// Sampling temperature used.
    pub temperature: f32,
    /// Finish reason reported by the API.
    pub finish_reason: String,
}

/// Client for an Azure OpenAI chat-completions deployment.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    endpoint: String,
    key: String,
    api_version: String,
    deployment: String,
    http: reqwest::Client,
}

impl ExtractionClient {
    /// Create a client from loaded [`Settings`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            endpoint: settings.openai_endpoint.trim_end_matches('/').to_string(),
            key: settings.openai_key.clone(),
            api_version: settings.openai_api_version.clone(),
            deployment: settings.openai_deployment.clone(),
            http,
        })
    }

    /// Extract structured fields from OCR text.
    ///
    /// Returns the raw extracted JSON (Hebrew keys) and call metadata.
    ///
    /// # Errors
    /// Returns an error if the API call fails, returns no choices, or
    /// the response content is not valid JSON.
    pub async fn extract_fields(
        &self,
        ocr_text: &str,
    ) -> Result<(serde_json::Value, ExtractionMetadata)> {
        info!(ocr_length = ocr_text.len(), "Starting field extraction");

        let request = ChatRequest {
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_MESSAGE.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: extraction_prompt(ocr_text),
                },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        );

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Azure OpenAI")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            bail!("Azure OpenAI API error ({status}): {error_text}");
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Azure OpenAI response")?;

        let Some(choice) = chat_response.choices.into_iter().next() else {
            bail!("Azure OpenAI response contained no choices");
        };
        let content = choice
            .message
            .content
            .context("Azure OpenAI response contained no content")?;

        let extracted: serde_json::Value = serde_json::from_str(&extract_json(&content))
            .context("Model response is not valid JSON")?;

        let metadata = ExtractionMetadata {
            model: chat_response.model.unwrap_or_else(|| self.deployment.clone()),
            prompt_tokens: chat_response.usage.prompt_tokens,
            completion_tokens: chat_response.usage.completion_tokens,
            total_tokens: chat_response.usage.total_tokens,
            temperature: TEMPERATURE,
            finish_reason: choice.finish_reason.unwrap_or_default(),
        };

        info!(
            total_tokens = metadata.total_tokens,
            model = %metadata.model,
            "Field extraction completed"
        );

        Ok((extracted, metadata))
    }
}

/// Extract JSON from response content, tolerating markdown code fences.
fn extract_json(text: &str) -> String {
    let text = text.trim();

    if text.starts_with("```") {
        if let Some(start) = text.find('\n') {
            let after_first_line = &text[start + 1..];
            if let Some(end) = after_first_line.rfind("```") {
                return after_first_line[..end].trim().to_string();
            }
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            return text[start..=end].to_string();
        }
    }

    text.to_string()
}
