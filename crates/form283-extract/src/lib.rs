//! Azure collaborators for the Form 283 pipeline.
//!
//! Everything here is I/O orchestration against external AI services —
//! the engineering-hard logic lives in `form283-validation`. Two clients
//! are provided:
//!
//! - [`DocumentIntelligenceClient`] — OCR text extraction via the Azure
//!   Document Intelligence `prebuilt-layout` model (submit + poll).
//! - [`ExtractionClient`] — structured field extraction from OCR text
//!   via Azure OpenAI chat completions in JSON mode.
//!
//! Retry, timeout, and backoff policy belongs to these clients; the
//! validation engine downstream assumes a complete, already-typed
//! in-memory record.

pub mod config;
pub mod llm;
pub mod ocr;
pub mod prompts;

pub use config::Settings;
pub use llm::{ExtractionClient, ExtractionMetadata};
pub use ocr::DocumentIntelligenceClient;
