//! Extraction Client — pluggable, trait-based source of the raw model reply.
//!
//! Default: `LlmExtractor` (renders the extraction prompt and calls Gemini once).
//! `AppState` holds an `Arc<dyn Extractor>` so handlers never see the backend.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};
use crate::recommendation::prompts::render_extraction_prompt;

/// Turns a job description into free text carrying `Skills:` and `Duration:` lines.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, query: &str) -> Result<String, LlmError>;
}

pub struct LlmExtractor(pub LlmClient);

#[async_trait]
impl Extractor for LlmExtractor {
    async fn extract(&self, query: &str) -> Result<String, LlmError> {
        let prompt = render_extraction_prompt(query);
        self.0.call_text(&prompt).await
    }
}
