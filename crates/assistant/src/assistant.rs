//! Chat and quotation-draft entry points.
//!
//! Chat is best-effort: any failure collapses to a fixed apology so the
//! conversation panel never surfaces a raw error. Quotation drafting is
//! the opposite: every failure propagates, because a malformed quote
//! must not silently look valid.

use crate::api::{ApiError, CompletionApi, CompletionRequest};
use crate::config::AssistantConfig;
use crate::prompt;
use crate::types::{CatalogSnapshot, QuotationDraft};

/// Returned from chat when the round trip fails for any reason.
pub const CHAT_FALLBACK_MESSAGE: &str =
    "Sorry, I encountered an error connecting to the AI service. Please check your API key.";

/// Returned from chat when the service answers with no text.
pub const EMPTY_COMPLETION_MESSAGE: &str = "I couldn't generate a response at this time.";

/// Errors from the quotation-drafting path. Chat never returns these.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The catalog snapshot could not be serialized into the prompt.
    #[error("failed to encode the catalog for the quote prompt: {0}")]
    CatalogEncode(#[source] serde_json::Error),

    /// The completion arrived but was not a valid draft document.
    #[error("quotation draft did not match the expected shape: {source}")]
    MalformedDraft {
        #[source]
        source: serde_json::Error,
        /// Raw completion text for debugging.
        body: String,
    },
}

/// Front door for the dashboard's AI features.
pub struct Assistant {
    api: Box<dyn CompletionApi>,
    chat_model: String,
    quote_model: String,
}

impl Assistant {
    /// Build an assistant over a completion backend, taking the model
    /// names from `config`.
    pub fn new(api: Box<dyn CompletionApi>, config: &AssistantConfig) -> Self {
        Self {
            api,
            chat_model: config.chat_model.clone(),
            quote_model: config.quote_model.clone(),
        }
    }

    /// Answer a free-text prompt.
    ///
    /// Always produces a displayable string: transport and API failures
    /// degrade to [`CHAT_FALLBACK_MESSAGE`], an empty completion to
    /// [`EMPTY_COMPLETION_MESSAGE`].
    pub async fn chat(&self, user_prompt: &str) -> String {
        let request = CompletionRequest {
            model: self.chat_model.clone(),
            prompt: user_prompt.to_string(),
            system_instruction: prompt::SYSTEM_INSTRUCTION.to_string(),
            response_schema: None,
        };
        match self.api.complete(request).await {
            Ok(text) => text,
            Err(ApiError::EmptyCompletion) => EMPTY_COMPLETION_MESSAGE.to_string(),
            Err(error) => {
                tracing::warn!(%error, "chat completion failed, serving fallback");
                CHAT_FALLBACK_MESSAGE.to_string()
            }
        }
    }

    /// Draft a quotation from free-text constraints and the current
    /// catalog. Every failure propagates; there is no fallback draft.
    pub async fn draft_quotation(
        &self,
        constraints: &str,
        catalog: &CatalogSnapshot,
    ) -> Result<QuotationDraft, AssistantError> {
        let quote_prompt = prompt::build_quote_prompt(constraints, catalog)
            .map_err(AssistantError::CatalogEncode)?;
        let request = CompletionRequest {
            model: self.quote_model.clone(),
            prompt: quote_prompt,
            system_instruction: prompt::QUOTE_SYSTEM_INSTRUCTION.to_string(),
            response_schema: Some(prompt::quotation_response_schema()),
        };
        let body = self.api.complete(request).await?;
        let draft = serde_json::from_str::<QuotationDraft>(&body)
            .map_err(|source| AssistantError::MalformedDraft { source, body })?;
        tracing::debug!(
            project_type = %draft.project_type,
            items = draft.items.len(),
            "quotation draft parsed"
        );
        Ok(draft)
    }
}
