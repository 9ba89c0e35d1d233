//! REST client for the generative-language completion endpoint.
//!
//! One round trip per call, no retries. The [`CompletionApi`] trait is
//! the seam tests and embedders use to swap the live client out.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AssistantConfig;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// A single completion call: one prompt, one system instruction, and an
/// optional JSON schema constraining the response body.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model name, e.g. `gemini-3-flash-preview`.
    pub model: String,
    /// User-facing prompt text.
    pub prompt: String,
    /// System instruction prepended to the conversation.
    pub system_instruction: String,
    /// When set, the endpoint is asked for `application/json` output
    /// matching this schema.
    pub response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Errors from the completion REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("completion API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but carried no candidate text.
    #[error("completion response contained no text")]
    EmptyCompletion,
}

// ---------------------------------------------------------------------------
// Trait seam
// ---------------------------------------------------------------------------

/// A completion backend: prompt in, text out.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Run a single completion round trip and return the raw text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, ApiError>;
}

// ---------------------------------------------------------------------------
// Live client
// ---------------------------------------------------------------------------

/// HTTP client for the generative-language `generateContent` endpoint.
pub struct GenerativeApi {
    client: reqwest::Client,
    config: AssistantConfig,
}

impl GenerativeApi {
    /// Create a client for the configured endpoint.
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: AssistantConfig) -> Self {
        Self { client, config }
    }

    fn request_body(request: &CompletionRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": request.prompt }] }],
            "systemInstruction": { "parts": [{ "text": request.system_instruction }] },
        });
        if let Some(schema) = &request.response_schema {
            body["generationConfig"] = serde_json::json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }
        body
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Api`] carrying
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Pull the first candidate's concatenated part text out of a
    /// parsed response.
    fn extract_text(response: GenerateContentResponse) -> Result<String, ApiError> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ApiError::EmptyCompletion);
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionApi for GenerativeApi {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ApiError> {
        let request_id = uuid::Uuid::new_v4();
        tracing::debug!(%request_id, model = %request.model, "sending completion request");

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_url, request.model, self.config.api_key
        );
        let response = self
            .client
            .post(url)
            .json(&Self::request_body(&request))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed = response.json::<GenerateContentResponse>().await?;
        let text = Self::extract_text(parsed)?;
        tracing::debug!(%request_id, chars = text.len(), "completion received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(schema: Option<serde_json::Value>) -> CompletionRequest {
        CompletionRequest {
            model: "gemini-3-flash-preview".to_string(),
            prompt: "hello".to_string(),
            system_instruction: "be brief".to_string(),
            response_schema: schema,
        }
    }

    #[test]
    fn chat_body_has_no_generation_config() {
        let body = GenerativeApi::request_body(&request(None));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be brief");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn structured_body_requests_json_output() {
        let schema = serde_json::json!({ "type": "OBJECT" });
        let body = GenerativeApi::request_body(&request(Some(schema.clone())));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn extract_text_joins_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "a" }, { "text": "b" }] } }]
        }))
        .unwrap();
        assert_eq!(GenerativeApi::extract_text(response).unwrap(), "ab");
    }

    #[test]
    fn extract_text_rejects_empty_responses() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        assert_matches::assert_matches!(
            GenerativeApi::extract_text(response),
            Err(ApiError::EmptyCompletion)
        );
    }
}
