//! AI assistant adapter for the agency dashboard.
//!
//! Wraps a generative-language completion endpoint behind the
//! [`CompletionApi`] trait: free-text chat with a best-effort fallback,
//! and JSON-schema-constrained quotation drafting that fails loudly.

pub mod api;
pub mod assistant;
pub mod config;
pub mod prompt;
pub mod types;

pub use api::{ApiError, CompletionApi, CompletionRequest, GenerativeApi};
pub use assistant::{AssistantError, CHAT_FALLBACK_MESSAGE, EMPTY_COMPLETION_MESSAGE, Assistant};
pub use config::AssistantConfig;
pub use types::{CatalogSnapshot, QuotationDraft};
