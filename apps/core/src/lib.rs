//! Mailsift core: email triage into Produtivo/Improdutivo with a suggested reply.
//!
//! Pipeline: raw text (direct or extracted from an uploaded document) →
//! normalization → keyword-weighted classification → context-aware reply
//! generation, with deterministic fallbacks when the completion backend is
//! absent or failing. The HTTP layer is the embedding application's concern;
//! this crate receives a string (or bytes + filename) and returns a
//! structured [`models::EmailAnalysis`].

pub mod backend;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod processor;
pub mod respond;
pub mod stopwords;
pub mod strategy;
pub mod text_extract;
pub mod triage;

pub use backend::{BackendProbe, CompletionBackend, OpenAiBackend};
pub use config::Settings;
pub use error::{AppError, ExtractError};
pub use models::{Category, ClassificationResult, EmailAnalysis, ExtractionResult, ReplyResult};
pub use processor::EmailProcessor;

#[cfg(test)]
mod tests;
