//! # Triage Module
//!
//! Fast, non-LLM analysis of inbound email text.
//!
//! ## Components
//! - `normalize`: lowercasing, tokenization with fallback, stopword filtering, stemming
//! - `stem`: suffix-stripping stemmer used by the normalizer
//! - `classify`: keyword-weighted Produtivo/Improdutivo scoring
//! - `context`: coarse intent detection feeding reply generation

pub mod classify;
pub mod context;
pub mod normalize;
pub mod stem;

pub use classify::Classifier;
pub use context::{ContextAnalyzer, EmailIntent};
pub use normalize::{normalize, NormalizedText};
