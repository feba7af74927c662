//! Environment-driven configuration for the triage pipeline.
//!
//! All knobs are pass-through values supplied by the embedding application;
//! the core computes none of them. A missing API key is a valid, detected
//! state (the pipeline then runs on deterministic fallbacks only).

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use validator::Validate;

/// Default chat model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default completion budget.
pub const DEFAULT_MAX_TOKENS: u32 = 250;
/// Default backend timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Default upload ceiling: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for the completion backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BackendConfig {
    /// API key. `None` means the backend is not configured.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier sent with every completion request.
    #[validate(length(min = 1))]
    pub model: String,
    /// Maximum tokens per completion.
    #[validate(range(min = 1, max = 4096))]
    pub max_tokens: u32,
    /// Hard bound on a single backend call, in seconds.
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    /// Base URL of the completion API. Overridable so tests can point at a mock.
    #[validate(length(min = 1))]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: "https://api.openai.com".to_string(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level settings consumed by [`crate::processor::EmailProcessor`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub backend: BackendConfig,
    /// Maximum accepted upload size in bytes, enforced before extraction.
    #[validate(range(min = 1))]
    pub max_file_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl Settings {
    /// Load settings from the environment (and a `.env` file when present).
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = parse_env("OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        let timeout_secs = parse_env("OPENAI_TIMEOUT", DEFAULT_TIMEOUT_SECS)?;
        let max_file_size = parse_env("MAX_FILE_SIZE", DEFAULT_MAX_FILE_SIZE)?;

        let settings = Self {
            backend: BackendConfig {
                api_key,
                model,
                max_tokens,
                timeout_secs,
                ..BackendConfig::default()
            },
            max_file_size,
        };

        settings.validate()?;
        Ok(settings)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::Config(format!("{} is not a valid value: {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
