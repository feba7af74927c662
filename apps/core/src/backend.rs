//! Completion backend for reply generation.
//!
//! The backend is a best-effort capability: when it is unconfigured or a call
//! fails, the response generator falls back to deterministic templates. The
//! trait keeps the fallback path testable without any live network dependency.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::time::timeout;
use tracing::{error, info};

use crate::config::BackendConfig;
use crate::error::AppError;

/// Sampling temperature used for reply generation.
const REPLY_TEMPERATURE: f64 = 0.8;

/// Capability interface for an external language-model completion service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Whether the backend has credentials and can be called at all.
    fn is_configured(&self) -> bool;

    /// One-shot chat completion. Bounded by the configured timeout.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError>;
}

/// Outcome of a connectivity probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendProbe {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// OpenAI-style chat-completions client.
pub struct OpenAiBackend {
    client: Client,
    config: BackendConfig,
}

impl OpenAiBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn chat(
        &self,
        messages: serde_json::Value,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, AppError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::BackendUnavailable("API key not configured".to_string()))?;

        let payload = json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let request = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send();

        let response = timeout(self.config.timeout(), request).await??;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::BackendUnavailable(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();

        Ok(content)
    }

    /// Tiny one-shot completion to verify connectivity and credentials.
    pub async fn test_connection(&self) -> BackendProbe {
        if !self.is_configured() {
            return BackendProbe {
                status: "error".to_string(),
                message: Some("Backend not configured".to_string()),
                response: None,
                model: None,
            };
        }

        let messages = json!([{"role": "user", "content": "Teste de conexão. Responda 'OK'"}]);
        match self.chat(messages, 10, 0.1).await {
            Ok(response) => BackendProbe {
                status: "success".to_string(),
                message: None,
                response: Some(response),
                model: Some(self.config.model.clone()),
            },
            Err(e) => BackendProbe {
                status: "error".to_string(),
                message: Some(e.to_string()),
                response: None,
                model: None,
            },
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError> {
        info!("Requesting completion from model {}", self.config.model);

        let messages = json!([
            {"role": "system", "content": system_prompt},
            {"role": "user", "content": user_prompt},
        ]);

        let result = self
            .chat(messages, self.config.max_tokens, REPLY_TEMPERATURE)
            .await;

        if let Err(ref e) = result {
            error!("Completion failed: {}", e);
        }
        result
    }
}
