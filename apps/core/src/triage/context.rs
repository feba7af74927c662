//! Coarse intent detection for reply generation.
//!
//! Substring triggers checked in priority order; the first matching group
//! names the intent. The label feeds both the backend prompt and the
//! deterministic fallback selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detected email intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailIntent {
    /// A request for something (solicit/pedido/requer).
    Solicitacao,
    /// A problem or error report (problema/erro/bug).
    Problema,
    /// A question (dúvida/pergunta).
    Duvida,
}

impl fmt::Display for EmailIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailIntent::Solicitacao => write!(f, "Solicitação"),
            EmailIntent::Problema => write!(f, "Problema"),
            EmailIntent::Duvida => write!(f, "Dúvida"),
        }
    }
}

const SOLICITACAO_TRIGGERS: &[&str] = &["solicit", "pedido", "requer"];
const PROBLEMA_TRIGGERS: &[&str] = &["problema", "erro", "bug"];
const DUVIDA_TRIGGERS: &[&str] = &["dúvida", "pergunta"];

/// Context analyzer: pure substring classification over lowercased text.
pub struct ContextAnalyzer;

impl Default for ContextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Detect the coarse intent, if any. First matching group wins.
    pub fn detect_intent(&self, text: &str) -> Option<EmailIntent> {
        let lowered = text.to_lowercase();
        let groups: [(&[&str], EmailIntent); 3] = [
            (SOLICITACAO_TRIGGERS, EmailIntent::Solicitacao),
            (PROBLEMA_TRIGGERS, EmailIntent::Problema),
            (DUVIDA_TRIGGERS, EmailIntent::Duvida),
        ];
        for (triggers, intent) in groups {
            if triggers.iter().any(|t| lowered.contains(t)) {
                return Some(intent);
            }
        }
        None
    }

    /// Build the pipe-joined context label used in prompts.
    pub fn describe(&self, text: &str, keywords: &[String]) -> String {
        let mut elements: Vec<String> = Vec::new();

        if let Some(intent) = self.detect_intent(text) {
            elements.push(intent.to_string());
        }

        if !keywords.is_empty() {
            let top: Vec<&str> = keywords.iter().take(3).map(String::as_str).collect();
            elements.push(format!("Palavras-chave: {}", top.join(", ")));
        }

        if elements.is_empty() {
            "Mensagem geral".to_string()
        } else {
            elements.join(" | ")
        }
    }
}
