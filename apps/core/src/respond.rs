//! Reply generation: backend best-effort, deterministic templates otherwise.
//!
//! The backend call is the only outbound I/O in the pipeline and its failure
//! never leaves this module; every error path lands on a canned template.

use std::sync::Arc;
use tracing::warn;

use crate::backend::CompletionBackend;
use crate::models::{Category, ReplyResult};
use crate::triage::ContextAnalyzer;

/// Basic templates for inputs too short to analyze.
pub const BASIC_PRODUCTIVE: &str = "Agradecemos seu contato. Nossa equipe retornará em breve.";
pub const BASIC_UNPRODUCTIVE: &str = "Obrigado pelo seu email!";

/// Contextual fallback templates. Asserted byte-for-byte in tests.
pub const FALLBACK_SOLICITACAO: &str =
    "Agradecemos sua solicitação. Nossa equipe analisará e retornará em breve.";
pub const FALLBACK_PROBLEMA: &str =
    "Lamentamos pelo problema. Nossa equipe técnica está trabalhando na solução.";
pub const FALLBACK_PRODUCTIVE_GENERIC: &str =
    "Agradecemos seu contato. Retornaremos em breve com uma resposta.";
pub const FALLBACK_AGRADECIMENTO: &str =
    "Ficamos felizes com seu agradecimento! É um prazer ajudar.";
pub const FALLBACK_UNPRODUCTIVE_GENERIC: &str =
    "Agradecemos seu contato! Ficamos felizes em receber sua mensagem.";

const SYSTEM_PROMPT_PRODUCTIVE: &str =
    "Você é um assistente virtual profissional. Responda emails corporativos de forma clara e útil.";
const SYSTEM_PROMPT_UNPRODUCTIVE: &str =
    "Você é um assistente pessoal educado. Responda emails pessoais de forma amigável.";

/// Generates a suggested reply for a classified email.
pub struct ResponseGenerator {
    backend: Arc<dyn CompletionBackend>,
    context: ContextAnalyzer,
}

impl ResponseGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            context: ContextAnalyzer::new(),
        }
    }

    /// Generate a reply. Never fails: backend errors degrade to templates.
    pub async fn generate(
        &self,
        text: &str,
        category: Category,
        keywords: &[String],
    ) -> ReplyResult {
        if text.trim().chars().count() < 5 {
            return ReplyResult {
                body: basic_template(category).to_string(),
                used_backend: false,
            };
        }

        if self.backend.is_configured() {
            let system_prompt = system_prompt(category);
            let user_prompt = self.build_prompt(text, category, keywords);

            match self.backend.complete(system_prompt, &user_prompt).await {
                Ok(completion) => {
                    return ReplyResult {
                        body: completion,
                        used_backend: true,
                    }
                }
                Err(e) => {
                    warn!("Backend reply failed, using contextual fallback: {}", e);
                }
            }
        }

        ReplyResult {
            body: contextual_fallback(text, category).to_string(),
            used_backend: false,
        }
    }

    /// Role-tagged user prompt: context summary, first 1000 chars, instruction.
    fn build_prompt(&self, text: &str, category: Category, keywords: &[String]) -> String {
        let context = self.context.describe(text, keywords);
        let excerpt: String = text.chars().take(1000).collect();
        let instruction = match category {
            Category::Produtivo => "Gere resposta profissional baseada no contexto.",
            Category::Improdutivo => "Gere resposta amigável baseada no contexto.",
        };

        format!(
            "ANÁLISE: {}\nEMAIL: \"{}\"\nINSTRUÇÕES: {}\nRESPOSTA:",
            context, excerpt, instruction
        )
    }
}

fn system_prompt(category: Category) -> &'static str {
    match category {
        Category::Produtivo => SYSTEM_PROMPT_PRODUCTIVE,
        Category::Improdutivo => SYSTEM_PROMPT_UNPRODUCTIVE,
    }
}

fn basic_template(category: Category) -> &'static str {
    match category {
        Category::Produtivo => BASIC_PRODUCTIVE,
        Category::Improdutivo => BASIC_UNPRODUCTIVE,
    }
}

/// Two-level lookup: category, then intent keyword, then generic.
fn contextual_fallback(text: &str, category: Category) -> &'static str {
    let lowered = text.to_lowercase();

    match category {
        Category::Produtivo => {
            if ["solicit", "pedido"].iter().any(|t| lowered.contains(t)) {
                FALLBACK_SOLICITACAO
            } else if ["problema", "erro"].iter().any(|t| lowered.contains(t)) {
                FALLBACK_PROBLEMA
            } else {
                FALLBACK_PRODUCTIVE_GENERIC
            }
        }
        Category::Improdutivo => {
            if ["agradec", "obrigad"].iter().any(|t| lowered.contains(t)) {
                FALLBACK_AGRADECIMENTO
            } else {
                FALLBACK_UNPRODUCTIVE_GENERIC
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::OpenAiBackend;
    use crate::config::BackendConfig;

    fn generator_without_backend() -> ResponseGenerator {
        ResponseGenerator::new(Arc::new(OpenAiBackend::new(BackendConfig::default())))
    }

    #[tokio::test]
    async fn test_short_text_uses_basic_template() {
        let generator = generator_without_backend();

        let reply = generator.generate("oi", Category::Produtivo, &[]).await;
        assert_eq!(reply.body, BASIC_PRODUCTIVE);
        assert!(!reply.used_backend);

        let reply = generator.generate("", Category::Improdutivo, &[]).await;
        assert_eq!(reply.body, BASIC_UNPRODUCTIVE);
    }

    #[tokio::test]
    async fn test_problem_fallback_is_byte_exact() {
        let generator = generator_without_backend();
        let reply = generator
            .generate(
                "Estou com um problema no sistema de pagamentos",
                Category::Produtivo,
                &[],
            )
            .await;
        assert_eq!(
            reply.body,
            "Lamentamos pelo problema. Nossa equipe técnica está trabalhando na solução."
        );
        assert!(!reply.used_backend);
    }

    #[tokio::test]
    async fn test_request_fallback() {
        let generator = generator_without_backend();
        let reply = generator
            .generate(
                "Venho solicitar a segunda via do boleto",
                Category::Produtivo,
                &[],
            )
            .await;
        assert_eq!(reply.body, FALLBACK_SOLICITACAO);
    }

    #[tokio::test]
    async fn test_thanks_fallback() {
        let generator = generator_without_backend();
        let reply = generator
            .generate(
                "Muito obrigado pela ajuda de vocês!",
                Category::Improdutivo,
                &[],
            )
            .await;
        assert_eq!(reply.body, FALLBACK_AGRADECIMENTO);
    }

    #[tokio::test]
    async fn test_generic_fallbacks() {
        let generator = generator_without_backend();

        let reply = generator
            .generate("Segue em anexo o documento combinado", Category::Produtivo, &[])
            .await;
        assert_eq!(reply.body, FALLBACK_PRODUCTIVE_GENERIC);

        let reply = generator
            .generate("Passando para desejar uma boa semana", Category::Improdutivo, &[])
            .await;
        assert_eq!(reply.body, FALLBACK_UNPRODUCTIVE_GENERIC);
    }

    #[test]
    fn test_prompt_shape() {
        let generator = generator_without_backend();
        let keywords = vec!["erro".to_string(), "sistema".to_string()];
        let prompt = generator.build_prompt(
            "Encontrei um erro no sistema",
            Category::Produtivo,
            &keywords,
        );

        assert!(prompt.starts_with("ANÁLISE: Problema | Palavras-chave: erro, sistema"));
        assert!(prompt.contains("EMAIL: \"Encontrei um erro no sistema\""));
        assert!(prompt.ends_with("RESPOSTA:"));
    }

    #[test]
    fn test_prompt_truncates_to_1000_chars() {
        let generator = generator_without_backend();
        let long_text = "a".repeat(5000);
        let prompt = generator.build_prompt(&long_text, Category::Produtivo, &[]);
        // 1000 chars of email body, not 5000.
        assert!(prompt.matches('a').count() < 1100);
    }
}
