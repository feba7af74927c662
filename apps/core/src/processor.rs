//! Pipeline orchestrator: normalization, classification and reply generation
//! behind two entry points, one for raw text and one for file uploads.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::backend::{CompletionBackend, OpenAiBackend};
use crate::config::Settings;
use crate::error::{AppError, ExtractError};
use crate::models::{
    Category, ClassificationResult, EmailAnalysis, ExtractionResult, FileInfo, HealthReport,
};
use crate::respond::ResponseGenerator;
use crate::stopwords::stopwords;
use crate::text_extract;
use crate::triage::Classifier;

/// Upper bound on accepted text input, in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;
/// Minimum accepted text input, in characters (after trimming).
pub const MIN_TEXT_CHARS: usize = 5;
/// Preview length surfaced in results, in characters.
const PREVIEW_CHARS: usize = 100;
/// Keywords surfaced externally are capped to the first 10.
const MAX_SURFACED_KEYWORDS: usize = 10;

/// Email triage pipeline. Explicitly constructed; holds only read-only state.
pub struct EmailProcessor {
    classifier: Classifier,
    generator: ResponseGenerator,
    backend: Arc<dyn CompletionBackend>,
    settings: Settings,
}

impl EmailProcessor {
    /// Build the pipeline with the OpenAI-style backend from `settings`.
    /// Stopword resolution happens here, eagerly, before any request.
    pub fn new(settings: Settings) -> Self {
        let backend: Arc<dyn CompletionBackend> =
            Arc::new(OpenAiBackend::new(settings.backend.clone()));
        Self::with_backend(settings, backend)
    }

    /// Build the pipeline around an injected backend (used in tests).
    pub fn with_backend(settings: Settings, backend: Arc<dyn CompletionBackend>) -> Self {
        let tier = stopwords().tier();
        info!(
            "Email processor ready (stopword tier: {}, backend configured: {})",
            tier,
            backend.is_configured()
        );

        Self {
            classifier: Classifier::new(),
            generator: ResponseGenerator::new(backend.clone()),
            backend,
            settings,
        }
    }

    /// Classify raw email text and generate a suggested reply.
    pub async fn process_text(&self, raw: &str) -> Result<EmailAnalysis, AppError> {
        let text = raw.trim();

        if text.chars().count() < MIN_TEXT_CHARS {
            return Err(AppError::Validation("Texto muito curto".to_string()));
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(AppError::Validation("Texto muito longo".to_string()));
        }

        let classification = self.classifier.classify(text);
        let reply = self
            .generator
            .generate(text, classification.category, &classification.keywords)
            .await;

        info!(
            "Email processed - {} ({:.2})",
            classification.category, classification.confidence
        );

        Ok(self.assemble(text, classification, reply.body, reply.used_backend, None))
    }

    /// Extract text from an uploaded file, then classify and reply.
    ///
    /// Size, empty-file and unsupported-type violations are caller-visible
    /// errors. Exhausted extraction strategies degrade to a best-effort
    /// default analysis carrying the failure in `file_info`.
    pub async fn process_file(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<EmailAnalysis, AppError> {
        if filename.is_empty() {
            return Err(AppError::Validation(
                "Nome do arquivo não fornecido".to_string(),
            ));
        }
        if data.len() > self.settings.max_file_size {
            return Err(AppError::Validation("Arquivo muito grande".to_string()));
        }

        match self.extract(data, filename) {
            Ok(extraction) => {
                let file_info = FileInfo {
                    filename: filename.to_string(),
                    size_bytes: data.len(),
                    detected_type: extraction.mime_type.clone(),
                    extracted_chars: extraction.text.chars().count(),
                    success: true,
                    error: None,
                };

                let classification = self.classifier.classify(&extraction.text);
                let reply = self
                    .generator
                    .generate(
                        &extraction.text,
                        classification.category,
                        &classification.keywords,
                    )
                    .await;

                info!("File processed - {} -> {}", filename, classification.category);

                Ok(self.assemble(
                    &extraction.text,
                    classification,
                    reply.body,
                    reply.used_backend,
                    Some(file_info),
                ))
            }
            // An empty or unsupported upload is the caller's mistake.
            Err(e @ (ExtractError::EmptyFile | ExtractError::UnsupportedType(_))) => {
                Err(AppError::Extraction(e))
            }
            // Strategy exhaustion: report a best-effort default instead of aborting.
            Err(e) => {
                warn!("Extraction failed for {}: {}", filename, e);

                let category = Category::Improdutivo;
                let reply = self.generator.generate("", category, &[]).await;
                let file_info = FileInfo {
                    filename: filename.to_string(),
                    size_bytes: data.len(),
                    detected_type: text_extract::detect_mime(data),
                    extracted_chars: 0,
                    success: false,
                    error: Some(e.to_string()),
                };

                Ok(EmailAnalysis {
                    category,
                    confidence: 0.5,
                    response: reply.body,
                    used_backend: reply.used_backend,
                    email_preview: "Erro na extração".to_string(),
                    processed_keywords: None,
                    file_info: Some(file_info),
                    processed_at: Utc::now(),
                })
            }
        }
    }

    /// Extract text from a document without classifying it.
    pub fn extract(&self, data: &[u8], filename: &str) -> Result<ExtractionResult, ExtractError> {
        text_extract::extract(data, filename)
    }

    /// Readiness snapshot for the embedding application.
    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            backend_configured: self.backend.is_configured(),
            stopword_tier: stopwords().tier().to_string(),
            file_processing: "enabled".to_string(),
            timestamp: Utc::now(),
        }
    }

    fn assemble(
        &self,
        text: &str,
        classification: ClassificationResult,
        response: String,
        used_backend: bool,
        file_info: Option<FileInfo>,
    ) -> EmailAnalysis {
        let preview: String = if text.chars().count() > PREVIEW_CHARS {
            let head: String = text.chars().take(PREVIEW_CHARS).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        };

        let keywords: Vec<String> = classification
            .keywords
            .into_iter()
            .take(MAX_SURFACED_KEYWORDS)
            .collect();

        EmailAnalysis {
            category: classification.category,
            confidence: round2(classification.confidence),
            response,
            used_backend,
            email_preview: preview,
            processed_keywords: if keywords.is_empty() {
                None
            } else {
                Some(keywords)
            },
            file_info,
            processed_at: Utc::now(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
