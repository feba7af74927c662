use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two triage categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Actionable, business-related email.
    Produtivo,
    /// Social or otherwise non-actionable email.
    Improdutivo,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Produtivo => write!(f, "Produtivo"),
            Category::Improdutivo => write!(f, "Improdutivo"),
        }
    }
}

/// Output of the classifier stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Assigned category.
    pub category: Category,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Lexicon hits in first-seen order.
    pub keywords: Vec<String>,
}

/// Raw productive/unproductive scores before the decision ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub productive: f64,
    pub unproductive: f64,
}

impl ScoreResult {
    pub fn total(&self) -> f64 {
        self.productive + self.unproductive
    }

    /// `productive / total`, defined only when any score accrued.
    pub fn ratio(&self) -> Option<f64> {
        let total = self.total();
        if total > 0.0 {
            Some(self.productive / total)
        } else {
            None
        }
    }
}

/// Output of the document extractor. Invariant: `text` trims to at least
/// 5 characters; shorter extractions fail with a typed error instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    pub mime_type: String,
    pub source_filename: String,
}

/// Output of the response generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyResult {
    /// Suggested reply text.
    pub body: String,
    /// Whether the completion backend produced it (vs. a deterministic fallback).
    pub used_backend: bool,
}

/// Metadata about a processed file upload, reported alongside the analysis
/// even when extraction failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub filename: String,
    pub size_bytes: usize,
    pub detected_type: String,
    pub extracted_chars: usize,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete pipeline result for one email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAnalysis {
    /// Assigned category.
    pub category: Category,
    /// Confidence rounded to two decimals.
    pub confidence: f64,
    /// Suggested reply.
    pub response: String,
    /// Whether the reply came from the completion backend.
    pub used_backend: bool,
    /// First 100 characters of the analyzed text.
    pub email_preview: String,
    /// Up to 10 lexicon hits, first-seen order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_keywords: Option<Vec<String>>,
    /// Present when the input came from a file upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
    /// When the analysis was produced.
    pub processed_at: DateTime<Utc>,
}

/// Snapshot of the pipeline's readiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub backend_configured: bool,
    /// Which stopword tier is active ("portuguese", "english" or "manual").
    pub stopword_tier: String,
    pub file_processing: String,
    pub timestamp: DateTime<Utc>,
}
