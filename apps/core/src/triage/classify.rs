//! Keyword-weighted classification into Produtivo/Improdutivo.
//!
//! Scoring counts lexicon words as plain substrings of the lowercased text
//! (a lexicon entry that is a prefix of a longer word still matches). The
//! confidence ladder is discontinuous at ratio 0.3, 0.4 and 0.6 on purpose;
//! the bands bias toward Produtivo at moderate ambiguity.

use crate::lexicon::{
    productive_weight, unproductive_weight, PRODUCTIVE, STRONG_PRODUCTIVE, UNPRODUCTIVE,
};
use crate::models::{Category, ClassificationResult, ScoreResult};

use super::normalize::normalize;

/// Inputs shorter than this (trimmed) get the deterministic default.
pub const MIN_TEXT_CHARS: usize = 5;

/// Classifier over the process-wide lexicons.
pub struct Classifier;

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify email text. Never fails: short input yields the defined
    /// default `(Improdutivo, 0.5, [])`.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            return ClassificationResult {
                category: Category::Improdutivo,
                confidence: 0.5,
                keywords: Vec::new(),
            };
        }

        let keywords = normalize(text).keywords;
        let lowered = text.to_lowercase();
        let score = self.score(&lowered);

        let (category, confidence) = match score.ratio() {
            None => {
                if STRONG_PRODUCTIVE.iter().any(|p| lowered.contains(p)) {
                    (Category::Produtivo, 0.6)
                } else {
                    (Category::Improdutivo, 0.55)
                }
            }
            Some(ratio) => Self::decide(ratio),
        };

        ClassificationResult {
            category,
            confidence,
            keywords,
        }
    }

    /// Weighted substring-frequency scores over both lexicons.
    pub fn score(&self, lowered: &str) -> ScoreResult {
        let mut productive = 0.0;
        for word in PRODUCTIVE {
            let count = lowered.matches(word).count() as f64;
            productive += count * productive_weight(word);
        }

        let mut unproductive = 0.0;
        for word in UNPRODUCTIVE {
            let count = lowered.matches(word).count() as f64;
            unproductive += count * unproductive_weight(word);
        }

        ScoreResult {
            productive,
            unproductive,
        }
    }

    /// The four-band decision ladder, exact breakpoints included.
    fn decide(ratio: f64) -> (Category, f64) {
        if ratio > 0.6 {
            (Category::Produtivo, (0.7 + (ratio - 0.6) * 2.0).min(0.95))
        } else if ratio > 0.4 {
            (Category::Produtivo, 0.6 + (ratio - 0.4) * 0.5)
        } else if ratio > 0.3 {
            (Category::Improdutivo, 0.55)
        } else {
            (Category::Improdutivo, (0.7 + (0.3 - ratio) * 2.0).min(0.95))
        }
    }
}
