//! Text normalization: lowercasing, alphabet filtering, tokenization with
//! fallback, stopword removal and stemming.

use std::sync::LazyLock;
use tracing::warn;

use crate::lexicon::is_lexicon_word;
use crate::stopwords::stopwords;

use super::stem::stem;

// Compiled once; held as Option so an invalid pattern degrades instead of panicking.
static NON_LATIN: LazyLock<Option<regex::Regex>> =
    LazyLock::new(|| regex::Regex::new(r"[^a-záàâãéèêíïóôõöúçñ\s]").ok());

static WORD_TOKEN: LazyLock<Option<regex::Regex>> =
    LazyLock::new(|| regex::Regex::new(r"[a-záàâãéèêíïóôõöúçñ]+").ok());

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Stemmed filtered tokens joined by single spaces.
    pub stemmed_text: String,
    /// Lexicon hits among the filtered tokens, first-seen order, deduped.
    pub keywords: Vec<String>,
}

impl NormalizedText {
    fn empty() -> Self {
        Self {
            stemmed_text: String::new(),
            keywords: Vec::new(),
        }
    }
}

/// Normalize raw email text for scoring.
///
/// Pure over its input and the process-wide lexicons/stopwords. Never fails:
/// empty input yields empty output, and a missing tokenizer degrades to a
/// bare lowercase-and-split pass over the lexicons.
pub fn normalize(text: &str) -> NormalizedText {
    if text.is_empty() {
        return NormalizedText::empty();
    }

    let lowered = text.to_lowercase();

    let cleaned = match NON_LATIN.as_ref() {
        Some(re) => re.replace_all(&lowered, " ").into_owned(),
        None => {
            warn!("Alphabet filter unavailable, degrading to lowercase keyword scan");
            return degraded(&lowered);
        }
    };

    let tokens: Vec<&str> = match WORD_TOKEN.as_ref() {
        Some(re) => re.find_iter(&cleaned).map(|m| m.as_str()).collect(),
        None => {
            warn!("Tokenizer unavailable, using whitespace split");
            cleaned.split_whitespace().collect()
        }
    };

    let stops = stopwords();
    let filtered: Vec<&str> = tokens
        .into_iter()
        .filter(|word| !stops.contains(word) && word.chars().count() > 2)
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for word in &filtered {
        if is_lexicon_word(word) && !keywords.iter().any(|k| k == word) {
            keywords.push((*word).to_string());
        }
    }

    let stemmed_text = filtered
        .iter()
        .map(|word| stem(word))
        .collect::<Vec<_>>()
        .join(" ");

    NormalizedText {
        stemmed_text,
        keywords,
    }
}

/// Last-resort pass: keywords from a plain whitespace split, raw lowercased
/// text carried through unchanged.
fn degraded(lowered: &str) -> NormalizedText {
    let mut keywords: Vec<String> = Vec::new();
    for word in lowered.split_whitespace() {
        if is_lexicon_word(word) && !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    NormalizedText {
        stemmed_text: lowered.to_string(),
        keywords,
    }
}
