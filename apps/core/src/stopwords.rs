//! Stopword set with a three-tier fallback.
//!
//! Tier order: Portuguese resource list, English resource list, hard-coded
//! manual set. Each tier is a named source tried in sequence; the manual set
//! cannot fail, so the chain always resolves. Resolution happens once per
//! process and is cached for its lifetime. No network involved at any tier.

use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Portuguese function words, the primary language resource.
const STOPWORDS_PT: &[&str] = &[
    "a", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "até", "com",
    "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
    "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "éramos", "essa", "essas",
    "esse", "esses", "esta", "estas", "este", "estes", "estou", "está", "estamos", "estão",
    "eu", "foi", "fomos", "for", "foram", "fosse", "fossem", "fui", "há", "isso", "isto", "já",
    "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu", "meus", "minha", "minhas", "muito",
    "na", "nas", "nem", "no", "nos", "nós", "nossa", "nossas", "nosso", "nossos", "num",
    "numa", "não", "o", "os", "ou", "para", "pela", "pelas", "pelo", "pelos", "por", "qual",
    "quando", "que", "quem", "se", "seja", "sejam", "sem", "ser", "serei", "será", "serão",
    "seu", "seus", "sobre", "somos", "sou", "sua", "suas", "são", "só", "também", "te", "tem",
    "temos", "tenho", "ter", "teu", "teus", "tinha", "tinham", "tu", "tua", "tuas", "têm",
    "um", "uma", "você", "vocês", "vos", "é",
];

/// English function words, the secondary language resource.
const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she",
    "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "this", "that", "these", "those", "who", "whom", "which", "what", "whose", "is",
    "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "in", "on", "at", "to", "from", "by", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "up", "down", "out",
    "off", "over", "under", "again", "further", "here", "there", "where", "when", "why",
    "how", "all", "each", "every", "both", "few", "more", "most", "other", "some", "any",
    "no", "not", "only", "own", "same", "than", "too", "very", "just", "also", "now", "then",
    "once", "if", "because", "as", "until", "while",
];

/// Minimal manual fallback, used when both language resources are unavailable.
const STOPWORDS_MANUAL: &[&str] = &[
    "a", "ao", "as", "com", "da", "das", "de", "do", "dos", "e", "em", "na", "nas", "no",
    "nos", "o", "os", "ou", "para", "por", "que", "se", "um", "uma", "é", "não",
];

/// A resolved stopword set plus the name of the tier that produced it.
pub struct StopwordSet {
    words: HashSet<&'static str>,
    tier: &'static str,
}

impl StopwordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Which tier is active: "portuguese", "english" or "manual".
    pub fn tier(&self) -> &'static str {
        self.tier
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

static STOPWORDS: OnceLock<StopwordSet> = OnceLock::new();

fn load_tier(name: &'static str, words: &'static [&'static str]) -> Option<StopwordSet> {
    // An empty resource counts as unavailable so the next tier is tried.
    if words.is_empty() {
        return None;
    }
    Some(StopwordSet {
        words: words.iter().copied().collect(),
        tier: name,
    })
}

fn resolve() -> StopwordSet {
    let tiers: [(&'static str, &'static [&'static str]); 2] =
        [("portuguese", STOPWORDS_PT), ("english", STOPWORDS_EN)];

    for (name, words) in tiers {
        match load_tier(name, words) {
            Some(set) => {
                info!("Stopword tier '{}' loaded ({} words)", name, set.len());
                return set;
            }
            None => warn!("Stopword tier '{}' unavailable, trying next", name),
        }
    }

    warn!("Falling back to manual stopword set");
    StopwordSet {
        words: STOPWORDS_MANUAL.iter().copied().collect(),
        tier: "manual",
    }
}

/// The process-wide stopword set, resolved on first access.
pub fn stopwords() -> &'static StopwordSet {
    STOPWORDS.get_or_init(resolve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_tier_wins() {
        let set = stopwords();
        assert_eq!(set.tier(), "portuguese");
        assert!(!set.is_empty());
    }

    #[test]
    fn test_common_portuguese_words_filtered() {
        let set = stopwords();
        for word in ["de", "para", "uma", "sobre", "não"] {
            assert!(set.contains(word), "'{}' should be a stopword", word);
        }
    }

    #[test]
    fn test_content_words_pass() {
        let set = stopwords();
        for word in ["reunião", "projeto", "urgente"] {
            assert!(!set.contains(word), "'{}' must not be a stopword", word);
        }
    }

    #[test]
    fn test_manual_tier_is_nonempty() {
        // The final tier can never fail; guard against someone emptying it.
        assert!(!STOPWORDS_MANUAL.is_empty());
    }

    #[test]
    fn test_empty_resource_is_skipped() {
        assert!(load_tier("empty", &[]).is_none());
    }
}
