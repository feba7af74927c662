//! Fixed keyword lexicons and scoring weights.
//!
//! Two disjoint lowercase word lists drive the productive/unproductive scoring,
//! plus a sparse weight table for the words that matter more than the default.
//! Loaded once, never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Words signalling an actionable, business email.
pub const PRODUCTIVE: &[&str] = &[
    "suporte",
    "problema",
    "ajuda",
    "erro",
    "solicitação",
    "atualização",
    "dúvida",
    "sistema",
    "urgente",
    "cliente",
    "contrato",
    "proposta",
    "reunião",
    "relatório",
    "orçamento",
    "prazo",
    "projeto",
    "tarefa",
    "bug",
    "falha",
    "pedido",
    "requisição",
    "necessário",
    "importante",
];

/// Words signalling a social, non-actionable email.
pub const UNPRODUCTIVE: &[&str] = &[
    "obrigado",
    "agradeço",
    "parabéns",
    "feliz",
    "natal",
    "ano novo",
    "comemoração",
    "festa",
    "férias",
    "almoço",
    "jantar",
    "convite",
    "social",
    "pessoal",
    "aniversário",
    "casamento",
    "feriado",
    "descanso",
    "diversão",
    "lazer",
];

/// Phrases that tip a zero-score email toward Produtivo.
pub const STRONG_PRODUCTIVE: &[&str] = &["reunião", "projeto", "relatório", "prazo", "entreg"];

/// Default multiplier for productive words absent from the weight table.
pub const DEFAULT_PRODUCTIVE_WEIGHT: f64 = 1.2;
/// Default multiplier for unproductive words absent from the weight table.
pub const DEFAULT_UNPRODUCTIVE_WEIGHT: f64 = 1.0;

/// Sparse per-word multipliers.
pub static KEYWORD_WEIGHTS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("reunião", 2.0),
        ("projeto", 1.8),
        ("prazo", 1.7),
        ("entreg", 1.6),
        ("trabalho", 1.5),
        ("urgente", 1.8),
        ("contrato", 1.7),
        ("cliente", 1.6),
        ("fest", 1.8),
        ("festa", 1.8),
        ("social", 1.5),
        ("pessoal", 1.4),
    ])
});

/// Weight applied to a productive lexicon word.
pub fn productive_weight(word: &str) -> f64 {
    KEYWORD_WEIGHTS
        .get(word)
        .copied()
        .unwrap_or(DEFAULT_PRODUCTIVE_WEIGHT)
}

/// Weight applied to an unproductive lexicon word.
pub fn unproductive_weight(word: &str) -> f64 {
    KEYWORD_WEIGHTS
        .get(word)
        .copied()
        .unwrap_or(DEFAULT_UNPRODUCTIVE_WEIGHT)
}

/// Whether the word appears in either lexicon.
pub fn is_lexicon_word(word: &str) -> bool {
    PRODUCTIVE.contains(&word) || UNPRODUCTIVE.contains(&word)
}
