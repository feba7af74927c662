//! Suffix-stripping stemmer for Portuguese (with a few endings shared by
//! English loanwords). Reduction runs to a fixed point, so stemming an
//! already-stemmed token is a no-op.

/// Suffixes ordered longest-first so the most specific ending wins.
const SUFFIXES: &[&str] = &[
    "amento", "imento", "amente", "adores", "idades", "íssimo", "íssima", "mente", "idade",
    "adora", "ância", "ência", "antes", "ação", "ções", "ção", "ador", "ante", "ismo", "ista",
    "ível", "ável", "ando", "endo", "indo", "aram", "eram", "iram", "ente", "osas", "osos",
    "eza", "ezas", "ado", "ada", "ido", "ida", "ava", "oso", "osa", "iva", "ivo", "ões", "ães",
    "ar", "er", "ir", "ão", "es", "s",
];

/// Minimum number of characters a stem keeps after stripping.
const MIN_STEM_CHARS: usize = 3;

fn strip_once(word: &str) -> Option<&str> {
    for suffix in SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.chars().count() >= MIN_STEM_CHARS {
                return Some(stem);
            }
        }
    }
    None
}

/// Reduce a lowercase token to its root form.
pub fn stem(word: &str) -> String {
    let mut current = word;
    while let Some(shorter) = strip_once(current) {
        current = shorter;
    }
    current.to_string()
}
