//! Ordered strategy chains.
//!
//! Several capabilities in this crate (PDF extraction, text decoding) are a
//! list of named attempts tried in sequence until one succeeds. This runner
//! expresses that once, instead of cascaded error handlers at every site.

use tracing::warn;

/// Outcome of a whole chain: the winning strategy's name and output, or the
/// per-strategy failure reasons in the order they were tried.
pub type ChainResult<O> = Result<(&'static str, O), Vec<(&'static str, String)>>;

/// Run `strategies` in order against `input`; the first `Ok` wins.
///
/// Failures are logged and collected so the caller can surface a single
/// typed error naming everything that was attempted.
pub fn first_success<I: ?Sized, O>(
    input: &I,
    strategies: &[(&'static str, &dyn Fn(&I) -> Result<O, String>)],
) -> ChainResult<O> {
    let mut failures = Vec::new();

    for (name, run) in strategies {
        match run(input) {
            Ok(output) => return Ok((name, output)),
            Err(reason) => {
                warn!("Strategy '{}' failed: {}", name, reason);
                failures.push((*name, reason));
            }
        }
    }

    Err(failures)
}

/// Render collected failures as one human-readable reason.
pub fn describe_failures(failures: &[(&'static str, String)]) -> String {
    failures
        .iter()
        .map(|(name, reason)| format!("{}: {}", name, reason))
        .collect::<Vec<_>>()
        .join("; ")
}
