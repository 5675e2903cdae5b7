//! Query and address normalization.
//!
//! Applied symmetrically to free-text queries and to a record's address
//! fields so both sides compare in the same token space. Deterministic
//! and idempotent; callers treat an empty result as "no query" and
//! short-circuit to an empty result set rather than matching everything.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching runs of characters that do not contribute to matching.
/// Each run collapses to a single space.
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Normalizes a free-text query or address into comparable token form.
///
/// The pipeline:
/// 1. Lowercase
/// 2. Replace every non-alphanumeric run with a single space
/// 3. Trim
#[must_use]
pub fn normalize(input: &str) -> String {
    let lower = input.to_lowercase();
    NON_ALNUM_RE.replace_all(&lower, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("123 Main St."), "123 main st");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("123   Main \t St"), "123 main st");
    }

    #[test]
    fn strips_interior_punctuation_runs() {
        assert_eq!(normalize("one—two, three/four"), "one two three four");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn whitespace_only_input_becomes_empty() {
        assert_eq!(normalize("  \t \n "), "");
    }

    #[test]
    fn punctuation_only_input_becomes_empty() {
        assert_eq!(normalize("-- / #!"), "");
    }

    #[test]
    fn is_idempotent() {
        for input in ["123 Main St.", "  Ferry   Building ", "", "a—b"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
