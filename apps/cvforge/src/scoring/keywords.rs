//! Keyword extraction: tokenizes free text into normalized candidate
//! keywords for the match engine.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of three or more lowercase letters/hyphens. Hyphens are
/// inside the class so compounds like "full-stack" stay one token;
/// digits and other punctuation split tokens.
static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z-]{3,}").expect("keyword pattern is valid"));

/// Extracts the deduplicated keyword set of `text`, in first-occurrence
/// order. The order is deterministic for identical input, which keeps
/// the match engine's matched/missing lists stable across calls.
///
/// Non-ASCII letters never match the pattern, so accented or non-Latin
/// words are effectively dropped after lower-casing.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for token in KEYWORD.find_iter(&lowered) {
        if seen.insert(token.as_str()) {
            keywords.push(token.as_str().to_string());
        }
    }
    keywords
}
