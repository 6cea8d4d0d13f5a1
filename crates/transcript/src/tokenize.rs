//! Unicode-aware word extraction.

use regex::Regex;
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    // \w is Unicode-aware, so Cyrillic and other non-ASCII scripts tokenize
    // the same way as Latin text.
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("valid word regex"))
}

/// Lowercase `text` and extract its word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_re()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
