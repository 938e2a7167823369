//! Search pattern construction
//!
//! A `from` phrase becomes a case-insensitive regex with three groups: the
//! alphanumeric run glued in front, the phrase itself, and the alphanumeric
//! run glued behind. Any whitespace run in the phrase matches any other
//! whitespace run, so `"foo bar"` also finds `"foo\n   bar"`.

use crate::affix;
use crate::error::{MappingError, Result};
use regex::Regex;

/// Capture group of the glued-in-front run
pub const PREFIX_GROUP: usize = 1;
/// Capture group of the phrase
pub const WORD_GROUP: usize = 2;
/// Capture group of the glued-behind run
pub const SUFFIX_GROUP: usize = 3;

/// Affixes are ASCII alphanumerics only
const AFFIX_CLASS: &str = "[A-Za-z0-9]*";

const WHITESPACE_RUN: &str = r"\s+";

/// Escape a cleaned `from` value into a whitespace-tolerant regex fragment.
///
/// Returns `None` when nothing is left to search for.
pub fn phrase_pattern(from: &str) -> Option<String> {
    let unescaped = affix::unescape(from);
    if unescaped.trim().is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(unescaped.len() * 2);
    let mut literal = String::new();
    let mut in_space = false;

    for ch in unescaped.chars() {
        if ch.is_whitespace() {
            if !in_space {
                pattern.push_str(&regex::escape(&literal));
                literal.clear();
                pattern.push_str(WHITESPACE_RUN);
                in_space = true;
            }
        } else {
            literal.push(ch);
            in_space = false;
        }
    }
    pattern.push_str(&regex::escape(&literal));

    Some(pattern)
}

/// Full pattern source for a cleaned `from` value
pub fn pattern_source(from: &str) -> Option<String> {
    // Case folding stays inside the phrase group: under a global `(?i)` the
    // affix class would also fold to U+212A KELVIN SIGN and U+017F LONG S
    phrase_pattern(from).map(|phrase| format!("({AFFIX_CLASS})((?i:{phrase}))({AFFIX_CLASS})"))
}

/// Compile the search regex for a cleaned `from` value
pub fn build(from: &str) -> Result<Regex> {
    let source = pattern_source(from).ok_or_else(|| MappingError::EmptyFrom {
        raw: from.to_string(),
    })?;
    Regex::new(&source).map_err(|e| MappingError::pattern(from, e))
}
