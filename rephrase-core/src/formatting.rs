//! Case and whitespace preservation
//!
//! Given the text a match covered and the replacement it should become,
//! these functions shape the replacement like the original: all-caps stays
//! all-caps, capitalized words stay capitalized, and the original's
//! whitespace runs (line breaks, indentation) are reused in order.

use crate::mapping::Mapping;
use std::ops::Range;

/// A replacement ready to be spliced in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// Text to emit in place of the match
    pub text: String,
    /// Characters of the source following the match to skip, because
    /// `text` already ends with the whitespace they held
    pub splice_offset: usize,
}

/// Build the raw replacement for a match, carrying affixes as the mapping asks
pub fn candidate(mapping: &Mapping, prefix: &str, suffix: &str) -> String {
    let to = mapping.to_phrase();
    let mut out = String::with_capacity(prefix.len() + to.len() + suffix.len());
    if mapping.keep_prefix() {
        out.push_str(prefix);
    }
    out.push_str(to);
    if mapping.keep_suffix() {
        out.push_str(suffix);
    }
    out
}

/// Shape `candidate` after `original`
pub fn format(original: &str, candidate: &str) -> Formatted {
    if is_formatting_only(original, candidate) {
        match_whitespace(original, candidate)
    } else {
        match_whitespace(original, &match_case(original, candidate))
    }
}

/// Whether the two differ only by case and whitespace
pub fn is_formatting_only(original: &str, candidate: &str) -> bool {
    normalize(original) == normalize(candidate)
}

fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Recase `candidate` after `original`.
///
/// The candidate is lowercased, uppercased entirely if the original is all
/// caps, then each of its words is capitalized when the original word in the
/// same position starts with an uppercase letter.
pub fn match_case(original: &str, candidate: &str) -> String {
    let mut cased = candidate.to_lowercase();
    if is_all_caps(original) {
        cased = cased.to_uppercase();
    }

    let (_, original_words) = tokenize(original);
    let (lead, candidate_words) = tokenize(&cased);

    let mut out = String::with_capacity(cased.len());
    out.push_str(lead);
    for (i, token) in candidate_words.iter().enumerate() {
        match original_words.get(i) {
            Some(orig) if starts_uppercase(orig.word) => out.push_str(&sentence_case(token.word)),
            _ => out.push_str(token.word),
        }
        out.push_str(token.separator);
    }
    out
}

/// Reuse the original's whitespace runs in the candidate.
///
/// When the original has a leftover run holding a line break, it is appended
/// and the splice offset tells the caller to skip the character after the
/// match, so the break is not lost when the replacement is shorter.
pub fn match_whitespace(original: &str, candidate: &str) -> Formatted {
    let original_runs = whitespace_runs(original);
    let candidate_runs = whitespace_runs(candidate);

    let mut text = String::with_capacity(candidate.len() + 1);
    let mut cursor = 0;
    for (orig, cand) in original_runs.iter().zip(&candidate_runs) {
        text.push_str(&candidate[cursor..cand.start]);
        text.push_str(&original[orig.clone()]);
        cursor = cand.end;
    }
    text.push_str(&candidate[cursor..]);

    let mut splice_offset = 0;
    if let Some(run) = original_runs.get(candidate_runs.len()) {
        let run = &original[run.clone()];
        if run.contains('\n') {
            text.push_str(run);
            splice_offset = 1;
        }
    }

    Formatted {
        text,
        splice_offset,
    }
}

/// A run of letters and the non-letters after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    word: &'a str,
    separator: &'a str,
}

/// Split into the non-letter lead and `(word, separator)` tokens
fn tokenize(s: &str) -> (&str, Vec<Token<'_>>) {
    let lead_end = s.find(char::is_alphabetic).unwrap_or(s.len());
    let (lead, mut rest) = s.split_at(lead_end);

    let mut tokens = Vec::new();
    while !rest.is_empty() {
        let word_end = rest
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(rest.len());
        let (word, after) = rest.split_at(word_end);
        let separator_end = after.find(char::is_alphabetic).unwrap_or(after.len());
        let (separator, next) = after.split_at(separator_end);
        tokens.push(Token { word, separator });
        rest = next;
    }
    (lead, tokens)
}

/// Unchanged by uppercasing; characters without case never disqualify
fn is_all_caps(s: &str) -> bool {
    s.to_uppercase() == s
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Uppercase the first letter, leave the rest as is
fn sentence_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn whitespace_runs(s: &str) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, ch) in s.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, None) => start = Some(i),
            (false, Some(begin)) => {
                runs.push(begin..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        runs.push(begin..s.len());
    }
    runs
}
