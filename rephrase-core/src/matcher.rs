//! Match scanning
//!
//! Walks a text with a rule's search pattern and yields the eligible
//! matches left to right, each with its formatted replacement.

use crate::formatting;
use crate::mapping::Mapping;
use crate::pattern::{PREFIX_GROUP, SUFFIX_GROUP, WORD_GROUP};
use regex::{CaptureMatches, Regex};

/// One eligible occurrence of a mapping's phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    /// `prefix + word + suffix` as found in the text
    pub full: &'t str,
    /// The part corresponding to the phrase
    pub word: &'t str,
    /// Alphanumerics glued in front
    pub prefix: &'t str,
    /// Alphanumerics glued behind
    pub suffix: &'t str,
    /// Byte offset of `full`, always on a character boundary
    pub start: usize,
    /// Byte offset just past `full`, always on a character boundary
    pub end: usize,
    /// Text to emit in place of `full`
    pub replacement: String,
    /// Characters after `end` already accounted for by `replacement`
    pub splice_offset: usize,
}

/// Lazy iterator over the eligible matches of one scan
///
/// Matches never overlap: each search resumes after the previous raw match,
/// whether or not that match was eligible.
pub struct Matches<'r, 't> {
    mapping: &'r Mapping,
    captures: CaptureMatches<'r, 't>,
}

/// Scan `text` for the matches of `regex` that `mapping` accepts
pub fn scan<'r, 't>(text: &'t str, mapping: &'r Mapping, regex: &'r Regex) -> Matches<'r, 't> {
    Matches {
        mapping,
        captures: regex.captures_iter(text),
    }
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.captures.by_ref() {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let group = |index: usize| caps.get(index).map_or("", |m| m.as_str());
            let (prefix, word, suffix) = (
                group(PREFIX_GROUP),
                group(WORD_GROUP),
                group(SUFFIX_GROUP),
            );

            if !self.mapping.accepts(prefix, suffix) {
                log::trace!(
                    "rejected {:?} at {}: affixes not allowed for {:?}",
                    whole.as_str(),
                    whole.start(),
                    self.mapping.from_phrase()
                );
                continue;
            }

            let candidate = formatting::candidate(self.mapping, prefix, suffix);
            let formatted = formatting::format(whole.as_str(), &candidate);

            return Some(Match {
                full: whole.as_str(),
                word,
                prefix,
                suffix,
                start: whole.start(),
                end: whole.end(),
                replacement: formatted.text,
                splice_offset: formatted.splice_offset,
            });
        }
        None
    }
}
