//! Mapping data model
//!
//! [`RawPair`] and [`MappingSet`] carry mapping values exactly as supplied
//! by a parser or caller. [`Mapping`] is the validated form with the affix
//! flags decoded.

use crate::affix;
use crate::error::{MappingError, Result};

/// One `(from, to)` pair as supplied, markers and escapes included
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPair {
    /// Phrase to search for
    pub from: String,
    /// Phrase to substitute
    pub to: String,
}

impl RawPair {
    /// Create a new raw pair
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same pair applied in the `to -> from` direction
    pub fn inverted(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl<F: Into<String>, T: Into<String>> From<(F, T)> for RawPair {
    fn from((from, to): (F, T)) -> Self {
        Self::new(from, to)
    }
}

/// Ordered collection of raw pairs
///
/// Pairs are applied in insertion order and duplicates are kept: a later
/// pair sees the text already rewritten by earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MappingSet {
    pairs: Vec<RawPair>,
}

impl MappingSet {
    /// Create an empty mapping set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair
    pub fn push(&mut self, pair: impl Into<RawPair>) {
        self.pairs.push(pair.into());
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in application order
    pub fn iter(&self) -> std::slice::Iter<'_, RawPair> {
        self.pairs.iter()
    }

    /// Swap every pair, keeping the order
    pub fn inverted(&self) -> Self {
        self.pairs.iter().map(RawPair::inverted).collect()
    }

    /// Borrow the pairs as a slice
    pub fn as_slice(&self) -> &[RawPair] {
        &self.pairs
    }
}

impl<P: Into<RawPair>> FromIterator<P> for MappingSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<RawPair>> Extend<P> for MappingSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.pairs.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a RawPair;
    type IntoIter = std::slice::Iter<'a, RawPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for MappingSet {
    type Item = RawPair;
    type IntoIter = std::vec::IntoIter<RawPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// A validated replacement rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    from: String,
    to: String,
    prefix_allowed: bool,
    suffix_allowed: bool,
    keep_prefix: bool,
    keep_suffix: bool,
}

impl Mapping {
    /// Decode and validate a raw pair.
    ///
    /// `from` keeps its escapes (the pattern builder decodes them); `to` is
    /// decoded here since it is emitted verbatim.
    pub fn new(pair: &RawPair) -> Result<Self> {
        let from = affix::parse(pair.from.trim());
        let to = affix::parse(pair.to.trim());

        let from_value = from.value.trim();
        if from_value.is_empty() || affix::unescape(from_value).trim().is_empty() {
            return Err(MappingError::EmptyFrom {
                raw: pair.from.clone(),
            });
        }
        // U+FFFD is what lossy decoding leaves behind for bytes that were not text
        if from_value.contains(char::REPLACEMENT_CHARACTER) {
            return Err(MappingError::UnsafeText {
                raw: pair.from.clone(),
            });
        }

        let to_value = affix::unescape(to.value.trim()).into_owned();
        if to_value.trim().is_empty() {
            return Err(MappingError::EmptyTo {
                from: from_value.to_string(),
            });
        }

        Ok(Self {
            from: from_value.to_string(),
            to: to_value,
            prefix_allowed: from.leading,
            suffix_allowed: from.trailing,
            keep_prefix: to.leading || from.leading,
            keep_suffix: to.trailing || from.trailing,
        })
    }

    /// Cleaned `from` value, escapes still present
    pub fn from_phrase(&self) -> &str {
        &self.from
    }

    /// Decoded `to` value
    pub fn to_phrase(&self) -> &str {
        &self.to
    }

    /// Whether a match may have alphanumerics glued in front
    pub fn prefix_allowed(&self) -> bool {
        self.prefix_allowed
    }

    /// Whether a match may have alphanumerics glued behind
    pub fn suffix_allowed(&self) -> bool {
        self.suffix_allowed
    }

    /// Whether the matched prefix is carried into the replacement
    pub fn keep_prefix(&self) -> bool {
        self.keep_prefix
    }

    /// Whether the matched suffix is carried into the replacement
    pub fn keep_suffix(&self) -> bool {
        self.keep_suffix
    }

    /// Whether a match with these affixes is eligible
    pub fn accepts(&self, prefix: &str, suffix: &str) -> bool {
        (prefix.is_empty() || self.prefix_allowed) && (suffix.is_empty() || self.suffix_allowed)
    }
}
