//! Replacement entry points
//!
//! [`replace_one`] and [`replace_all`] are the simple, infallible surface:
//! an invalid pair is logged and skipped. [`Replacer`] compiles a whole
//! mapping set once for hosts that process many texts.

use crate::error::{MappingError, Result};
use crate::mapping::{MappingSet, RawPair};
use crate::rule::{Applied, Rule};

/// Apply a single raw pair to `text`.
///
/// An invalid pair leaves `text` unchanged and logs a warning.
pub fn replace_one(text: &str, pair: &RawPair) -> String {
    match try_replace_one(text, pair) {
        Ok(applied) => applied.text,
        Err(e) => {
            log::warn!("skipping mapping {:?} -> {:?}: {}", pair.from, pair.to, e);
            text.to_string()
        }
    }
}

/// Apply a single raw pair to `text`, reporting an invalid pair as an error
pub fn try_replace_one(text: &str, pair: &RawPair) -> Result<Applied> {
    Ok(Rule::new(pair)?.apply(text))
}

/// Apply every pair of `mappings` in order, each one to the previous output
pub fn replace_all(text: &str, mappings: &MappingSet) -> String {
    mappings
        .iter()
        .fold(text.to_string(), |acc, pair| replace_one(&acc, pair))
}

/// [`replace_all`] for input that may not be valid UTF-8
pub fn replace_all_bytes(bytes: &[u8], mappings: &MappingSet) -> Vec<u8> {
    Replacer::new(mappings).replace_bytes(bytes).output
}

/// A pair that could not be compiled into a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Position of the pair in its mapping set
    pub index: usize,
    /// The pair as supplied
    pub pair: RawPair,
    /// Why it was rejected
    pub error: MappingError,
}

/// Output of a [`Replacer`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced<T = String> {
    /// The rewritten text
    pub output: T,
    /// Replacements made by each compiled rule, in rule order
    pub per_rule: Vec<usize>,
}

impl<T> Replaced<T> {
    /// Total number of replacements
    pub fn replacements(&self) -> usize {
        self.per_rule.iter().sum()
    }
}

/// A mapping set compiled into rules
///
/// Holds no mutable state, so one replacer can be shared across threads
/// that each process an independent text.
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    rules: Vec<Rule>,
    skipped: Vec<Skipped>,
}

impl Replacer {
    /// Compile every pair, logging and setting aside the invalid ones
    pub fn new(mappings: &MappingSet) -> Self {
        let mut rules = Vec::with_capacity(mappings.len());
        let mut skipped = Vec::new();

        for (index, pair) in mappings.iter().enumerate() {
            match Rule::new(pair) {
                Ok(rule) => rules.push(rule),
                Err(error) => {
                    log::warn!(
                        "skipping mapping #{} {:?} -> {:?}: {}",
                        index + 1,
                        pair.from,
                        pair.to,
                        error
                    );
                    skipped.push(Skipped {
                        index,
                        pair: pair.clone(),
                        error,
                    });
                }
            }
        }

        Self { rules, skipped }
    }

    /// Compiled rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Pairs that were rejected
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Apply every rule in order
    pub fn replace(&self, text: &str) -> Replaced {
        let mut per_rule = Vec::with_capacity(self.rules.len());
        let mut current = text.to_string();

        for rule in &self.rules {
            let applied = rule.apply(&current);
            per_rule.push(applied.replacements);
            current = applied.text;
        }

        Replaced {
            output: current,
            per_rule,
        }
    }

    /// Apply every rule to the valid UTF-8 runs of `bytes`.
    ///
    /// Invalid sequences are copied through untouched and never take part
    /// in a match.
    pub fn replace_bytes(&self, bytes: &[u8]) -> Replaced<Vec<u8>> {
        let mut output = Vec::with_capacity(bytes.len());
        let mut per_rule = vec![0; self.rules.len()];

        for chunk in bytes.utf8_chunks() {
            let valid = chunk.valid();
            if !valid.is_empty() {
                let replaced = self.replace(valid);
                for (total, count) in per_rule.iter_mut().zip(&replaced.per_rule) {
                    *total += count;
                }
                output.extend_from_slice(replaced.output.as_bytes());
            }
            output.extend_from_slice(chunk.invalid());
        }

        Replaced { output, per_rule }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> MappingSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_replace_one_invalid_pair_is_noop() {
        assert_eq!(replace_one("a - b", &RawPair::new("-", "x")), "a - b");
        assert_eq!(replace_one("abc", &RawPair::new("abc", "")), "abc");
    }

    #[test]
    fn test_try_replace_one_surfaces_error() {
        let err = try_replace_one("abc", &RawPair::new("", "x")).unwrap_err();
        assert!(matches!(err, MappingError::EmptyFrom { .. }));

        let applied = try_replace_one("abc", &RawPair::new("xyz", "q")).unwrap();
        assert_eq!(applied.replacements, 0);
    }

    #[test]
    fn test_replace_all_sequential() {
        assert_eq!(replace_all("a", &set(&[("a", "b"), ("b", "c")])), "c");
        assert_eq!(replace_all("a", &set(&[("b", "c"), ("a", "b")])), "b");
    }

    #[test]
    fn test_replacer_matches_replace_all() {
        let mappings = set(&[("colour", "color"), ("-", "x"), ("centre", "center")]);
        let replacer = Replacer::new(&mappings);
        let text = "The Centre's colour";

        let replaced = replacer.replace(text);
        assert_eq!(replaced.output, replace_all(text, &mappings));
        assert_eq!(replaced.output, "The Center's color");
        assert_eq!(replaced.per_rule, vec![1, 1]);
        assert_eq!(replaced.replacements(), 2);
    }

    #[test]
    fn test_replacer_records_skipped() {
        let replacer = Replacer::new(&set(&[("ok", "fine"), ("", "x"), ("y", " ")]));
        assert_eq!(replacer.rules().len(), 1);
        let indices: Vec<usize> = replacer.skipped().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_replace_bytes_preserves_invalid_sequences() {
        let replacer = Replacer::new(&set(&[("foo", "bar")]));
        let input = b"foo \xFF\xFE foo";
        let replaced = replacer.replace_bytes(input);
        assert_eq!(replaced.output, b"bar \xFF\xFE bar".to_vec());
        assert_eq!(replaced.replacements(), 2);
    }

    #[test]
    fn test_replace_bytes_invalid_sequence_breaks_phrase() {
        let replacer = Replacer::new(&set(&[("foo bar", "baz")]));
        let input = b"foo\xFFbar";
        assert_eq!(replacer.replace_bytes(input).output, input.to_vec());
    }

    #[test]
    fn test_replace_all_bytes() {
        let output = replace_all_bytes(b"Foo", &set(&[("foo", "bar")]));
        assert_eq!(output, b"Bar".to_vec());
    }

    #[test]
    fn test_replacer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Replacer>();
    }
}
