//! Compiled rules and the splice loop

use crate::error::Result;
use crate::mapping::{Mapping, RawPair};
use crate::matcher::{self, Match, Matches};
use crate::pattern;
use regex::Regex;

/// A validated mapping together with its compiled search pattern
///
/// Build once, apply to any number of texts.
#[derive(Debug, Clone)]
pub struct Rule {
    mapping: Mapping,
    regex: Regex,
}

/// Result of applying one rule to one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The rewritten text
    pub text: String,
    /// Number of matches replaced
    pub replacements: usize,
}

impl Rule {
    /// Validate a raw pair and compile its pattern
    pub fn new(pair: &RawPair) -> Result<Self> {
        let mapping = Mapping::new(pair)?;
        let regex = pattern::build(mapping.from_phrase())?;
        Ok(Self { mapping, regex })
    }

    /// The validated mapping
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// The compiled search pattern
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Eligible matches in `text`, left to right
    pub fn matches<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        matcher::scan(text, &self.mapping, &self.regex)
    }

    /// Replace every eligible match in `text`
    pub fn apply(&self, text: &str) -> Applied {
        let applied = splice(text, self.matches(text));
        if applied.replacements > 0 {
            log::debug!(
                "{:?} -> {:?}: {} replacement(s)",
                self.mapping.from_phrase(),
                self.mapping.to_phrase(),
                applied.replacements
            );
        }
        applied
    }
}

/// Copy `text` into a new buffer, substituting each match.
///
/// After a match the cursor moves past `end` plus the match's splice offset
/// (counted in characters) and never moves backwards.
pub fn splice<'t>(text: &'t str, matches: impl IntoIterator<Item = Match<'t>>) -> Applied {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut replacements = 0;

    for m in matches {
        if m.start > cursor {
            out.push_str(&text[cursor..m.start]);
        }
        out.push_str(&m.replacement);
        cursor = cursor.max(skip_chars(text, m.end, m.splice_offset));
        replacements += 1;
    }
    out.push_str(&text[cursor..]);

    Applied {
        text: out,
        replacements,
    }
}

/// Byte offset `count` characters after `from`, clamped to the end of `text`
fn skip_chars(text: &str, from: usize, count: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(i, _)| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingError;

    #[test]
    fn test_rule_apply() {
        let rule = Rule::new(&RawPair::new("colour", "color")).unwrap();
        let applied = rule.apply("Colour and COLOUR and colours");
        assert_eq!(applied.text, "Color and COLOR and colours");
        assert_eq!(applied.replacements, 2);
    }

    #[test]
    fn test_rule_rejects_invalid_pair() {
        assert!(matches!(
            Rule::new(&RawPair::new("-", "x")),
            Err(MappingError::EmptyFrom { .. })
        ));
    }

    #[test]
    fn test_apply_without_matches_is_identity() {
        let rule = Rule::new(&RawPair::new("absent", "present")).unwrap();
        let applied = rule.apply("nothing to see here");
        assert_eq!(applied.text, "nothing to see here");
        assert_eq!(applied.replacements, 0);
    }

    #[test]
    fn test_splice_offset_skips_one_character() {
        let rule = Rule::new(&RawPair::new("foo bar", "foobar")).unwrap();
        assert_eq!(rule.apply("foo\nbar next").text, "foobar\nnext");
        // the skipped character may be multibyte
        assert_eq!(rule.apply("foo\nbar\u{3000}next").text, "foobar\nnext");
    }

    #[test]
    fn test_splice_offset_at_end_of_text() {
        let rule = Rule::new(&RawPair::new("foo bar", "foobar")).unwrap();
        assert_eq!(rule.apply("foo\nbar").text, "foobar\n");
    }

    #[test]
    fn test_skip_chars() {
        let text = "aé b";
        assert_eq!(skip_chars(text, 0, 0), 0);
        assert_eq!(skip_chars(text, 1, 1), 3);
        assert_eq!(skip_chars(text, 4, 5), text.len());
        assert_eq!(skip_chars(text, text.len(), 1), text.len());
    }
}
