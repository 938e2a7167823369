//! Case- and whitespace-preserving phrase replacement
//!
//! Each mapping pair rewrites one word or phrase into another. Matches are
//! found case-insensitively and regardless of the whitespace between words,
//! and every replacement is reshaped after the text it replaces:
//!
//! - all-caps text gets an all-caps replacement, capitalized words get
//!   capitalized replacements
//! - line breaks and indentation inside a matched phrase are carried over
//!
//! Mapping values use a small affix notation: a leading or trailing `-`
//! lets the phrase match inside a longer alphanumeric run (`-ize` matches
//! "realize"), and `\-` is a literal hyphen.
//!
//! # Example
//!
//! ```rust
//! use rephrase_core::{replace_all, MappingSet};
//!
//! let mappings: MappingSet = vec![("colour", "color"), ("-ise-", "-ize-")]
//!     .into_iter()
//!     .collect();
//!
//! let text = "They Realised the COLOUR was off.";
//! assert_eq!(
//!     replace_all(text, &mappings),
//!     "They Realized the COLOR was off."
//! );
//! ```
//!
//! Mapping pairs are applied one after another, in the order given, each
//! to the output of the previous one.

#![warn(missing_docs)]

pub mod affix;
pub mod error;
pub mod formatting;
pub mod mapping;
pub mod matcher;
pub mod pattern;
pub mod replacer;
pub mod rule;

pub use error::{MappingError, Result};
pub use formatting::Formatted;
pub use mapping::{Mapping, MappingSet, RawPair};
pub use matcher::{Match, Matches};
pub use replacer::{
    replace_all, replace_all_bytes, replace_one, try_replace_one, Replaced, Replacer, Skipped,
};
pub use rule::{Applied, Rule};
