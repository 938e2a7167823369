//! Mapping error types
//!
//! Every error here describes a single mapping pair that cannot be turned
//! into a usable rule. None of them is fatal for a whole run: the driver
//! logs the error and leaves the text untouched for that pair.

use thiserror::Error;

/// Reasons a raw `(from, to)` pair cannot become a rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// `from` is empty once markers are stripped and whitespace trimmed
    #[error("empty 'from' value in mapping {raw:?}")]
    EmptyFrom {
        /// The raw `from` string as supplied
        raw: String,
    },

    /// `to` is empty once markers are stripped and whitespace trimmed
    #[error("empty 'to' value in mapping for {from:?}")]
    EmptyTo {
        /// The cleaned `from` value of the rejected pair
        from: String,
    },

    /// `from` contains characters that cannot be matched as text
    #[error("'from' value {raw:?} is not text-safe")]
    UnsafeText {
        /// The raw `from` string as supplied
        raw: String,
    },

    /// The search pattern could not be compiled
    #[error("cannot build pattern for {from:?}: {reason}")]
    Pattern {
        /// The cleaned `from` value of the rejected pair
        from: String,
        /// Compiler message
        reason: String,
    },
}

impl MappingError {
    /// Build a pattern error from a regex compilation failure
    pub(crate) fn pattern(from: &str, err: regex::Error) -> Self {
        MappingError::Pattern {
            from: from.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type for mapping construction
pub type Result<T> = std::result::Result<T, MappingError>;
