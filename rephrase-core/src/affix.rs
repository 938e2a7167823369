//! Affix marker notation
//!
//! A raw mapping value may start and/or end with `-` to declare that the
//! phrase can be glued to other alphanumeric characters: `-ize` matches
//! "realize", `un-` matches "undo". A hyphen that is part of the phrase is
//! written `\-`, and a literal backslash `\\`.

use std::borrow::Cow;

/// The affix marker character
pub const MARKER: char = '-';

const ESCAPED_MARKER: &str = "\\-";

/// A raw mapping value split into its markers and the remaining value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affixed<'a> {
    /// Value with the active markers removed (escapes untouched)
    pub value: &'a str,
    /// Whether an unescaped leading `-` was present
    pub leading: bool,
    /// Whether an unescaped trailing `-` was present
    pub trailing: bool,
}

/// True iff `s` starts with an active marker.
///
/// An escaped marker starts with the backslash, so it never qualifies.
pub fn has_leading_marker(s: &str) -> bool {
    s.starts_with(MARKER)
}

/// True iff `s` ends with `-` that is not preceded by a backslash.
///
/// Only one level of escaping is recognized: `\\-` still counts as an
/// escaped marker.
pub fn has_trailing_marker(s: &str) -> bool {
    s.ends_with(MARKER) && !s.ends_with(ESCAPED_MARKER)
}

/// Split a raw mapping value into markers and value.
///
/// `"-"` has no markers and an empty value. When removing the trailing
/// marker would consume the last character left after the leading one
/// (`"--"`), that character stays as a literal hyphen.
pub fn parse(s: &str) -> Affixed<'_> {
    let leading = has_leading_marker(s);
    let rest = if leading { &s[MARKER.len_utf8()..] } else { s };

    if rest.is_empty() {
        return Affixed {
            value: rest,
            leading: false,
            trailing: false,
        };
    }

    let trailing = has_trailing_marker(rest) && rest.len() > MARKER.len_utf8();
    let value = if trailing {
        &rest[..rest.len() - MARKER.len_utf8()]
    } else {
        rest
    };

    Affixed {
        value,
        leading,
        trailing,
    }
}

/// Remove the active markers from `s`, leaving escapes in place
pub fn strip(s: &str) -> &str {
    parse(s).value
}

/// Decode mapping escapes: `\\` becomes `\`, then `\-` becomes `-`
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\\\\", "\\").replace(ESCAPED_MARKER, "-"))
}
