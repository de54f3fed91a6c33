//! Type-classification predicates.
//!
//! The vocabulary used throughout the crate:
//!
//! - **human**: a string or number — something a person typed or could have
//!   typed into a template slot.
//! - **dust**: a string made of nothing but punctuation and/or whitespace.
//! - **void**: absent, not a string at all, or a string that trims to empty.
//! - **literal**: text that already reads as a script literal and must not be
//!   re-quoted (see [`crate::literal`]).
//!
//! Every predicate is total over [`Value`] and has no side effects.

use crate::{literal, Value};

/// Tests if a value is a type for humans: string or numeric.
///
/// # Examples
///
/// ```rust
/// use jsglue::{is_human, Value};
///
/// assert!(is_human(&Value::from("dj")));
/// assert!(is_human(&Value::from("")));
/// assert!(is_human(&Value::from(0)));
/// assert!(!is_human(&Value::Bool(true)));
/// assert!(!is_human(&Value::Absent));
/// assert!(!is_human(&Value::Array(vec![])));
/// ```
#[must_use]
pub fn is_human(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}

/// Returns the value unchanged if it is human, else the empty string.
///
/// # Examples
///
/// ```rust
/// use jsglue::{humanize, Value};
///
/// assert_eq!(humanize(&Value::from(1000)), Value::from(1000));
/// assert_eq!(humanize(&Value::from("dj")), Value::from("dj"));
/// assert_eq!(humanize(&Value::Bool(true)), Value::from(""));
/// assert_eq!(humanize(&Value::Absent), Value::from(""));
/// ```
#[must_use]
pub fn humanize(value: &Value) -> Value {
    if is_human(value) {
        value.clone()
    } else {
        Value::String(String::new())
    }
}

/// Tests if a value can be used as a split delimiter. Equivalent to
/// [`is_human`] except for the empty string.
///
/// # Examples
///
/// ```rust
/// use jsglue::{can_split, Value};
///
/// assert!(can_split(&Value::from("-")));
/// assert!(can_split(&Value::from(0)));
/// assert!(!can_split(&Value::from("")));
/// assert!(!can_split(&Value::Bool(false)));
/// ```
#[must_use]
pub fn can_split(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) => true,
        _ => false,
    }
}

// The whitespace set substituted before the punctuation test. The two-byte
// "\s" entry is a literal backslash-s substring, not a character class.
const WHITESPACE_SET: [&str; 7] = [" ", "\\s", "\t", "\n", "\r", "\0", "\x0B"];

/// Tests for strings that consist only of punctuation and/or whitespace.
///
/// Non-strings are never dust, and neither is the empty string.
///
/// # Examples
///
/// ```rust
/// use jsglue::{is_dust, Value};
///
/// assert!(is_dust(&Value::from(", ")));
/// assert!(is_dust(&Value::from("--")));
/// assert!(!is_dust(&Value::from("a-b")));
/// assert!(!is_dust(&Value::from("")));
/// assert!(!is_dust(&Value::from(42)));
/// ```
#[must_use]
pub fn is_dust(value: &Value) -> bool {
    let Value::String(s) = value else {
        return false;
    };
    let mut subbed = s.clone();
    for ws in WHITESPACE_SET {
        subbed = subbed.replace(ws, "#");
    }
    !subbed.is_empty() && subbed.chars().all(|c| c.is_ascii_punctuation())
}

/// Tests for empty inputs, pure whitespace, or non-strings.
///
/// Note that numbers, booleans, arrays, and objects all count as void: this
/// is not an "empty string" test, it is a "not a meaningful non-empty
/// string" test.
///
/// # Examples
///
/// ```rust
/// use jsglue::{is_void, Value};
///
/// assert!(is_void(&Value::Absent));
/// assert!(is_void(&Value::from("   ")));
/// assert!(is_void(&Value::from(1000)));
/// assert!(!is_void(&Value::from("dj")));
/// ```
#[must_use]
pub fn is_void(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        _ => true,
    }
}

/// Tests whether a value already reads as a script literal.
///
/// Absent is never a literal; numbers always are; anything else is a literal
/// iff its trimmed string form matches the literal grammar (numeric strings
/// included).
///
/// # Examples
///
/// ```rust
/// use jsglue::{is_literal, Value};
///
/// assert!(is_literal(&Value::from(1.5)));
/// assert!(is_literal(&Value::from("true")));
/// assert!(is_literal(&Value::from("'quoted'")));
/// assert!(is_literal(&Value::from("[1, 2]")));
/// assert!(is_literal(&Value::from("-42")));
/// assert!(!is_literal(&Value::from("dj")));
/// assert!(!is_literal(&Value::Absent));
/// ```
#[must_use]
pub fn is_literal(value: &Value) -> bool {
    match value {
        Value::Absent => false,
        Value::Number(_) => true,
        other => literal::literal_kind(&other.to_string()).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMap;

    #[test]
    fn test_is_human_matrix() {
        assert!(is_human(&Value::from("")));
        assert!(is_human(&Value::from(0)));
        assert!(is_human(&Value::from(1.5)));
        assert!(!is_human(&Value::Bool(true)));
        assert!(!is_human(&Value::Bool(false)));
        assert!(!is_human(&Value::Absent));
        assert!(!is_human(&Value::Array(vec![Value::from(8)])));
        assert!(!is_human(&Value::Object(ValueMap::new())));
    }

    #[test]
    fn test_can_split_tracks_is_human() {
        for v in [
            Value::from(""),
            Value::from("-"),
            Value::from(0),
            Value::Bool(true),
            Value::Absent,
        ] {
            let expected = is_human(&v) && v != Value::from("");
            assert_eq!(can_split(&v), expected, "{:?}", v);
        }
    }

    #[test]
    fn test_dust_whitespace_mix() {
        assert!(is_dust(&Value::from("-- , --")));
        assert!(is_dust(&Value::from("\t.\n")));
        // The literal backslash-s substring counts as whitespace.
        assert!(is_dust(&Value::from("\\s.")));
        assert!(!is_dust(&Value::from(" a ")));
        assert!(!is_dust(&Value::Absent));
    }

    #[test]
    fn test_void_matrix() {
        assert!(is_void(&Value::from("")));
        assert!(is_void(&Value::from(" \t ")));
        assert!(is_void(&Value::Bool(false)));
        assert!(is_void(&Value::Array(vec![])));
        assert!(!is_void(&Value::from("x")));
    }
}
