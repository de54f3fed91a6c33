//! Padding and literal-aware quoting.

use crate::bracket;
use crate::{humanize, is_human, is_literal, Value};

/// Pads a human value with `left` and `right`. Inputs that aren't strings or
/// numbers are returned as is.
///
/// `left` is humanized first. When `right` is anything but `Bool(true)` it
/// is humanized and appended verbatim. When `right` is `Bool(true)` and
/// `left` contains opening brackets, the right side mirrors `left` in
/// reverse; otherwise the right side repeats `left`.
///
/// # Examples
///
/// ```rust
/// use jsglue::{pad, Value};
///
/// let t = Value::Bool(true);
/// assert_eq!(pad(&Value::from("x"), &Value::from("(["), &t), Value::from("([x])"));
/// assert_eq!(pad(&Value::from("x"), &Value::from("*"), &t), Value::from("*x*"));
/// assert_eq!(
///     pad(&Value::from("x"), &Value::from("<"), &Value::from(" />")),
///     Value::from("<x />")
/// );
/// assert_eq!(pad(&Value::Bool(true), &Value::from("("), &t), Value::Bool(true));
/// ```
#[must_use]
pub fn pad(value: &Value, left: &Value, right: &Value) -> Value {
    if !is_human(value) {
        return value.clone();
    }

    let left = humanize(left).to_string();

    let padded = match right {
        Value::Bool(true) => {
            if left.chars().any(bracket::is_opening) {
                // Match opening brackets with their closing counterparts.
                format!("{}{}{}", left, value, bracket::mirrored_reverse(&left))
            } else {
                format!("{}{}{}", left, value, left)
            }
        }
        other => format!("{}{}{}", left, value, humanize(other)),
    };

    Value::String(padded)
}

/// Element-wise [`pad`] over an array. Non-arrays pass through unchanged,
/// and non-human elements are skipped by `pad`'s own guard, so mixed arrays
/// are safe.
///
/// # Examples
///
/// ```rust
/// use jsglue::{affix, Value};
///
/// let arr = Value::Array(vec![Value::from("a"), Value::Bool(true), Value::from(2)]);
/// let out = affix(&arr, &Value::from("["), &Value::Bool(true));
/// assert_eq!(
///     out,
///     Value::Array(vec![Value::from("[a]"), Value::Bool(true), Value::from("[2]")])
/// );
/// ```
#[must_use]
pub fn affix(values: &Value, left: &Value, right: &Value) -> Value {
    match values {
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| pad(v, left, right)).collect())
        }
        other => other.clone(),
    }
}

/// Quotes a string, except ones not meant to be quoted in JavaScript.
///
/// Non-strings and literal-reading strings (see [`is_literal`]) pass through
/// unchanged. Any existing run of `mark` at either end is trimmed before
/// wrapping, so the operation is idempotent.
///
/// # Examples
///
/// ```rust
/// use jsglue::{quote, Value};
///
/// assert_eq!(quote(&Value::from("dj"), '"'), Value::from("\"dj\""));
/// assert_eq!(quote(&Value::from("\"dj\""), '"'), Value::from("\"dj\""));
/// assert_eq!(quote(&Value::from("true"), '"'), Value::from("true"));
/// assert_eq!(quote(&Value::from(1000), '"'), Value::from(1000));
/// ```
#[must_use]
pub fn quote(code: &Value, mark: char) -> Value {
    match code {
        Value::String(s) if !is_literal(code) => {
            let trimmed = s.trim_matches(mark);
            Value::String(format!("{mark}{trimmed}{mark}"))
        }
        other => other.clone(),
    }
}
