//! Array conversion, merging, and joining.
//!
//! These helpers exist so the converters can accept mixed inputs: a caller
//! may hand over a delimited string, a single scalar, an array, or an object
//! and get consistent sequence behavior out of all of them.

use crate::{bracket, can_split, humanize, is_dust, is_human, Error, Result, Value, ValueMap};
use std::collections::HashSet;
use tracing::warn;

/// Converts anything to a sequence.
///
/// A human value with a splittable delimiter is split on it. Otherwise:
/// absent becomes an empty sequence, an array stays as is, an object yields
/// its values in insertion order, and any other scalar becomes a one-element
/// sequence.
///
/// # Examples
///
/// ```rust
/// use jsglue::{to_array, Value};
///
/// let none = Value::Bool(false);
/// assert_eq!(to_array(&Value::from("abc"), &none), vec![Value::from("abc")]);
/// assert_eq!(
///     to_array(&Value::from("abc"), &Value::from("b")),
///     vec![Value::from("a"), Value::from("c")]
/// );
/// assert_eq!(to_array(&Value::Absent, &none), vec![]);
/// ```
#[must_use]
pub fn to_array(value: &Value, delimiter: &Value) -> Vec<Value> {
    if is_human(value) && can_split(delimiter) {
        let text = value.to_string();
        let delim = delimiter.to_string();
        return text
            .split(delim.as_str())
            .map(|part| Value::String(part.to_string()))
            .collect();
    }

    match value {
        Value::Absent => Vec::new(),
        Value::Array(items) => items.clone(),
        Value::Object(map) => map.values().cloned().collect(),
        other => vec![other.clone()],
    }
}

/// Predicate-gated map: applies `transform` to each element on which `test`
/// returns true; elements failing the test pass through unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] (and emits a warning) when `values` is
/// not an array — we want callers to know they're doing it wrong and why.
///
/// # Examples
///
/// ```rust
/// use jsglue::{filter_map, Value};
///
/// let arr = Value::Array(vec![Value::from(" a "), Value::from(1)]);
/// let out = filter_map(Value::is_string, |v| Value::from(v.to_string().trim()), &arr);
/// assert_eq!(out.unwrap(), vec![Value::from("a"), Value::from(1)]);
///
/// assert!(filter_map(Value::is_string, |v| v.clone(), &Value::from("nope")).is_err());
/// ```
pub fn filter_map<P, F>(test: P, transform: F, values: &Value) -> Result<Vec<Value>>
where
    P: Fn(&Value) -> bool,
    F: Fn(&Value) -> Value,
{
    let Value::Array(items) = values else {
        warn!("filter_map requires an array of values");
        return Err(Error::invalid_argument(
            "filter_map requires an array of values",
        ));
    };

    Ok(items
        .iter()
        .map(|v| if test(v) { transform(v) } else { v.clone() })
        .collect())
}

/// Trims every string element and removes falsy values: absent, `false`,
/// whitespace-only strings, `""`, `"0"`, and numeric zero.
///
/// # Examples
///
/// ```rust
/// use jsglue::{compact, Value};
///
/// let values = vec![
///     Value::from(" "),
///     Value::from("a"),
///     Value::from(""),
///     Value::Absent,
///     Value::Bool(false),
///     Value::from("b "),
/// ];
/// assert_eq!(compact(&values), vec![Value::from("a"), Value::from("b")]);
/// ```
#[must_use]
pub fn compact(values: &[Value]) -> Vec<Value> {
    let trimmed = filter_map(
        Value::is_string,
        |v| Value::String(v.to_string().trim().to_string()),
        &Value::Array(values.to_vec()),
    )
    .unwrap_or_default();

    trimmed.into_iter().filter(Value::is_truthy).collect()
}

/// Converts every argument to a sequence and concatenates them in argument
/// order. When the first argument is dust (pure punctuation/whitespace) it is
/// removed from the list and used as the split delimiter for the rest.
///
/// # Examples
///
/// ```rust
/// use jsglue::{merge_all, Value};
///
/// let merged = merge_all(&[
///     Value::from("-"),
///     Value::from("a-b"),
///     Value::Array(vec![Value::from("c")]),
/// ]);
/// assert_eq!(
///     merged,
///     vec![Value::from("a"), Value::from("b"), Value::from("c")]
/// );
/// ```
#[must_use]
pub fn merge_all(args: &[Value]) -> Vec<Value> {
    let (delimiter, rest) = match args.first() {
        Some(first) if is_dust(first) => (first.clone(), &args[1..]),
        _ => (Value::Bool(false), args),
    };

    rest.iter()
        .flat_map(|arg| to_array(arg, &delimiter))
        .collect()
}

/// Converts, merges, compacts, and de-duplicates the arguments, then joins
/// them into a string connected by `glue`.
///
/// The glue doubles as the split delimiter for string arguments, so
/// `join_unique("-", ...)` merges `"a-b"` piecewise. First occurrence wins;
/// order is preserved.
///
/// # Examples
///
/// ```rust
/// use jsglue::{join_unique, Value};
///
/// let joined = join_unique(
///     &Value::from("-"),
///     &[
///         Value::from("a-b"),
///         Value::Array(vec![Value::from("b"), Value::from("c")]),
///     ],
/// );
/// assert_eq!(joined, "a-b-c");
/// ```
#[must_use]
pub fn join_unique(glue: &Value, args: &[Value]) -> String {
    let glue = humanize(glue);
    let glue_text = glue.to_string();

    let merged: Vec<Value> = args.iter().flat_map(|arg| to_array(arg, &glue)).collect();
    let compacted = compact(&merged);

    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for value in compacted {
        let key = value.to_string();
        if seen.insert(key.clone()) {
            unique.push(key);
        }
    }

    unique.join(&glue_text)
}

// Resolves a bump edge: `Bool(true)` engages the bracket mirror when the
// separator's edge character is a bracket, and adds nothing otherwise; any
// other setting is humanized text.
fn bump_edge(setting: &Value, edge: Option<char>) -> String {
    match setting {
        Value::Bool(true) => edge
            .filter(|c| bracket::is_bracket(*c))
            .map(|c| bracket::mirror(c).to_string())
            .unwrap_or_default(),
        other => humanize(other).to_string(),
    }
}

/// Converts a key/value mapping into a sequence of
/// `before + key + separator + value + after` strings, insertion order
/// preserved.
///
/// The separator resets to `""` unless it is a splittable human value. When
/// `before` is `Bool(true)` it defaults to the mirror of the separator's
/// first character (brackets only); `after` defaults the same way from the
/// last character.
///
/// # Examples
///
/// ```rust
/// use jsglue::{bump, Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert("foo".to_string(), Value::from("1"));
/// map.insert("bar".to_string(), Value::from("2"));
///
/// let out = bump(&map, &Value::from(": "), &Value::Bool(true), &Value::Bool(false));
/// assert_eq!(out, vec![Value::from("foo: 1"), Value::from("bar: 2")]);
///
/// // A bracket separator closes itself on the other side.
/// let out = bump(&map, &Value::from("["), &Value::Bool(true), &Value::Bool(false));
/// assert_eq!(out, vec![Value::from("foo[1]"), Value::from("bar[2]")]);
/// ```
#[must_use]
pub fn bump(map: &ValueMap, separator: &Value, after: &Value, before: &Value) -> Vec<Value> {
    let separator = if can_split(separator) {
        separator.to_string()
    } else {
        String::new()
    };

    let first = separator.chars().next();
    let last = separator.chars().last();

    let before = bump_edge(before, first);
    let after = bump_edge(after, last);

    map.iter()
        .map(|(key, value)| {
            Value::String(format!("{}{}{}{}{}", before, key, separator, value, after))
        })
        .collect()
}

/// [`bump`], then join the pieces with `glue`.
///
/// # Examples
///
/// ```rust
/// use jsglue::{bump_join, Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert("a".to_string(), Value::from(1));
/// map.insert("b".to_string(), Value::from(2));
///
/// let joined = bump_join(
///     &Value::from(", "),
///     &map,
///     &Value::from("="),
///     &Value::Bool(false),
///     &Value::Bool(false),
/// );
/// assert_eq!(joined, "a=1, b=2");
/// ```
#[must_use]
pub fn bump_join(
    glue: &Value,
    map: &ValueMap,
    separator: &Value,
    after: &Value,
    before: &Value,
) -> String {
    let glue = humanize(glue).to_string();
    bump(map, separator, after, before)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(&glue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(parts: &[&str]) -> Vec<Value> {
        parts.iter().map(|p| Value::from(*p)).collect()
    }

    #[test]
    fn test_to_array_split_vs_cast() {
        assert_eq!(
            to_array(&Value::from("abc"), &Value::from("b")),
            strings(&["a", "c"])
        );
        // Number delimiters split on their decimal form.
        assert_eq!(
            to_array(&Value::from("1203"), &Value::from(2)),
            strings(&["1", "03"])
        );
        assert_eq!(
            to_array(&Value::Bool(false), &Value::Bool(false)),
            vec![Value::Bool(false)]
        );
        let mut map = ValueMap::new();
        map.insert("k".to_string(), Value::from("v"));
        assert_eq!(
            to_array(&Value::Object(map), &Value::Bool(false)),
            strings(&["v"])
        );
    }

    #[test]
    fn test_filter_map_extra_state() {
        // Extra transform parameters ride along in the closure.
        let suffix = "!";
        let arr = Value::Array(strings(&["a", "b"]));
        let out = filter_map(
            Value::is_string,
            |v| Value::String(format!("{}{}", v, suffix)),
            &arr,
        )
        .unwrap();
        assert_eq!(out, strings(&["a!", "b!"]));
    }

    #[test]
    fn test_compact_drops_falsy() {
        let input = vec![
            Value::from(" "),
            Value::from("a"),
            Value::from("0"),
            Value::from(0),
            Value::Absent,
            Value::Bool(false),
            Value::from(" b "),
        ];
        assert_eq!(compact(&input), strings(&["a", "b"]));
    }

    #[test]
    fn test_merge_all_without_dust() {
        // A non-dust first argument is data, not a delimiter.
        let merged = merge_all(&[Value::from("ab"), Value::from("cd")]);
        assert_eq!(merged, strings(&["ab", "cd"]));
    }

    #[test]
    fn test_join_unique_dedupes_across_args() {
        let joined = join_unique(
            &Value::from(","),
            &[Value::from("a,b,a"), Value::from("b"), Value::from(1)],
        );
        assert_eq!(joined, "a,b,1");
    }

    #[test]
    fn test_join_unique_empty_glue_concatenates() {
        let joined = join_unique(&Value::from(""), &[Value::from("ab"), Value::from("cd")]);
        assert_eq!(joined, "abcd");
    }

    #[test]
    fn test_bump_explicit_edges() {
        let mut map = ValueMap::new();
        map.insert("id".to_string(), Value::from(7));
        let out = bump(
            &map,
            &Value::from("="),
            &Value::from(";"),
            &Value::from("  "),
        );
        assert_eq!(out, vec![Value::from("  id=7;")]);
    }

    #[test]
    fn test_bump_empty_separator() {
        let mut map = ValueMap::new();
        map.insert("k".to_string(), Value::from("v"));
        // An unsplittable separator resets to "" and the true defaults add
        // nothing.
        let out = bump(
            &map,
            &Value::Bool(false),
            &Value::Bool(true),
            &Value::Bool(true),
        );
        assert_eq!(out, vec![Value::from("kv")]);
    }
}
