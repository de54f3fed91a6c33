//! Data-to-script and data-to-JSON conversion.
//!
//! These converters compose the joiner, padder, and literal modules into the
//! operation template authors actually want: hand over an array or object,
//! get back a fragment of script-literal text. Strings are quoted; strings
//! that already read as literals (numbers, booleans, nested structures,
//! function blobs) come back out unquoted via [`unquote`].

use crate::{
    affix, bump, is_valid_id, mirror, to_array, unquote, Error, Grouping, QuoteStyle, Result,
    Value, ValueMap,
};
use tracing::warn;

/// Converts an array or object into a script-literal string.
///
/// With [`Grouping::Object`] the keys of an object (or the indices of an
/// array) become property names: `{name: "Alice", id: 7}`. With
/// [`Grouping::Array`] the values are emitted in order: `["a", 1, true]`.
/// Either way, strings representing literals such as functions, `[arrays]`,
/// `{objects}`, numbers, `true`, `undefined`, `false`, and `null` are not
/// quoted.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] (and emits a warning) when `data` is
/// not an array or object.
///
/// # Examples
///
/// ```rust
/// use jsglue::{data_to_script, value, Grouping, QuoteStyle};
///
/// let arr = value!(["dance", 1, "true"]);
/// assert_eq!(
///     data_to_script(&arr, Grouping::Array, QuoteStyle::Double).unwrap(),
///     r#"["dance", 1, true]"#
/// );
///
/// let obj = value!({"name": "Alice", "id": 7});
/// assert_eq!(
///     data_to_script(&obj, Grouping::Object, QuoteStyle::Double).unwrap(),
///     r#"{name: "Alice", id: 7}"#
/// );
/// ```
pub fn data_to_script(data: &Value, grouping: Grouping, quote: QuoteStyle) -> Result<String> {
    if !(data.is_array() || data.is_object()) {
        warn!("data_to_script requires an array or object");
        return Err(Error::invalid_argument(
            "data_to_script requires an array or object",
        ));
    }

    let q = quote.as_char();

    let entries: Vec<Value> = match grouping {
        Grouping::Object => {
            // The separator carries the opening quote and the closing quote
            // is appended after the value, so every value comes out quoted;
            // unquote below repairs the ones that shouldn't be.
            let separator = Value::String(format!(": {q}"));
            let closing = Value::String(q.to_string());
            match data {
                Value::Object(map) => bump(map, &separator, &closing, &Value::Bool(false)),
                Value::Array(items) => {
                    let indexed: ValueMap = items
                        .iter()
                        .enumerate()
                        .map(|(i, v)| (i.to_string(), v.clone()))
                        .collect();
                    bump(&indexed, &separator, &closing, &Value::Bool(false))
                }
                _ => Vec::new(),
            }
        }
        Grouping::Array => {
            let quote_mark = Value::String(q.to_string());
            let items = Value::Array(to_array(data, &Value::Bool(false)));
            match affix(&items, &quote_mark, &quote_mark) {
                Value::Array(entries) => entries,
                _ => Vec::new(),
            }
        }
    };

    let body = entries
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let open = grouping.open();
    Ok(unquote(&format!("{}{}{}", open, body, mirror(open))))
}

/// Multidimensional version of [`data_to_script`].
///
/// `groupings[d]` selects the emission style at nesting depth `d`. Nested
/// containers convert innermost-first; containers deeper than the grouping
/// list fall back to array emission.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `data` is not a container or
/// `groupings` is empty.
///
/// # Examples
///
/// ```rust
/// use jsglue::{nested_to_script, value, Grouping, QuoteStyle};
///
/// let rows = value!([["a", 1], ["b", 2]]);
/// assert_eq!(
///     nested_to_script(&rows, &[Grouping::Array, Grouping::Array], QuoteStyle::Double).unwrap(),
///     r#"[["a", 1], ["b", 2]]"#
/// );
///
/// let tree = value!({"point": {"x": 1, "y": 2}});
/// assert_eq!(
///     nested_to_script(&tree, &[Grouping::Object, Grouping::Object], QuoteStyle::Double)
///         .unwrap(),
///     r#"{point: {x: 1, y: 2}}"#
/// );
/// ```
pub fn nested_to_script(
    data: &Value,
    groupings: &[Grouping],
    quote: QuoteStyle,
) -> Result<String> {
    if !(data.is_array() || data.is_object()) {
        warn!("nested_to_script requires an array or object");
        return Err(Error::invalid_argument(
            "nested_to_script requires an array or object",
        ));
    }
    if groupings.is_empty() {
        warn!("nested_to_script requires at least one grouping, such as [Object, Array]");
        return Err(Error::invalid_argument(
            "nested_to_script requires at least one grouping",
        ));
    }

    convert_level(data, groupings, quote)
}

fn convert_level(data: &Value, groupings: &[Grouping], quote: QuoteStyle) -> Result<String> {
    let converted = convert_children(data, &groupings[1..], quote)?;
    data_to_script(&converted, groupings[0], quote)
}

// Replaces nested containers with their converted script text, so the outer
// pass sees them as literal-reading strings and unquote leaves them bare.
fn convert_children(data: &Value, rest: &[Grouping], quote: QuoteStyle) -> Result<Value> {
    let deeper = |child: &Value| -> Result<Value> {
        if child.is_array() || child.is_object() {
            let groupings = if rest.is_empty() {
                &[Grouping::Array][..]
            } else {
                rest
            };
            Ok(Value::String(convert_level(child, groupings, quote)?))
        } else {
            Ok(child.clone())
        }
    };

    match data {
        Value::Array(items) => Ok(Value::Array(
            items.iter().map(deeper).collect::<Result<Vec<_>>>()?,
        )),
        Value::Object(map) => Ok(Value::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), deeper(v)?)))
                .collect::<Result<ValueMap>>()?,
        )),
        other => Ok(other.clone()),
    }
}

/// Converts data to JSON, optionally wrapped for an HTML attribute.
///
/// When `attr` is a valid identifier the result is `attr='<json>'`; any
/// other `attr` (or none) yields the bare JSON.
///
/// # Errors
///
/// Returns [`Error::Json`] when encoding fails.
///
/// # Examples
///
/// ```rust
/// use jsglue::{data_to_json, value};
///
/// let data = value!({"id": 7, "tags": ["a", "b"]});
/// assert_eq!(
///     data_to_json(&data, None).unwrap(),
///     r#"{"id":7,"tags":["a","b"]}"#
/// );
/// assert_eq!(
///     data_to_json(&data, Some("data-config")).unwrap(),
///     r#"data-config='{"id":7,"tags":["a","b"]}'"#
/// );
/// ```
pub fn data_to_json(data: &Value, attr: Option<&str>) -> Result<String> {
    let json = serde_json::to_string(data).map_err(Error::json)?;
    match attr {
        Some(name) if is_valid_id(&Value::from(name)) => Ok(format!("{name}='{json}'")),
        _ => Ok(json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_array_emission_unquotes_literals() {
        let arr = value!(["x", "null", "-1.5", "[1]"]);
        assert_eq!(
            data_to_script(&arr, Grouping::Array, QuoteStyle::Single).unwrap(),
            "['x', null, -1.5, [1]]"
        );
    }

    #[test]
    fn test_object_emission_from_array_uses_indices() {
        let arr = value!(["a", 1]);
        assert_eq!(
            data_to_script(&arr, Grouping::Object, QuoteStyle::Double).unwrap(),
            r#"{0: "a", 1: 1}"#
        );
    }

    #[test]
    fn test_object_grouping_over_object_values() {
        // The function blob goes last: the blob rule's trailing wildcard is
        // greedy and can span across a following quoted entry (see the
        // grammar module).
        let obj = value!({"n": "42", "fn": "function() { go(); }"});
        assert_eq!(
            data_to_script(&obj, Grouping::Object, QuoteStyle::Double).unwrap(),
            "{n: 42, fn: function() { go(); }}"
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(data_to_script(&Value::from("x"), Grouping::Array, QuoteStyle::Double).is_err());
        assert!(nested_to_script(&value!([1]), &[], QuoteStyle::Double).is_err());
        assert!(nested_to_script(&Value::Absent, &[Grouping::Array], QuoteStyle::Double).is_err());
    }

    #[test]
    fn test_nested_mixed_groupings() {
        let data = value!({"rows": [1, "two"]});
        assert_eq!(
            nested_to_script(&data, &[Grouping::Object, Grouping::Array], QuoteStyle::Double)
                .unwrap(),
            r#"{rows: [1, "two"]}"#
        );
    }

    #[test]
    fn test_nested_defaults_to_array_beyond_groupings() {
        let data = value!([[1, 2], [3]]);
        assert_eq!(
            nested_to_script(&data, &[Grouping::Array], QuoteStyle::Double).unwrap(),
            "[[1, 2], [3]]"
        );
    }

    #[test]
    fn test_json_attr_wrapping() {
        let data = value!([1, 2]);
        assert_eq!(data_to_json(&data, Some("7bad")).unwrap(), "[1,2]");
        assert_eq!(data_to_json(&data, Some("ok_id")).unwrap(), "ok_id='[1,2]'");
    }
}
