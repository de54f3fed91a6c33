//! Identifier validation and variable-name normalization.

use crate::{is_void, CaseStyle, Value};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // First char must be letter or underscore; the rest may add digits and,
    // for identifiers, dashes.
    static ref ID: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*$").unwrap();
    static ref VAR_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref SEGMENT_SPLIT: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Tests if a string is a valid identifier for data keys, CSS classes, or
/// similar purposes: letters, digits, dashes, underscores, not starting with
/// a digit or dash.
///
/// # Examples
///
/// ```rust
/// use jsglue::{is_valid_id, Value};
///
/// assert!(is_valid_id(&Value::from("yes_or_no")));
/// assert!(is_valid_id(&Value::from("_House800")));
/// assert!(is_valid_id(&Value::from("data-r480")));
/// assert!(!is_valid_id(&Value::from("7seconds")));
/// assert!(!is_valid_id(&Value::from("yes&no")));
/// assert!(!is_valid_id(&Value::from("")));
/// assert!(!is_valid_id(&Value::from(1000)));
/// ```
#[must_use]
pub fn is_valid_id(value: &Value) -> bool {
    !is_void(value) && value.as_str().is_some_and(|s| ID.is_match(s))
}

/// Tests if a string is an allowed name for a script variable. Same as
/// [`is_valid_id`] but without dashes.
///
/// # Examples
///
/// ```rust
/// use jsglue::{is_valid_var_name, Value};
///
/// assert!(is_valid_var_name(&Value::from("snake_case")));
/// assert!(!is_valid_var_name(&Value::from("data-r480")));
/// ```
#[must_use]
pub fn is_valid_var_name(value: &Value) -> bool {
    !is_void(value) && value.as_str().is_some_and(|s| VAR_NAME.is_match(s))
}

/// Normalizes a string into a legal script variable name.
///
/// Returns `None` for anything but a non-void string. Lower-cases the input,
/// splits it on runs of characters outside `[a-z0-9]`, and prefixes a first
/// segment that starts with a digit with an underscore. `CaseStyle::Snake`
/// joins the segments with underscores; `CaseStyle::Camel { offset }`
/// concatenates them, upper-casing the first character of every segment at
/// index >= `offset`.
///
/// # Examples
///
/// ```rust
/// use jsglue::{to_var_name, CaseStyle, Value};
///
/// assert_eq!(
///     to_var_name(&Value::from("Drum & Bass"), CaseStyle::Snake),
///     Some("drum_bass".to_string())
/// );
/// assert_eq!(
///     to_var_name(&Value::from("Drum & Bass"), CaseStyle::camel()),
///     Some("drumBass".to_string())
/// );
/// assert_eq!(
///     to_var_name(&Value::from("7seconds"), CaseStyle::Snake),
///     Some("_7seconds".to_string())
/// );
/// assert_eq!(to_var_name(&Value::from(1000), CaseStyle::Snake), None);
/// assert_eq!(to_var_name(&Value::Absent, CaseStyle::Snake), None);
/// ```
#[must_use]
pub fn to_var_name(value: &Value, style: CaseStyle) -> Option<String> {
    if is_void(value) {
        return None;
    }
    let text = value.as_str()?.to_lowercase();
    let mut parts: Vec<String> = SEGMENT_SPLIT
        .split(&text)
        .map(str::to_string)
        .collect();

    // A variable name may not start with a digit.
    if parts[0].starts_with(|c: char| c.is_ascii_digit()) {
        parts[0].insert(0, '_');
    }

    match style {
        CaseStyle::Snake => Some(parts.join("_")),
        CaseStyle::Camel { offset } => {
            let mut out = String::with_capacity(text.len());
            for (i, part) in parts.iter().enumerate() {
                if i >= offset {
                    let mut chars = part.chars();
                    if let Some(first) = chars.next() {
                        out.push(first.to_ascii_uppercase());
                        out.push_str(chars.as_str());
                    }
                } else {
                    out.push_str(part);
                }
            }
            Some(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_vs_var_name() {
        assert!(is_valid_id(&Value::from("data-r480")));
        assert!(!is_valid_var_name(&Value::from("data-r480")));
        assert!(is_valid_var_name(&Value::from("_House800")));
        // Surrounding whitespace is not stripped before matching.
        assert!(!is_valid_id(&Value::from(" pad ")));
    }

    #[test]
    fn test_to_var_name_segments() {
        assert_eq!(
            to_var_name(&Value::from("one-two  three"), CaseStyle::Snake),
            Some("one_two_three".to_string())
        );
        // Leading separators produce an empty first segment, like the
        // splitter they came from.
        assert_eq!(
            to_var_name(&Value::from("-abc"), CaseStyle::Snake),
            Some("_abc".to_string())
        );
    }

    #[test]
    fn test_to_var_name_camel_offsets() {
        let v = Value::from("one two three");
        assert_eq!(
            to_var_name(&v, CaseStyle::Camel { offset: 0 }),
            Some("OneTwoThree".to_string())
        );
        assert_eq!(
            to_var_name(&v, CaseStyle::camel()),
            Some("oneTwoThree".to_string())
        );
        assert_eq!(
            to_var_name(&v, CaseStyle::Camel { offset: 2 }),
            Some("onetwoThree".to_string())
        );
    }

    #[test]
    fn test_to_var_name_rejects_non_strings() {
        assert_eq!(to_var_name(&Value::Bool(true), CaseStyle::Snake), None);
        assert_eq!(to_var_name(&Value::from("   "), CaseStyle::Snake), None);
        assert_eq!(to_var_name(&Value::Array(vec![]), CaseStyle::Snake), None);
    }
}
