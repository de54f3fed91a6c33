//! Text reformatting: CDATA wrapping, sanitizing, and code unfolding.

use crate::{is_human, SanitizeOptions, UnfoldOptions, Value};
use crate::options::Filter;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\s\x00\x0B]+").unwrap();
    // Entities first, then percent-escaped octets, then anything not
    // alphanumeric, underscore, dash, or whitespace.
    static ref ILLEGAL: Regex =
        Regex::new(r"&.+?;|%[a-fA-F0-9]{2}|[^a-zA-Z0-9_\-\s]").unwrap();
}

/// Wraps code (usually script text) in CDATA comment tags, with the default
/// newline break and tab indent.
///
/// # Examples
///
/// ```rust
/// use jsglue::{wrap_cdata, Value};
///
/// let wrapped = wrap_cdata(&Value::from("go();"));
/// assert_eq!(
///     wrapped,
///     Value::from("/*<![CDATA[*/\ngo();\n\t/*]]>*/")
/// );
/// ```
#[must_use]
pub fn wrap_cdata(code: &Value) -> Value {
    wrap_cdata_with(code, "\n", "\t")
}

/// [`wrap_cdata`] with an explicit break and indent. Non-human input passes
/// through unchanged.
#[must_use]
pub fn wrap_cdata_with(code: &Value, brk: &str, indent: &str) -> Value {
    if !is_human(code) {
        return code.clone();
    }
    Value::String(format!("/*<![CDATA[*/{brk}{code}{brk}{indent}/*]]>*/"))
}

/// Sanitizes a string with the default options: trim, lower-case, collapse
/// whitespace runs to `-`, drop anything else that isn't alphanumeric,
/// underscore, or dash.
///
/// # Examples
///
/// ```rust
/// use jsglue::{sanitize, Value};
///
/// assert_eq!(
///     sanitize(&Value::from("Hello   World!!")),
///     Value::from("hello-world")
/// );
/// ```
#[must_use]
pub fn sanitize(value: &Value) -> Value {
    sanitize_with(value, &SanitizeOptions::default())
}

/// Sanitizes a string with explicit options. Non-strings pass through
/// unchanged.
///
/// The pipeline: trim, apply the filter, collapse inner whitespace runs to
/// `options.space` (when set), then replace HTML entities, percent-escaped
/// octets, and any remaining illegal character with `options.other`.
///
/// # Examples
///
/// ```rust
/// use jsglue::{sanitize_with, Filter, SanitizeOptions, Value};
///
/// let options = SanitizeOptions::new().with_filter(Filter::Keep).with_other("_");
/// assert_eq!(
///     sanitize_with(&Value::from("A&amp;B %41 c"), &options),
///     Value::from("A_B-_-c")
/// );
/// assert_eq!(sanitize_with(&Value::from(42), &options), Value::from(42));
/// ```
#[must_use]
pub fn sanitize_with(value: &Value, options: &SanitizeOptions) -> Value {
    let Value::String(s) = value else {
        return value.clone();
    };

    let mut out = s.trim().to_string();

    out = match options.filter {
        Filter::Lowercase => out.to_lowercase(),
        Filter::Keep => out,
        Filter::Apply(f) => f(&out),
    };

    if let Some(space) = &options.space {
        out = WHITESPACE_RUN
            .replace_all(&out, NoExpand(space.as_str()))
            .into_owned();
    }

    Value::String(
        ILLEGAL
            .replace_all(&out, NoExpand(options.other.as_str()))
            .into_owned(),
    )
}

/// Unfolds a block of script text with the default options: newline breaks,
/// tab indents, wrapped in `"\n\t"`.
///
/// # Examples
///
/// ```rust
/// use jsglue::unfold;
///
/// let out = unfold("[{a: 1}, {b: 2}]");
/// assert!(out.contains("\n"));
/// ```
#[must_use]
pub fn unfold(js: &str) -> String {
    unfold_with(js, &UnfoldOptions::default())
}

/// Unfolds a block of script text: inserts line breaks and indentation after
/// a fixed table of delimiter boundaries and wraps the result.
///
/// This is textual, not syntactic — there is no brace matching, and matched
/// substrings inside string literals are reformatted too. A placeholder
/// token keeps already-split `},{` sites from being processed twice by the
/// later `},` rule.
#[must_use]
pub fn unfold_with(js: &str, options: &UnfoldOptions) -> String {
    // Keep the offset separate in the options; every break carries it.
    let brk = format!("{}{}", options.brk, options.offset);
    let indent = &options.indent;

    let replacements: [(&str, String); 7] = [
        ("},{", format!("{brk}}}!comma! {{{brk}{indent}")),
        ("([{", format!("([{{{brk}{indent}")),
        ("}])", format!("{brk}}}])")),
        ("',", format!("',{brk}{indent}")),
        ("},", format!("}},{brk}{indent}")),
        ("],", format!("],{brk}{indent}")),
        ("}!comma!", "},".to_string()),
    ];

    let mut out = js.to_string();
    for (needle, replacement) in &replacements {
        out = out.replace(needle, replacement);
    }

    format!("{}{}{}", options.wrap, out, options.wrap)
}
