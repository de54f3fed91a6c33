//! Recognition of script-literal text.
//!
//! The quoting helpers need to answer one question: does a piece of text,
//! destined for a generated script snippet, already read as a JavaScript
//! literal? If it does, wrapping it in quotes would change its meaning.
//!
//! [`literal_kind`] is an explicit matcher over the enumerated literal forms
//! (see [`crate::grammar`] for the full rules), so each rule is auditable on
//! its own. [`unquote`] is the inverse repair pass: a global substitution
//! that strips the quotes back off any quoted substring whose interior is a
//! literal.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // What a numeric string looks like: optional sign, decimal digits with
    // an optional fraction, optional exponent.
    static ref NUMERIC: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap();

    // Best-effort shape for function expressions, optionally behind a
    // $(sel).method or jQuery(sel).method wrapper and an IIFE paren. This
    // does not balance braces; see the grammar module.
    static ref FUNCTION_BLOB: Regex = Regex::new(
        r"(?i)^\s*(?:(?:\$|jQuery)\([a-z]+\)\.[a-z]+)?\(?\s*function[a-z0-9_\s]*\(.*\}\s*\)?\s*\(?.*\)?;?\s*$"
    )
    .unwrap();

    // A quoted literal: quote, any literal form, quote. Group 2 is the
    // interior; the replacement keeps it and drops the quotes.
    static ref QUOTED_LITERAL: Regex = Regex::new(concat!(
        r#"(?i)('|")("#,
        r"\[[^\[\]]*\]|\{[^}]*\}|\[.*\]|\{.*\}|true|false|",
        r"\s*((\$|jQuery)\([a-z]+\)\.[a-z]+)?\(?\s*function[a-z0-9_\s]*\(.*\}\s*\)?\s*\(?.*\)?;?\s*",
        r"|null|undefined|-?[0-9]*\.?[0-9]+",
        r#")('|")"#
    ))
    .unwrap();
}

/// The literal forms recognized by [`literal_kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// `true` or `false` (case-insensitive).
    Bool,
    /// `null` (case-insensitive).
    Null,
    /// `undefined` (case-insensitive).
    Undefined,
    /// A decimal number, optionally signed, optionally with an exponent.
    Number,
    /// A singly- or doubly-quoted string on one line.
    QuotedString,
    /// A bracketed `[...]` form on one line.
    ArrayLiteral,
    /// A braced `{...}` form on one line.
    ObjectLiteral,
    /// A function-expression-shaped blob (best effort).
    FunctionBlob,
}

/// Classifies trimmed text against the literal grammar.
///
/// Returns `None` when the text does not read as any literal form.
///
/// # Examples
///
/// ```rust
/// use jsglue::{literal_kind, LiteralKind};
///
/// assert_eq!(literal_kind("TRUE"), Some(LiteralKind::Bool));
/// assert_eq!(literal_kind(" -3.5 "), Some(LiteralKind::Number));
/// assert_eq!(literal_kind("'hi'"), Some(LiteralKind::QuotedString));
/// assert_eq!(literal_kind("[1, 2]"), Some(LiteralKind::ArrayLiteral));
/// assert_eq!(literal_kind("function(x) { return x; }"), Some(LiteralKind::FunctionBlob));
/// assert_eq!(literal_kind("plain words"), None);
/// ```
#[must_use]
pub fn literal_kind(text: &str) -> Option<LiteralKind> {
    let t = text.trim();
    if t.eq_ignore_ascii_case("true") || t.eq_ignore_ascii_case("false") {
        return Some(LiteralKind::Bool);
    }
    if t.eq_ignore_ascii_case("null") {
        return Some(LiteralKind::Null);
    }
    if t.eq_ignore_ascii_case("undefined") {
        return Some(LiteralKind::Undefined);
    }
    if NUMERIC.is_match(t) {
        return Some(LiteralKind::Number);
    }
    if delimited(t, '\'', '\'') || delimited(t, '"', '"') {
        return Some(LiteralKind::QuotedString);
    }
    if delimited(t, '[', ']') {
        return Some(LiteralKind::ArrayLiteral);
    }
    if delimited(t, '{', '}') {
        return Some(LiteralKind::ObjectLiteral);
    }
    if FUNCTION_BLOB.is_match(t) {
        return Some(LiteralKind::FunctionBlob);
    }
    None
}

// Single-line text enclosed by the given pair. The interior may not span
// lines (the quoted and bracketed forms are one-liners in this grammar).
fn delimited(text: &str, open: char, close: char) -> bool {
    text.len() >= 2
        && text.starts_with(open)
        && text.ends_with(close)
        && !text.contains('\n')
}

/// Removes the quotes that surround strings not needing quotes in
/// JavaScript: numbers, booleans, `[arrays]`, `{objects}`, `null`,
/// `undefined`, and function blobs.
///
/// This is a global substitution over the whole input; quoted strings whose
/// interior is not a literal are left alone.
///
/// # Examples
///
/// ```rust
/// use jsglue::unquote;
///
/// assert_eq!(unquote("'{  }'"), "{  }");
/// assert_eq!(unquote("\"[  ]\""), "[  ]");
/// assert_eq!(unquote("\"true\""), "true");
/// assert_eq!(unquote("\"1000\""), "1000");
/// assert_eq!(unquote("\"price\""), "\"price\"");
/// ```
#[must_use]
pub fn unquote(js: &str) -> String {
    QUOTED_LITERAL.replace_all(js, "${2}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_forms() {
        assert_eq!(literal_kind("true"), Some(LiteralKind::Bool));
        assert_eq!(literal_kind("False"), Some(LiteralKind::Bool));
        assert_eq!(literal_kind("NULL"), Some(LiteralKind::Null));
        assert_eq!(literal_kind("undefined"), Some(LiteralKind::Undefined));
        assert_eq!(literal_kind("truthy"), None);
    }

    #[test]
    fn test_numeric_forms() {
        for n in ["0", "1000", "-42", "+7", "3.5", ".5", "1e5", "-2.5e-3"] {
            assert_eq!(literal_kind(n), Some(LiteralKind::Number), "{}", n);
        }
        for n in ["1.2.3", "0x1A", "abc", ""] {
            assert_eq!(literal_kind(n), None, "{}", n);
        }
    }

    #[test]
    fn test_bracketed_forms_are_single_line() {
        assert_eq!(literal_kind("[1, 2]"), Some(LiteralKind::ArrayLiteral));
        assert_eq!(literal_kind("{a: 1}"), Some(LiteralKind::ObjectLiteral));
        assert_eq!(literal_kind("[1,\n2]"), None);
    }

    #[test]
    fn test_function_blobs() {
        assert_eq!(
            literal_kind("function () { return 1; }"),
            Some(LiteralKind::FunctionBlob)
        );
        assert_eq!(
            literal_kind("(function init() { go(); })()"),
            Some(LiteralKind::FunctionBlob)
        );
        assert_eq!(
            literal_kind("$(document).ready(function() { go(); })"),
            Some(LiteralKind::FunctionBlob)
        );
        assert_eq!(literal_kind("function but not really"), None);
    }

    #[test]
    fn test_unquote_mixed_snippet() {
        let js = r#"{a: "1", b: "x", c: "true", d: "[1, 2]"}"#;
        assert_eq!(unquote(js), r#"{a: 1, b: "x", c: true, d: [1, 2]}"#);
    }

    #[test]
    fn test_unquote_single_quotes() {
        assert_eq!(unquote("'null'"), "null");
        assert_eq!(unquote("'-1.5'"), "-1.5");
        assert_eq!(unquote("'words'"), "'words'");
    }
}
