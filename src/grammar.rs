//! Literal Grammar Reference
//!
//! This module documents the grammar behind [`crate::literal_kind`],
//! [`crate::is_literal`], [`crate::quote`], and [`crate::unquote`]: the rules
//! deciding whether a piece of text, embedded in a generated script snippet,
//! already reads as a JavaScript literal and therefore must not be quoted.
//!
//! # Overview
//!
//! The grammar is fixed and non-configurable. Classification trims the text
//! first and is case-insensitive where noted. A value matches exactly one
//! form, tried in this order:
//!
//! | Form | Rule | Examples |
//! |------|------|----------|
//! | Boolean | equals `true` or `false`, case-insensitive | `true`, `FALSE` |
//! | Null | equals `null`, case-insensitive | `null`, `NULL` |
//! | Undefined | equals `undefined`, case-insensitive | `undefined` |
//! | Number | optional sign, decimal digits with optional fraction, optional exponent | `0`, `-42`, `3.5`, `.5`, `1e5` |
//! | Quoted string | starts and ends with the same quote character, one line | `'hi'`, `"hi"` |
//! | Array literal | starts with `[` and ends with `]`, one line | `[1, 2]`, `[]` |
//! | Object literal | starts with `{` and ends with `}`, one line | `{a: 1}`, `{}` |
//! | Function blob | see below | `function () { go(); }` |
//!
//! # The function blob rule
//!
//! The function form is a best-effort shape test, not a parser:
//!
//! ```text
//! ^\s* ( ($|jQuery) \( [a-z]+ \) . [a-z]+ )?   optional call wrapper
//!      \(? \s* function [a-z0-9_\s]* \(        keyword + name + params open
//!      .* \}                                   body, up to a closing brace
//!      \s* \)? \s* \(? .* \)? ;? \s* $         IIFE tail, trailing call
//! ```
//!
//! It recognizes anonymous functions, named function literals, immediately
//! invoked expressions, and common `$(sel).method(function...)` wrappers. It
//! does **not** balance braces or parentheses: deeply nested functions can
//! mis-trigger, and multi-statement bodies whose last brace is not at the
//! end can fail to match. Callers treat a false negative as "quote it" and a
//! false positive as "leave it alone", so the failure modes are visible in
//! the emitted script rather than silent.
//!
//! # Quoting policy
//!
//! - [`crate::quote`] wraps non-literal strings with one quote character per
//!   side, trimming any existing run of that character first, so requoting
//!   is idempotent.
//! - [`crate::unquote`] runs the opposite direction as one global
//!   substitution over the whole snippet: every quoted substring whose
//!   interior matches a literal form loses its quotes. It is not a
//!   top-level parse — the bracketed forms prefer the shortest
//!   bracket-free interior, but the function form's trailing wildcard is
//!   greedy and can span across a following quoted entry. Converters that
//!   emit function blobs should place them last in an object for clean
//!   output.
//!
//! # Relationship to the converters
//!
//! [`crate::data_to_script`] quotes *every* value while assembling its
//! output, then makes a single [`crate::unquote`] pass over the assembled
//! text. Numbers, booleans, nested structures, and function blobs come out
//! bare; everything else stays quoted. This two-phase design keeps the
//! assembly step trivially simple at the cost of inheriting the grammar's
//! edge cases above.

// This module contains only documentation; no implementation code
