//! Property-based tests for the structural guarantees: involution,
//! idempotence, classification consistency, and output charsets.

use jsglue::{
    can_split, humanize, is_human, is_valid_var_name, join_unique, mirror, pad, quote, sanitize,
    to_var_name, unquote, CaseStyle, Value,
};
use proptest::prelude::*;

proptest! {
    // mirror is an involution over every char, bracket or not.
    #[test]
    fn prop_mirror_involution(c in any::<char>()) {
        prop_assert_eq!(mirror(mirror(c)), c);
    }

    // Quoting twice never differs from quoting once, literal or not.
    #[test]
    fn prop_quote_idempotent(s in ".*") {
        let once = quote(&Value::from(s.as_str()), '"');
        let twice = quote(&once, '"');
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_humanize_idempotent(s in ".*", n in any::<i64>()) {
        for v in [Value::from(s.as_str()), Value::from(n), Value::Bool(true), Value::Absent] {
            let first = humanize(&v);
            prop_assert_eq!(humanize(&first), first.clone());
        }
    }

    // can_split is exactly is_human minus the empty string.
    #[test]
    fn prop_can_split_consistency(s in ".*") {
        let v = Value::from(s.as_str());
        prop_assert_eq!(can_split(&v), is_human(&v) && !s.is_empty());
    }

    // Non-human values come through pad untouched.
    #[test]
    fn prop_pad_guards_non_human(b in any::<bool>()) {
        let left = Value::from("([");
        for v in [Value::Bool(b), Value::Absent, Value::Array(vec![Value::from(1)])] {
            prop_assert_eq!(pad(&v, &left, &Value::Bool(true)), v.clone());
        }
    }

    // The default sanitizer only ever emits lowercase alphanumerics,
    // underscores, and dashes.
    #[test]
    fn prop_sanitize_charset(s in "[ -~]{0,40}") {
        let out = sanitize(&Value::from(s.as_str()));
        let text = out.to_string();
        prop_assert!(
            text.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
            "unexpected char in {:?}",
            text
        );
    }

    // join_unique never emits the same piece twice.
    #[test]
    fn prop_join_unique_dedupes(words in prop::collection::vec("[a-z]{1,6}", 0..8)) {
        let args: Vec<Value> = words.iter().map(|w| Value::from(w.as_str())).collect();
        let joined = join_unique(&Value::from("-"), &args);
        let pieces: Vec<&str> = joined.split('-').filter(|p| !p.is_empty()).collect();
        let mut seen = std::collections::HashSet::new();
        for piece in &pieces {
            prop_assert!(seen.insert(*piece), "duplicate {:?} in {:?}", piece, joined);
        }
    }

    // Whatever to_var_name produces is a legal variable name.
    #[test]
    fn prop_to_var_name_output_valid(s in "[ -~]{1,30}") {
        if let Some(name) = to_var_name(&Value::from(s.as_str()), CaseStyle::Snake) {
            prop_assert!(
                is_valid_var_name(&Value::from(name.as_str())),
                "invalid name {:?} from {:?}",
                name,
                s
            );
        }
    }

    // Text with no quote characters has nothing for unquote to do.
    #[test]
    fn prop_unquote_without_quotes(s in "[a-z0-9 ,;:]{0,40}") {
        prop_assert_eq!(unquote(&s), s.clone());
    }
}
