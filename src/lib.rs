//! # jsglue
//!
//! Stateless string/array helpers for bridging template values into embedded
//! JavaScript literals.
//!
//! ## What is this for?
//!
//! Template engines routinely need to drop server-side data into inline
//! script: a config object on a `data-` attribute, an options literal for a
//! widget, a list of class names. Doing that by string concatenation raises
//! the same small questions every time — should this value be quoted? is it
//! already a literal? how do keys and values become `{key: value}` text? —
//! and this crate answers them with a set of pure functions.
//!
//! ## Key pieces
//!
//! - **[`Value`]**: a tagged variant over everything the helpers accept
//!   (absent, bool, number, string, array, object). Build one with
//!   [`From`] impls or the [`value!`] macro.
//! - **Classifiers**: [`is_human`], [`is_dust`], [`is_void`],
//!   [`is_literal`], and friends decide what a value is before anything is
//!   done to it.
//! - **Quoting**: [`quote`] wraps strings that need quotes and leaves
//!   literals alone; [`unquote`] strips quotes that shouldn't be there.
//! - **Joining**: [`to_array`], [`merge_all`], [`join_unique`], and
//!   [`bump`] turn mixed inputs into delimited text.
//! - **Converters**: [`data_to_script`], [`nested_to_script`], and
//!   [`data_to_json`] emit array/object literals or JSON from a [`Value`].
//! - **Reformatters**: [`sanitize`], [`unfold`], and [`wrap_cdata`] tidy the
//!   surrounding text.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsglue::{data_to_script, value, Grouping, QuoteStyle};
//!
//! let config = value!({
//!     "speed": 300,
//!     "easing": "swing",
//!     "loop": "true"
//! });
//!
//! let js = data_to_script(&config, Grouping::Object, QuoteStyle::Double).unwrap();
//! assert_eq!(js, r#"{speed: 300, easing: "swing", loop: true}"#);
//! ```
//!
//! Strings that already read as literals (`"true"`, `"300"`, `"[1, 2]"`, a
//! function expression) are emitted bare; everything else is quoted. The
//! rules are documented in [`grammar`].
//!
//! ## Everything is pure
//!
//! Every function is a synchronous, referentially transparent map from its
//! inputs to its output — no global state, no I/O, no locking. The only
//! caveat is caller-supplied callbacks ([`filter_map`], a custom
//! [`Filter`]), whose side effects are the caller's business.
//!
//! ## Error handling
//!
//! Type mismatches recover silently: handing a number to [`sanitize`] or an
//! array to [`quote`] returns the input unchanged, because templates feed
//! these helpers unvetted values all day. Actual misuse — a scalar where a
//! collection is required — is an [`Error::InvalidArgument`] plus a
//! `tracing` warning, and nothing is ever fatal.

pub mod bracket;
pub mod classify;
pub mod error;
pub mod format;
pub mod grammar;
pub mod ident;
pub mod join;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod pad;
pub mod script;
pub mod value;

pub use bracket::mirror;
pub use classify::{can_split, humanize, is_dust, is_human, is_literal, is_void};
pub use error::{Error, Result};
pub use format::{sanitize, sanitize_with, unfold, unfold_with, wrap_cdata, wrap_cdata_with};
pub use ident::{is_valid_id, is_valid_var_name, to_var_name};
pub use join::{bump, bump_join, compact, filter_map, join_unique, merge_all, to_array};
pub use literal::{literal_kind, unquote, LiteralKind};
pub use map::ValueMap;
pub use options::{CaseStyle, Filter, Grouping, QuoteStyle, SanitizeOptions, UnfoldOptions};
pub use pad::{affix, pad, quote};
pub use script::{data_to_json, data_to_script, nested_to_script};
pub use value::{Number, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quote_join_pipeline() {
        // A template handing over a delimited class list.
        let classes = join_unique(
            &Value::from(" "),
            &[Value::from("btn btn"), Value::from("active")],
        );
        assert_eq!(classes, "btn active");

        // The quoted form of a non-literal string is stable.
        let quoted = quote(&Value::from(classes), '"');
        assert_eq!(quoted, Value::from("\"btn active\""));
        assert_eq!(quote(&quoted, '"'), quoted);
    }

    #[test]
    fn test_object_to_attribute_pipeline() {
        let data = value!({"w": 100, "h": "auto"});
        let json = data_to_json(&data, Some("data-size")).unwrap();
        assert_eq!(json, r#"data-size='{"w":100,"h":"auto"}'"#);
    }

    #[test]
    fn test_script_block_pipeline() {
        let options = value!({"speed": "600", "fade": "true"});
        let js = data_to_script(&options, Grouping::Object, QuoteStyle::Single).unwrap();
        assert_eq!(js, "{speed: 600, fade: true}");

        let wrapped = wrap_cdata(&Value::from(js));
        assert_eq!(
            wrapped.to_string(),
            "/*<![CDATA[*/\n{speed: 600, fade: true}\n\t/*]]>*/"
        );
    }
}
