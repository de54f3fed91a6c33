//! Configuration options for the formatting and conversion helpers.
//!
//! This module provides the option types used across the crate:
//!
//! - [`QuoteStyle`]: single vs double quotes for emitted string literals
//! - [`Grouping`]: array vs object emission for the script converters
//! - [`CaseStyle`]: snake vs camel output for [`crate::to_var_name`]
//! - [`SanitizeOptions`] / [`Filter`]: knobs for [`crate::sanitize_with`]
//! - [`UnfoldOptions`]: knobs for [`crate::unfold_with`]
//!
//! ## Examples
//!
//! ```rust
//! use jsglue::{sanitize_with, Filter, SanitizeOptions, Value};
//!
//! let options = SanitizeOptions::new()
//!     .with_space("_")
//!     .with_filter(Filter::Keep);
//! let out = sanitize_with(&Value::from("Hello  World"), &options);
//! assert_eq!(out, Value::from("Hello_World"));
//! ```

/// Quote character used when emitting string literals.
///
/// # Examples
///
/// ```rust
/// use jsglue::QuoteStyle;
///
/// assert_eq!(QuoteStyle::Single.as_char(), '\'');
/// assert_eq!(QuoteStyle::Double.as_char(), '"');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    Single,
    #[default]
    Double,
}

impl QuoteStyle {
    /// Returns the quote character for this style.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Emission shape for the script converters: a bracketed array or a braced
/// object whose keys come from the input map (or element indices).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Grouping {
    #[default]
    Array,
    Object,
}

impl Grouping {
    /// Returns the opening bracket for this grouping.
    #[must_use]
    pub const fn open(&self) -> char {
        match self {
            Grouping::Array => '[',
            Grouping::Object => '{',
        }
    }
}

/// Output style for [`crate::to_var_name`].
///
/// `Snake` joins the lower-cased segments with underscores. `Camel` joins
/// them with nothing and upper-cases the first character of every segment at
/// index >= `offset`; offset 0 capitalizes every segment (`WithoutOffset`
/// style), offset 1 is the conventional `withOffset` style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaseStyle {
    #[default]
    Snake,
    Camel {
        offset: usize,
    },
}

impl CaseStyle {
    /// The conventional camel style: first segment stays lower-case.
    #[must_use]
    pub const fn camel() -> Self {
        CaseStyle::Camel { offset: 1 }
    }
}

/// Filter step applied by [`crate::sanitize_with`] after trimming.
#[derive(Clone, Copy, Debug, Default)]
pub enum Filter {
    /// Force lower-case (the default).
    #[default]
    Lowercase,
    /// Apply no filter.
    Keep,
    /// Apply a caller-supplied function.
    Apply(fn(&str) -> String),
}

/// Options for [`crate::sanitize_with`].
///
/// # Examples
///
/// ```rust
/// use jsglue::{Filter, SanitizeOptions};
///
/// // Defaults: whitespace runs become "-", lower-case filter, illegal
/// // characters are dropped.
/// let options = SanitizeOptions::new();
/// assert_eq!(options.space.as_deref(), Some("-"));
///
/// // Keep whitespace, replace illegal characters with "_".
/// let options = SanitizeOptions::new()
///     .keep_whitespace()
///     .with_other("_");
/// ```
#[derive(Clone, Debug)]
pub struct SanitizeOptions {
    /// Replacement for runs of inner whitespace; `None` leaves whitespace
    /// alone.
    pub space: Option<String>,
    pub filter: Filter,
    /// Replacement for entities, escaped octets, and other illegal
    /// characters.
    pub other: String,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        SanitizeOptions {
            space: Some("-".to_string()),
            filter: Filter::default(),
            other: String::new(),
        }
    }
}

impl SanitizeOptions {
    /// Creates the default options (dash for whitespace, lower-case filter,
    /// illegal characters dropped).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the whitespace replacement.
    #[must_use]
    pub fn with_space(mut self, space: &str) -> Self {
        self.space = Some(space.to_string());
        self
    }

    /// Leaves inner whitespace untouched.
    #[must_use]
    pub fn keep_whitespace(mut self) -> Self {
        self.space = None;
        self
    }

    /// Sets the filter step.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the replacement for illegal characters.
    #[must_use]
    pub fn with_other(mut self, other: &str) -> Self {
        self.other = other.to_string();
        self
    }
}

/// Options for [`crate::unfold_with`].
///
/// # Examples
///
/// ```rust
/// use jsglue::UnfoldOptions;
///
/// let options = UnfoldOptions::new().with_indent("  ").with_wrap("\n");
/// assert_eq!(options.indent, "  ");
/// ```
#[derive(Clone, Debug)]
pub struct UnfoldOptions {
    /// Line break between lines.
    pub brk: String,
    /// Indent inserted after opening boundaries.
    pub indent: String,
    /// Overall indent appended to every break.
    pub offset: String,
    /// Text wrapped around the whole output.
    pub wrap: String,
}

impl Default for UnfoldOptions {
    fn default() -> Self {
        UnfoldOptions {
            brk: "\n".to_string(),
            indent: "\t".to_string(),
            offset: "\t".to_string(),
            wrap: "\n\t".to_string(),
        }
    }
}

impl UnfoldOptions {
    /// Creates the default options (newline breaks, tab indents, `"\n\t"`
    /// wrap).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line break.
    #[must_use]
    pub fn with_break(mut self, brk: &str) -> Self {
        self.brk = brk.to_string();
        self
    }

    /// Sets the indent inserted after opening boundaries.
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the overall indent.
    #[must_use]
    pub fn with_offset(mut self, offset: &str) -> Self {
        self.offset = offset.to_string();
        self
    }

    /// Sets the wrapping text.
    #[must_use]
    pub fn with_wrap(mut self, wrap: &str) -> Self {
        self.wrap = wrap.to_string();
        self
    }
}
