//! Bracket mirroring.
//!
//! Maps each opening bracket/parenthesis character to its closing counterpart
//! and vice versa. Inputs outside the eight bracket characters pass through
//! unchanged, so the function is an involution everywhere.

/// Converts a bracket character to its mirror image.
///
/// # Examples
///
/// ```rust
/// use jsglue::mirror;
///
/// assert_eq!(mirror('['), ']');
/// assert_eq!(mirror(')'), '(');
/// assert_eq!(mirror('x'), 'x');
/// assert_eq!(mirror(mirror('{')), '{');
/// ```
#[must_use]
pub const fn mirror(ch: char) -> char {
    match ch {
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '(' => ')',
        ')' => '(',
        '<' => '>',
        '>' => '<',
        other => other,
    }
}

/// True for the four opening characters `[`, `(`, `{`, `<`.
#[inline]
pub(crate) const fn is_opening(ch: char) -> bool {
    matches!(ch, '[' | '(' | '{' | '<')
}

/// True for any of the eight bracket characters.
#[inline]
pub(crate) const fn is_bracket(ch: char) -> bool {
    matches!(ch, '[' | ']' | '(' | ')' | '{' | '}' | '<' | '>')
}

/// Mirrors every character and reverses the order, so a run of opening
/// brackets becomes the matching run of closing brackets.
pub(crate) fn mirrored_reverse(text: &str) -> String {
    text.chars().rev().map(mirror).collect()
}
