//! Token component charset validation.

/// Returns true if `c` may appear in a token component.
pub(crate) fn is_valid_component_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Returns true if every character of `s` is in `[A-Za-z0-9_-]`.
///
/// The empty string is valid; length bounds are policed separately.
pub fn is_valid_token_component(s: &str) -> bool {
    s.chars().all(is_valid_component_char)
}
