//! Error types for API key operations.

use thiserror::Error;

/// Errors that can occur during API key operations.
///
/// Construction rejects bad configuration; generation can fail on the
/// random source or the hasher; parsing and verification reject tokens
/// that do not decompose. A hash mismatch during verification is not an
/// error, it is an `Ok(false)`.
#[derive(Debug, Error)]
pub enum ApiKeyError {
    /// Prefix is empty or longer than the allowed maximum.
    #[error("prefix must be 1-{max} characters long")]
    PrefixLength { max: usize },

    /// Prefix contains a character outside `[A-Za-z0-9_-]`.
    #[error("prefix contains invalid character: {0:?}")]
    PrefixCharacter(char),

    /// Separator is drawn from the token alphabet, which would make
    /// splitting the token ambiguous.
    #[error("separator {0:?} collides with the token alphabet")]
    SeparatorCollision(char),

    /// A configured segment byte length is zero.
    #[error("token segment byte lengths must be non-zero")]
    SegmentLength,

    /// The random source failed to produce bytes.
    #[error("failed to read random bytes")]
    Entropy(#[source] rand::Error),

    /// Hash computation failed.
    #[error("hashing failed: {0}")]
    Hashing(String),

    /// Token does not split into exactly prefix, short token and long token.
    #[error("invalid token format")]
    InvalidFormat,

    /// A token segment contains characters outside `[A-Za-z0-9_-]`.
    #[error("token segment contains invalid characters")]
    InvalidSegment,
}

/// Result type alias for API key operations.
pub type Result<T> = std::result::Result<T, ApiKeyError>;
