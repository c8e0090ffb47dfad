//! Configuration for API key generation and validation.

/// Maximum allowed prefix length, in characters.
pub const MAX_PREFIX_LENGTH: usize = 32;

/// Default separator between token segments.
pub const DEFAULT_SEPARATOR: char = '#';

/// Default number of random bytes behind the short (lookup) token.
pub const DEFAULT_SHORT_TOKEN_BYTES: usize = 8;

/// Default number of random bytes behind the long (secret) token.
pub const DEFAULT_LONG_TOKEN_BYTES: usize = 32;

/// Configuration for API key generation and validation.
///
/// A plain value type; all invariants (prefix charset and length,
/// separator outside the token alphabet, non-zero segment lengths) are
/// enforced when the configuration is handed to
/// [`ApiKeyGenerator::new`](crate::ApiKeyGenerator::new).
#[derive(Debug, Clone)]
pub struct ApiKeyConfig {
    /// Prefix for token strings (e.g., "acme" produces "acme#...#...").
    pub prefix: String,
    /// Separator between prefix, short token and long token.
    /// Must not be drawn from `[A-Za-z0-9_-]`.
    pub separator: char,
    /// Number of random bytes behind the short token.
    pub short_token_bytes: usize,
    /// Number of random bytes behind the long token.
    pub long_token_bytes: usize,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            prefix: "key".to_string(),
            separator: DEFAULT_SEPARATOR,
            short_token_bytes: DEFAULT_SHORT_TOKEN_BYTES,
            long_token_bytes: DEFAULT_LONG_TOKEN_BYTES,
        }
    }
}

impl ApiKeyConfig {
    /// Create a new config with the given prefix and default segment sizes.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Set the separator character.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the short token length in random bytes.
    pub fn with_short_token_bytes(mut self, n: usize) -> Self {
        self.short_token_bytes = n;
        self
    }

    /// Set the long token length in random bytes.
    pub fn with_long_token_bytes(mut self, n: usize) -> Self {
        self.long_token_bytes = n;
        self
    }
}
