//! API key generation.

use std::fmt;

use crate::config::{ApiKeyConfig, MAX_PREFIX_LENGTH};
use crate::data::ApiKey;
use crate::entropy::{OsRandomTokenSource, RandomTokenSource};
use crate::error::{ApiKeyError, Result};
use crate::hash::{Sha3Hasher, TokenHasher};
use crate::validate::is_valid_component_char;

/// Generates, parses and verifies delimited API key tokens.
///
/// A constructed generator is immutable and safe to share across
/// threads without locking.
pub struct ApiKeyGenerator {
    pub(crate) config: ApiKeyConfig,
    pub(crate) random: Box<dyn RandomTokenSource>,
    pub(crate) hasher: Box<dyn TokenHasher>,
}

impl ApiKeyGenerator {
    /// Create a generator with the OS random source and the fast SHA3 hasher.
    pub fn new(config: ApiKeyConfig) -> Result<Self> {
        Self::with_capabilities(config, Box::new(OsRandomTokenSource), Box::new(Sha3Hasher))
    }

    /// Create a generator with explicit random-source and hasher capabilities.
    ///
    /// Validates the configuration: the prefix must be 1-32 characters
    /// drawn from `[A-Za-z0-9_-]`, the separator must lie outside that
    /// alphabet, and both segment byte lengths must be non-zero.
    pub fn with_capabilities(
        config: ApiKeyConfig,
        random: Box<dyn RandomTokenSource>,
        hasher: Box<dyn TokenHasher>,
    ) -> Result<Self> {
        if config.prefix.is_empty() || config.prefix.chars().count() > MAX_PREFIX_LENGTH {
            return Err(ApiKeyError::PrefixLength {
                max: MAX_PREFIX_LENGTH,
            });
        }
        if let Some(c) = config.prefix.chars().find(|&c| !is_valid_component_char(c)) {
            return Err(ApiKeyError::PrefixCharacter(c));
        }
        if is_valid_component_char(config.separator) {
            return Err(ApiKeyError::SeparatorCollision(config.separator));
        }
        if config.short_token_bytes == 0 || config.long_token_bytes == 0 {
            return Err(ApiKeyError::SegmentLength);
        }
        Ok(Self {
            config,
            random,
            hasher,
        })
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    /// Generate a new API key.
    ///
    /// Draws the short and long tokens from the random source, composes
    /// the full token and commits the long token via the hasher.
    /// Returns the bundle: hand `token` to the client, persist
    /// `short_token` and `long_token_hash`, drop the rest.
    pub fn generate(&self) -> Result<ApiKey> {
        let short_token = self.random.generate(self.config.short_token_bytes)?;
        let long_token = self.random.generate(self.config.long_token_bytes)?;
        let token = format!(
            "{prefix}{sep}{short_token}{sep}{long_token}",
            prefix = self.config.prefix,
            sep = self.config.separator,
        );
        let long_token_hash = self.hasher.hash(&long_token)?;
        Ok(ApiKey {
            short_token,
            long_token,
            long_token_hash,
            token,
        })
    }
}

impl fmt::Debug for ApiKeyGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
