//! Token parsing for API keys.

use crate::data::ApiKey;
use crate::error::{ApiKeyError, Result};
use crate::token::ApiKeyGenerator;
use crate::validate::is_valid_token_component;

impl ApiKeyGenerator {
    /// Split `token` on the configured separator into exactly three
    /// segments, each restricted to the token alphabet.
    fn split_token<'a>(&self, token: &'a str) -> Result<[&'a str; 3]> {
        let mut parts = token.split(self.config.separator);
        let (Some(prefix), Some(short), Some(long), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ApiKeyError::InvalidFormat);
        };
        for segment in [prefix, short, long] {
            if !is_valid_token_component(segment) {
                return Err(ApiKeyError::InvalidSegment);
            }
        }
        Ok([prefix, short, long])
    }

    /// Extract the short (lookup) token from a full API key string.
    pub fn extract_short_token<'a>(&self, token: &'a str) -> Result<&'a str> {
        let [_, short, _] = self.split_token(token)?;
        Ok(short)
    }

    /// Extract the long (secret) token from a full API key string.
    pub fn extract_long_token<'a>(&self, token: &'a str) -> Result<&'a str> {
        let [_, _, long] = self.split_token(token)?;
        Ok(long)
    }

    /// Parse a full API key string into its components.
    ///
    /// The hash field is left empty: a commitment cannot be derived
    /// from the token alone.
    pub fn token_components(&self, token: &str) -> Result<ApiKey> {
        let [_, short, long] = self.split_token(token)?;
        Ok(ApiKey {
            short_token: short.to_string(),
            long_token: long.to_string(),
            long_token_hash: String::new(),
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKeyConfig;

    fn generator() -> ApiKeyGenerator {
        ApiKeyGenerator::new(ApiKeyConfig::new("acme")).unwrap()
    }

    #[test]
    fn test_roundtrip() {
        let generator = generator();
        let key = generator.generate().unwrap();

        let parsed = generator.token_components(&key.token).unwrap();
        assert_eq!(parsed.short_token, key.short_token);
        assert_eq!(parsed.long_token, key.long_token);
        assert_eq!(parsed.token, key.token);
        assert!(parsed.long_token_hash.is_empty());
    }

    #[test]
    fn test_extract_short_and_long() {
        let generator = generator();
        assert_eq!(
            generator.extract_short_token("acme#short#long").unwrap(),
            "short"
        );
        assert_eq!(
            generator.extract_long_token("acme#short#long").unwrap(),
            "long"
        );
    }

    #[test]
    fn test_wrong_separator_count() {
        let generator = generator();
        for token in ["badtoken", "acme#short", "acme#a#b#c", "###", "", "#"] {
            assert!(
                matches!(
                    generator.extract_short_token(token),
                    Err(ApiKeyError::InvalidFormat)
                ),
                "token {token:?} should fail extract_short_token"
            );
            assert!(
                matches!(
                    generator.extract_long_token(token),
                    Err(ApiKeyError::InvalidFormat)
                ),
                "token {token:?} should fail extract_long_token"
            );
            assert!(
                matches!(
                    generator.token_components(token),
                    Err(ApiKeyError::InvalidFormat)
                ),
                "token {token:?} should fail token_components"
            );
        }
    }

    #[test]
    fn test_segment_charset_enforced() {
        let generator = generator();
        for token in ["acme#sh ort#long", "acme#short#lo.ng", "ac@me#short#long"] {
            assert!(
                matches!(
                    generator.token_components(token),
                    Err(ApiKeyError::InvalidSegment)
                ),
                "token {token:?} should fail on segment charset"
            );
        }
    }

    #[test]
    fn test_empty_segments_parse() {
        // "a##" splits into three charset-valid segments; length policy
        // applies to generated tokens, not parsed ones.
        let generator = generator();
        let parsed = generator.token_components("a##").unwrap();
        assert_eq!(parsed.short_token, "");
        assert_eq!(parsed.long_token, "");
    }

    #[test]
    fn test_parse_respects_configured_separator() {
        let generator =
            ApiKeyGenerator::new(ApiKeyConfig::new("acme").with_separator('.')).unwrap();
        assert_eq!(
            generator.extract_short_token("acme.short.long").unwrap(),
            "short"
        );
        // '#' is not the separator here, and it is outside the charset.
        assert!(generator.token_components("acme#short#long").is_err());
    }
}
