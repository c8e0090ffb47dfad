//! Random token material sourced from the operating system.

use data_encoding::BASE64URL_NOPAD;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{ApiKeyError, Result};

/// Source of random token material.
///
/// Implementations return `n` cryptographically random bytes encoded as
/// unpadded URL-safe base64. Tests substitute deterministic fakes via
/// [`ApiKeyGenerator::with_capabilities`](crate::ApiKeyGenerator::with_capabilities).
pub trait RandomTokenSource: Send + Sync {
    /// Produce `n` random bytes encoded as unpadded URL-safe base64.
    fn generate(&self, n: usize) -> Result<String>;
}

/// Default [`RandomTokenSource`] backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomTokenSource;

impl RandomTokenSource for OsRandomTokenSource {
    fn generate(&self, n: usize) -> Result<String> {
        let mut bytes = vec![0u8; n];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(ApiKeyError::Entropy)?;
        Ok(BASE64URL_NOPAD.encode(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_decodes_to_requested_length() {
        let source = OsRandomTokenSource;
        for n in [1usize, 8, 32, 64] {
            let encoded = source.generate(n).unwrap();
            let decoded = BASE64URL_NOPAD.decode(encoded.as_bytes()).unwrap();
            assert_eq!(decoded.len(), n, "n = {n}");
        }
    }

    #[test]
    fn test_generate_is_url_safe() {
        let source = OsRandomTokenSource;
        let encoded = source.generate(64).unwrap();
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "unexpected character in {encoded:?}"
        );
    }

    #[test]
    fn test_generate_unique() {
        let source = OsRandomTokenSource;
        let a = source.generate(32).unwrap();
        let b = source.generate(32).unwrap();
        assert_ne!(a, b);
    }
}
