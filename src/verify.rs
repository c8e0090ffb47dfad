//! Token verification.

use crate::error::Result;
use crate::token::ApiKeyGenerator;

impl ApiKeyGenerator {
    /// Check that `hash` is a commitment to the long token inside `token`.
    ///
    /// Returns `Ok(false)` on a mismatch; an error only if the token
    /// cannot be parsed. The comparison is delegated to the configured
    /// [`TokenHasher`](crate::TokenHasher), which is responsible for
    /// timing safety.
    pub fn check_api_key(&self, token: &str, hash: &str) -> Result<bool> {
        let long_token = self.extract_long_token(token)?;
        Ok(self.hasher.verify(long_token, hash))
    }
}
