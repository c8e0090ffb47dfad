//! Long token hashing.

use sha3::{Digest, Sha3_256};
use subtle::ConstantTimeEq;

use crate::error::Result;

/// Hashes long tokens into commitments and verifies presented tokens
/// against stored commitments.
///
/// A mismatch in [`verify`](TokenHasher::verify) is a plain `false`,
/// never an error. Implementations must not leak where in the
/// commitment a comparison failed.
pub trait TokenHasher: Send + Sync {
    /// Hash `token` into a commitment string suitable for storage.
    fn hash(&self, token: &str) -> Result<String>;

    /// Check `token` against a stored commitment.
    fn verify(&self, token: &str, hash: &str) -> bool;
}

/// Fast deterministic [`TokenHasher`] using SHA3-256.
///
/// Produces 64 lowercase hex characters. Verification recomputes the
/// digest and compares in constant time; a length mismatch is an
/// immediate `false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha3Hasher;

impl TokenHasher for Sha3Hasher {
    fn hash(&self, token: &str) -> Result<String> {
        let digest = Sha3_256::digest(token.as_bytes());
        Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
    }

    fn verify(&self, token: &str, hash: &str) -> bool {
        let Ok(computed) = self.hash(token) else {
            return false;
        };
        if computed.len() != hash.len() {
            return false;
        }
        computed.as_bytes().ct_eq(hash.as_bytes()).into()
    }
}
