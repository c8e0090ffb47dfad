//! Memory-hard hashing with Argon2id.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::{ApiKeyError, Result};
use crate::hash::TokenHasher;

const MEMORY_KIB: u32 = 32 * 1024;
const ITERATIONS: u32 = 5;
const PARALLELISM: u32 = 1;
const OUTPUT_LENGTH: usize = 64;

/// Memory-hard [`TokenHasher`] producing salted, self-describing
/// Argon2id commitments in PHC string format.
///
/// Each [`hash`](TokenHasher::hash) call draws a fresh 16-byte salt, so
/// hashing the same token twice yields two different strings that both
/// verify. The cost parameters (32 MiB memory, 5 iterations, lane
/// count 1, 64-byte output) are embedded in the output string;
/// verification needs no external configuration.
///
/// Hashing is deliberately expensive. Callers on latency-sensitive
/// paths must bound concurrent calls themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2idHasher;

impl Argon2idHasher {
    fn instance() -> Result<Argon2<'static>> {
        let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(OUTPUT_LENGTH))
            .map_err(|e| ApiKeyError::Hashing(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl TokenHasher for Argon2idHasher {
    fn hash(&self, token: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::instance()?
            .hash_password(token.as_bytes(), &salt)
            .map_err(|e| ApiKeyError::Hashing(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, token: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        let Ok(argon2) = Self::instance() else {
            return false;
        };
        argon2.verify_password(token.as_bytes(), &parsed).is_ok()
    }
}
