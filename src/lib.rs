//! Cryptographically-secure API key generation and validation.
//!
//! This crate provides functionality for:
//! - Generating delimited API keys with a lookup fragment and a 256-bit secret
//! - Parsing tokens to extract their components
//! - Verifying tokens against stored hashes using constant-time comparison
//!
//! # Token Format
//!
//! Tokens follow the format: `{prefix}#{shortToken}#{longToken}`
//!
//! Example: `acme#gXhJ2k1x6fM#3nB_q9v...`
//!
//! The short token is a low-entropy lookup key, safe to store in
//! plaintext next to the hash of the long token. The long token is the
//! secret: it is handed to the client once and only its hash is kept.
//! Both are unpadded URL-safe base64, so the `#` separator can never
//! appear inside a segment.
//!
//! # Security Features
//!
//! - Pluggable hashing: a fast SHA3-256 digest, or salted Argon2id for
//!   offline-attack resistance
//! - Constant-time comparison to prevent timing attacks
//! - Memory zeroization of secrets after use
//! - Cryptographically secure random number generation
//!
//! # Example
//!
//! ```rust
//! use keyforge::{ApiKeyConfig, ApiKeyGenerator};
//!
//! let generator = ApiKeyGenerator::new(ApiKeyConfig::new("acme")).unwrap();
//!
//! let key = generator.generate().unwrap();
//!
//! // Give key.token to the user (only shown once!)
//! println!("Your API key: {}", key.token);
//!
//! // Store {key.short_token -> key.long_token_hash} in your database...
//!
//! // Later, verify a presented token against the stored hash
//! let is_valid = generator
//!     .check_api_key(&key.token, &key.long_token_hash)
//!     .unwrap();
//! assert!(is_valid);
//! ```

mod argon2id;
mod config;
mod data;
mod entropy;
mod error;
mod hash;
mod parse;
mod token;
mod validate;
mod verify;

// Public re-exports
pub use argon2id::Argon2idHasher;
pub use config::{
    ApiKeyConfig, DEFAULT_LONG_TOKEN_BYTES, DEFAULT_SEPARATOR, DEFAULT_SHORT_TOKEN_BYTES,
    MAX_PREFIX_LENGTH,
};
pub use data::ApiKey;
pub use entropy::{OsRandomTokenSource, RandomTokenSource};
pub use error::{ApiKeyError, Result};
pub use hash::{Sha3Hasher, TokenHasher};
pub use token::ApiKeyGenerator;
pub use validate::is_valid_token_component;
