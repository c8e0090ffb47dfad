//! Data types for issued API keys.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The components of a generated API key.
///
/// `long_token` is the secret, and the full `token` embeds it. Hand
/// `token` to the client once, persist `short_token` together with
/// `long_token_hash`, then drop this value. All fields are wiped from
/// memory on drop.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey {
    /// Low-entropy lookup fragment, safe to store in plaintext.
    pub short_token: String,
    /// High-entropy secret fragment; only its hash should outlive this value.
    pub long_token: String,
    /// Commitment to the long token, as produced by the configured hasher.
    pub long_token_hash: String,
    /// The full delimited token handed to the client.
    pub token: String,
}
