//! Detached maker signatures.
//!
//! A maker authorizes an order off-line by signing its [`OrderHash`] with the
//! ed25519 key whose public half *is* the maker's [`AccountId`]. The taker
//! submits the order together with this detached signature; the engine
//! recovers the signer and requires it to equal the claimed maker.

use ed25519_dalek::{Signer, SigningKey};
use serde::{Deserialize, Serialize};

use crate::{AccountId, OrderHash};

/// Length of an ed25519 signature in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// A detached signature over an order hash: the signer's public key plus the
/// raw 64-byte ed25519 signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakerSignature {
    /// The account that claims to have produced this signature.
    pub signer: AccountId,
    /// Raw ed25519 signature bytes (64).
    pub bytes: Vec<u8>,
}

impl MakerSignature {
    /// Sign an order hash with the given key. The resulting signature's
    /// `signer` is the key's public half.
    #[must_use]
    pub fn create(key: &SigningKey, hash: &OrderHash) -> Self {
        let sig = key.sign(hash.as_bytes());
        Self {
            signer: AccountId::from_pubkey(key.verifying_key().to_bytes()),
            bytes: sig.to_bytes().to_vec(),
        }
    }

    /// Flip one byte of the signature. Produces a structurally well-formed
    /// signature that must fail verification.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn tampered(&self) -> Self {
        let mut bytes = self.bytes.clone();
        bytes[0] ^= 0x01;
        Self {
            signer: self.signer,
            bytes,
        }
    }
}
