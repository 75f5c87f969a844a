//! Identifiers used throughout Swapmatch.
//!
//! Accounts are raw ed25519 public keys, the same way the engine itself
//! carries a 32-byte deployment identity. Amounts everywhere are integer
//! base units (`u128`), never floating point.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer amount in an asset's base unit (wei for ether, the token's
/// smallest unit otherwise).
pub type Amount = u128;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// A user / trading account: the raw ed25519 public key (32 bytes).
///
/// [`AccountId::ZERO`] is the sentinel "no account" value, used for
/// "no referrer" in trade calls and registry lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// The sentinel account (all zero bytes). Never a valid signer.
    pub const ZERO: Self = Self([0u8; 32]);

    #[must_use]
    pub fn from_pubkey(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether this is the sentinel account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acct:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// Identity of a fungible token contract recognised by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TokenId(pub [u8; 32]);

impl TokenId {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tok:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// EngineId
// ---------------------------------------------------------------------------

/// Identity of one deployed engine instance (32 bytes).
///
/// Mixed into every order hash so a signed order is only valid against the
/// instance it was written for — replaying it against another deployment
/// produces a different hash and fails signature recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineId(pub [u8; 32]);

impl EngineId {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// A custodied asset: the native asset or one fungible token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetId {
    /// The native asset ("ether").
    Ether,
    /// A fungible token, by token identity.
    Token(TokenId),
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ether => write!(f, "ETH"),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}

// ---------------------------------------------------------------------------
// OrderHash
// ---------------------------------------------------------------------------

/// Deterministic identity of one order: SHA-256 over the order's terms plus
/// the engine identity. Two orders differing only by nonce hash differently
/// and carry independent fill state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderHash(pub [u8; 32]);

impl OrderHash {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for OrderHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// BlockHeight
// ---------------------------------------------------------------------------

/// Monotonic chain height, supplied by the execution environment at call
/// time. The engine never reads a clock.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct BlockHeight(pub u64);

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_account_is_sentinel() {
        assert!(AccountId::ZERO.is_zero());
        assert!(!AccountId([1u8; 32]).is_zero());
    }

    #[test]
    fn account_display_prefix() {
        let acct = AccountId([0xab; 32]);
        let s = format!("{acct}");
        assert!(s.starts_with("acct:abab"), "Got: {s}");
    }

    #[test]
    fn asset_display() {
        assert_eq!(format!("{}", AssetId::Ether), "ETH");
        let tok = AssetId::Token(TokenId([0x01; 32]));
        assert!(format!("{tok}").starts_with("tok:0101"));
    }

    #[test]
    fn block_height_ordering() {
        assert!(BlockHeight(5) < BlockHeight(6));
    }

    #[test]
    fn serde_roundtrips() {
        let acct = AccountId([7u8; 32]);
        let json = serde_json::to_string(&acct).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(acct, back);

        let asset = AssetId::Token(TokenId([9u8; 32]));
        let json = serde_json::to_string(&asset).unwrap();
        let back: AssetId = serde_json::from_str(&json).unwrap();
        assert_eq!(asset, back);
    }
}
