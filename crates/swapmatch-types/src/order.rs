//! Order model and order hashing.
//!
//! An order is a value object — the engine never stores it. Its identity is
//! the [`OrderHash`] derived from its terms plus the engine identity, and all
//! per-order state (cumulative fill, cancellation) is keyed by that hash.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{AccountId, Amount, BlockHeight, EngineId, OrderHash, TokenId, constants};

/// What the maker wants to do with the token side of the pair.
///
/// Wire bytes are fixed (SELL=1, BUY=2) and take part in the order hash;
/// changing them would invalidate every outstanding signed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderKind {
    /// Maker sells tokens for ether.
    SellTokens,
    /// Maker buys tokens with ether.
    BuyTokens,
}

impl OrderKind {
    /// Fixed byte used in the order-hash preimage.
    #[must_use]
    pub fn wire_byte(self) -> u8 {
        match self {
            Self::SellTokens => 1,
            Self::BuyTokens => 2,
        }
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SellTokens => write!(f, "SELL_TOKENS"),
            Self::BuyTokens => write!(f, "BUY_TOKENS"),
        }
    }
}

/// A fully-specified maker order, authorized by a detached signature over
/// its hash. The maker account is *not* part of the hash — fill state is
/// keyed by `(maker, hash)` instead, which is how signature recovery binds
/// the order to its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Account that authored and signed this order.
    pub maker: AccountId,
    pub kind: OrderKind,
    /// The token being traded against ether.
    pub token: TokenId,
    /// Total token quantity the maker offers to trade. Must be > 0.
    pub maker_token_amount: Amount,
    /// Ether quoted for the full token quantity. Must be > 0.
    pub maker_eth_amount: Amount,
    /// Last chain height at which the order is still fillable.
    pub expires_at_block: BlockHeight,
    /// Caller-chosen discriminator. Reissuing "the same" order with a fresh
    /// nonce yields an independent order hash with zero fill.
    pub nonce: u64,
}

impl Order {
    /// Deterministic order identity: SHA-256 over the domain tag, the engine
    /// identity, and the order's terms in fixed little-endian layout.
    #[must_use]
    pub fn hash(&self, engine: EngineId) -> OrderHash {
        let mut hasher = Sha256::new();
        hasher.update(constants::ORDER_HASH_DOMAIN);
        hasher.update(engine.as_bytes());
        hasher.update([self.kind.wire_byte()]);
        hasher.update(self.token.as_bytes());
        hasher.update(self.maker_token_amount.to_le_bytes());
        hasher.update(self.maker_eth_amount.to_le_bytes());
        hasher.update(self.expires_at_block.0.to_le_bytes());
        hasher.update(self.nonce.to_le_bytes());
        OrderHash(hasher.finalize().into())
    }

    /// Whether the order is past its expiry at the given height.
    #[must_use]
    pub fn is_expired_at(&self, current: BlockHeight) -> bool {
        current > self.expires_at_block
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(maker: AccountId, kind: OrderKind, token_amount: Amount, eth_amount: Amount) -> Self {
        Self {
            maker,
            kind,
            token: TokenId([0x11; 32]),
            maker_token_amount: token_amount,
            maker_eth_amount: eth_amount,
            expires_at_block: BlockHeight(10_000),
            nonce: 1,
        }
    }
}
