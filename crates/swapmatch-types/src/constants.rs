//! System-wide constants for the Swapmatch settlement engine.

use crate::Amount;

/// Trading fee numerator: fee = eth_amount * 3 / 1000 (0.3%).
pub const FEE_NUMERATOR: Amount = 3;

/// Trading fee denominator.
pub const FEE_DENOMINATOR: Amount = 1000;

/// Referrer share divisor: referrer_share = fee / 2, admin keeps the rest
/// (including the truncation remainder).
pub const REFERRER_SHARE_DIVISOR: Amount = 2;

/// Domain-separation tag prepended to every order hash preimage.
pub const ORDER_HASH_DOMAIN: &[u8] = b"swapmatch:order:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Swapmatch";
