//! Settlement result returned to the caller after a successful trade.

use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, OrderHash};

/// Everything a successful settlement moved, for the caller's records.
///
/// Amount fields always satisfy `fee == admin_share + referrer_share` and
/// `referrer_share > 0` only when `referrer` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillOutcome {
    /// Identity of the order that was (partially) filled.
    pub order_hash: OrderHash,
    pub maker: AccountId,
    pub taker: AccountId,
    /// Token quantity matched in this settlement.
    pub fill_amount: Amount,
    /// Ether settled for the fill, scaled from the maker's quote.
    pub eth_amount: Amount,
    /// Total trading fee taken from the taker's ether leg.
    pub fee: Amount,
    /// Portion of the fee credited to the administrator.
    pub admin_share: Amount,
    /// Portion of the fee credited to the referrer, zero when none.
    pub referrer_share: Amount,
    /// The effective referrer for this trade, if any.
    pub referrer: Option<AccountId>,
}
