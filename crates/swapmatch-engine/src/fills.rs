//! Per-order fill accounting and cancellation.
//!
//! Fill state is keyed by `(maker, order_hash)` — the hash alone is not
//! enough, since the maker is bound by signature recovery rather than by the
//! hash preimage. Records are created implicitly on first fill, only ever
//! increase, and persist for the engine's lifetime. Cancellation is a
//! separate permanent set: once a hash is cancelled it can never acquire
//! further fill, but fills settled before cancellation stand.

use std::collections::{HashMap, HashSet};

use swapmatch_types::{AccountId, Amount, OrderHash, Result, SwapmatchError};

/// Tracks cumulative fills and cancelled order hashes.
#[derive(Debug, Default)]
pub struct OrderFillRegistry {
    /// Cumulative token amount filled per (maker, order hash).
    filled: HashMap<(AccountId, OrderHash), Amount>,
    /// Order hashes cancelled by their maker. Membership is permanent.
    cancelled: HashSet<OrderHash>,
}

impl OrderFillRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative amount already filled against this order identity.
    #[must_use]
    pub fn filled_amount(&self, maker: AccountId, hash: OrderHash) -> Amount {
        self.filled.get(&(maker, hash)).copied().unwrap_or(0)
    }

    /// Whether this order hash has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self, hash: OrderHash) -> bool {
        self.cancelled.contains(&hash)
    }

    /// Cancel an order hash. Idempotent; cancelling an already-cancelled or
    /// never-seen hash is fine.
    pub fn cancel(&mut self, hash: OrderHash) {
        self.cancelled.insert(hash);
    }

    /// Record a settled fill. The executor clamps `amount` to the order's
    /// remainder first; the cap here is the backstop for the invariant
    /// `cumulative fill <= maker_token_amount`.
    ///
    /// # Errors
    /// Returns `Internal` if the cap would be exceeded — reaching this from
    /// the executor is a bug, not a caller error.
    pub(crate) fn record_fill(
        &mut self,
        maker: AccountId,
        hash: OrderHash,
        amount: Amount,
        maker_token_amount: Amount,
    ) -> Result<()> {
        let entry = self.filled.entry((maker, hash)).or_insert(0);
        let updated = entry
            .checked_add(amount)
            .ok_or(SwapmatchError::AmountOverflow)?;
        if updated > maker_token_amount {
            return Err(SwapmatchError::Internal(format!(
                "fill cap exceeded for order {hash}: {updated} > {maker_token_amount}"
            )));
        }
        *entry = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(byte: u8) -> AccountId {
        AccountId([byte; 32])
    }

    const HASH: OrderHash = OrderHash([0xaa; 32]);

    #[test]
    fn unfilled_order_reads_zero() {
        let fills = OrderFillRegistry::new();
        assert_eq!(fills.filled_amount(acct(1), HASH), 0);
        assert!(!fills.is_cancelled(HASH));
    }

    #[test]
    fn fills_accumulate() {
        let mut fills = OrderFillRegistry::new();
        fills.record_fill(acct(1), HASH, 3, 10).unwrap();
        fills.record_fill(acct(1), HASH, 4, 10).unwrap();
        assert_eq!(fills.filled_amount(acct(1), HASH), 7);
    }

    #[test]
    fn fill_state_keyed_by_maker() {
        let mut fills = OrderFillRegistry::new();
        fills.record_fill(acct(1), HASH, 5, 10).unwrap();
        assert_eq!(fills.filled_amount(acct(2), HASH), 0);
    }

    #[test]
    fn cap_enforced() {
        let mut fills = OrderFillRegistry::new();
        fills.record_fill(acct(1), HASH, 10, 10).unwrap();
        let err = fills.record_fill(acct(1), HASH, 1, 10).unwrap_err();
        assert!(matches!(err, SwapmatchError::Internal(_)));
        assert_eq!(fills.filled_amount(acct(1), HASH), 10);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut fills = OrderFillRegistry::new();
        fills.cancel(HASH);
        fills.cancel(HASH);
        assert!(fills.is_cancelled(HASH));
    }

    #[test]
    fn cancel_does_not_erase_fill_history() {
        let mut fills = OrderFillRegistry::new();
        fills.record_fill(acct(1), HASH, 4, 10).unwrap();
        fills.cancel(HASH);
        assert_eq!(fills.filled_amount(acct(1), HASH), 4);
        assert!(fills.is_cancelled(HASH));
    }
}
