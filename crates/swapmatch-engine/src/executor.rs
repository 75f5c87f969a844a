//! One-order-at-a-time trade settlement.
//!
//! The executor owns the engine's entire mutable state — ledger, fill
//! registry, referrer registry — so a settlement is a single `&mut self`
//! call with nothing interleaved. Validation happens first and touches
//! nothing; both debit legs are then pre-checked before the first balance
//! moves, which makes the whole settlement all-or-nothing.

use swapmatch_ledger::Ledger;
use swapmatch_types::{
    AccountId, Amount, AssetId, BlockHeight, EngineConfig, FillOutcome, MakerSignature, Order,
    OrderHash, OrderKind, Result, SwapmatchError, constants,
};

use crate::fills::OrderFillRegistry;
use crate::referrers::ReferrerRegistry;
use crate::signature::recover_signer;

/// Orchestrates trade settlement against injected state.
pub struct TradeExecutor {
    config: EngineConfig,
    ledger: Ledger,
    fills: OrderFillRegistry,
    referrers: ReferrerRegistry,
}

impl TradeExecutor {
    /// Create an executor with empty state for the given deployment.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ledger: Ledger::new(),
            fills: OrderFillRegistry::new(),
            referrers: ReferrerRegistry::new(),
        }
    }

    // ------------------------------------------------------------------
    // Ledger entry points (client layer, outside of trading)
    // ------------------------------------------------------------------

    pub fn deposit(&mut self, account: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        self.ledger.deposit(account, asset, amount)
    }

    pub fn withdraw(&mut self, account: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        self.ledger.withdraw(account, asset, amount)
    }

    // ------------------------------------------------------------------
    // Read-only queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn balance_of(&self, account: AccountId, asset: AssetId) -> Amount {
        self.ledger.balance_of(account, asset)
    }

    #[must_use]
    pub fn filled_amount(&self, maker: AccountId, hash: OrderHash) -> Amount {
        self.fills.filled_amount(maker, hash)
    }

    #[must_use]
    pub fn is_cancelled(&self, hash: OrderHash) -> bool {
        self.fills.is_cancelled(hash)
    }

    #[must_use]
    pub fn referrer_of(&self, taker: AccountId) -> Option<AccountId> {
        self.referrers.referrer_of(taker)
    }

    #[must_use]
    pub fn total_supply(&self, asset: AssetId) -> Amount {
        self.ledger.total_supply(asset)
    }

    /// Check the per-asset supply conservation invariant.
    pub fn verify_supply(&self, asset: AssetId) -> Result<()> {
        self.ledger.verify_supply(asset)
    }

    /// The identity an order has against this deployment.
    #[must_use]
    pub fn order_hash(&self, order: &Order) -> OrderHash {
        order.hash(self.config.engine_id)
    }

    // ------------------------------------------------------------------
    // Order lifecycle
    // ------------------------------------------------------------------

    /// Cancel an order hash on behalf of its maker. Idempotent; blocks all
    /// future fills against the hash without reversing settled ones.
    ///
    /// Caller identity is authenticated at the transport boundary — `maker`
    /// is recorded here for the audit trail, not re-derived.
    pub fn cancel_order(&mut self, maker: AccountId, order_hash: OrderHash) -> Result<()> {
        self.fills.cancel(order_hash);
        tracing::info!(%maker, order = %order_hash, "Order cancelled");
        Ok(())
    }

    /// Settle one signed order against the taker's request.
    ///
    /// Validation order (each failure aborts with no state change):
    /// cancelled, expired, signature/maker mismatch, fully filled, zero
    /// fill, insufficient balance on either debit leg.
    ///
    /// # Errors
    /// One of the terminal [`SwapmatchError`] settlement kinds; the engine
    /// never retries internally.
    pub fn settle_trade(
        &mut self,
        order: &Order,
        signature: &MakerSignature,
        taker: AccountId,
        requested_taker_token_amount: Amount,
        referrer_hint: AccountId,
        current_height: BlockHeight,
    ) -> Result<FillOutcome> {
        if order.maker_token_amount == 0 || order.maker_eth_amount == 0 {
            return Err(SwapmatchError::InvalidOrder {
                reason: "maker token and eth amounts must be positive".into(),
            });
        }

        let hash = order.hash(self.config.engine_id);
        if self.fills.is_cancelled(hash) {
            return Err(SwapmatchError::OrderCancelled(hash));
        }
        if order.is_expired_at(current_height) {
            return Err(SwapmatchError::OrderExpired {
                expires: order.expires_at_block,
                current: current_height,
            });
        }
        let signer = recover_signer(&hash, signature)?;
        if signer != order.maker {
            return Err(SwapmatchError::InvalidSignature {
                reason: format!("recovered {signer}, order claims maker {}", order.maker),
            });
        }

        let already_filled = self.fills.filled_amount(order.maker, hash);
        let remaining = order.maker_token_amount - already_filled;
        if remaining == 0 {
            return Err(SwapmatchError::OrderFullyFilled(hash));
        }
        let fill_amount = requested_taker_token_amount.min(remaining);
        if fill_amount == 0 {
            return Err(SwapmatchError::ZeroFill(hash));
        }

        let eth_amount =
            proportional_eth(order.maker_eth_amount, fill_amount, order.maker_token_amount)?;
        let fee = trading_fee(eth_amount)?;

        // Referrer resolution reads pre-trade state; the assignment is
        // committed only after the balance moves succeed.
        let (referrer, newly_assigned) = self.referrers.resolve(taker, referrer_hint);
        if referrer.is_none() && !referrer_hint.is_zero() {
            tracing::warn!(%taker, hint = %referrer_hint, "Referrer hint ignored: no taker history");
        }
        let referrer_share = referrer.map_or(0, |_| fee / constants::REFERRER_SHARE_DIVISOR);
        let admin_share = fee - referrer_share;

        let token = AssetId::Token(order.token);
        let maker = order.maker;

        // Pre-flight both debit legs so the settlement is all-or-nothing.
        match order.kind {
            OrderKind::BuyTokens => {
                self.ledger.require(maker, AssetId::Ether, eth_amount)?;
                self.ledger.require(taker, token, fill_amount)?;
            }
            OrderKind::SellTokens => {
                let taker_eth_leg = eth_amount
                    .checked_add(fee)
                    .ok_or(SwapmatchError::AmountOverflow)?;
                self.ledger.require(taker, AssetId::Ether, taker_eth_leg)?;
                self.ledger.require(maker, token, fill_amount)?;
            }
        }

        // Move the ether and token legs. The fee always comes out of the
        // taker side: netted from the taker's receipt when receiving ether,
        // paid on top when paying ether.
        match order.kind {
            OrderKind::BuyTokens => {
                self.ledger.transfer(maker, taker, AssetId::Ether, eth_amount)?;
                self.ledger.transfer(taker, maker, token, fill_amount)?;
            }
            OrderKind::SellTokens => {
                self.ledger.transfer(taker, maker, AssetId::Ether, eth_amount)?;
                self.ledger.transfer(maker, taker, token, fill_amount)?;
            }
        }
        self.ledger
            .transfer(taker, self.config.admin, AssetId::Ether, admin_share)?;
        if let Some(referrer) = referrer {
            self.ledger
                .transfer(taker, referrer, AssetId::Ether, referrer_share)?;
        }

        // Post-state updates, only on success.
        self.fills
            .record_fill(maker, hash, fill_amount, order.maker_token_amount)?;
        self.referrers.record_taker(taker);
        if newly_assigned {
            if let Some(referrer) = referrer {
                self.referrers.assign(taker, referrer);
            }
        }

        let referrer_field = referrer.map_or_else(|| "none".to_string(), |r| r.to_string());
        tracing::info!(
            order = %hash,
            kind = %order.kind,
            %maker,
            %taker,
            fill = fill_amount,
            eth = eth_amount,
            fee,
            referrer = %referrer_field,
            "Trade settled"
        );

        Ok(FillOutcome {
            order_hash: hash,
            maker,
            taker,
            fill_amount,
            eth_amount,
            fee,
            admin_share,
            referrer_share,
            referrer,
        })
    }
}

/// Ether owed for a partial fill: `floor(maker_eth * fill / maker_tokens)`.
/// Floor division is authoritative — the truncation residue is absorbed by
/// the maker side, never double-charged to the taker.
fn proportional_eth(maker_eth: Amount, fill: Amount, maker_tokens: Amount) -> Result<Amount> {
    let scaled = maker_eth
        .checked_mul(fill)
        .ok_or(SwapmatchError::AmountOverflow)?;
    Ok(scaled / maker_tokens)
}

/// Trading fee on the ether leg: `floor(eth * 3 / 1000)` (0.3%).
fn trading_fee(eth_amount: Amount) -> Result<Amount> {
    let scaled = eth_amount
        .checked_mul(constants::FEE_NUMERATOR)
        .ok_or(SwapmatchError::AmountOverflow)?;
    Ok(scaled / constants::FEE_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_eth_exact_half() {
        // Half the tokens settle at exactly half the quote.
        assert_eq!(proportional_eth(3_000, 3_500, 7_000).unwrap(), 1_500);
    }

    #[test]
    fn proportional_eth_floors_inexact_ratios() {
        // 10 eth-units quoted over 3 tokens: fills of 1 and 2 truncate.
        assert_eq!(proportional_eth(10, 1, 3).unwrap(), 3);
        assert_eq!(proportional_eth(10, 2, 3).unwrap(), 6);
        assert_eq!(proportional_eth(10, 3, 3).unwrap(), 10);
    }

    #[test]
    fn proportional_eth_overflow_rejected() {
        let err = proportional_eth(Amount::MAX, 2, 3).unwrap_err();
        assert!(matches!(err, SwapmatchError::AmountOverflow));
    }

    #[test]
    fn trading_fee_is_three_permille_floored() {
        assert_eq!(trading_fee(1_000).unwrap(), 3);
        assert_eq!(trading_fee(999).unwrap(), 2);
        assert_eq!(trading_fee(333).unwrap(), 0);
        assert_eq!(trading_fee(3_000_000_000_000_000).unwrap(), 9_000_000_000_000);
    }
}
