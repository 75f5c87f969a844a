//! Supply conservation invariant checker.
//!
//! Invariant enforced for every asset:
//! ```text
//! Σ(account balances) == Σ(deposits) - Σ(withdrawals)
//! ```
//!
//! Trades only move balances between accounts (the fee is redistributed,
//! never destroyed), so the identity must hold after any settlement. A
//! mismatch means a settlement created or destroyed value and the engine
//! must halt.

use std::collections::HashMap;

use swapmatch_types::{Amount, AssetId, Result, SwapmatchError};

/// Tracks per-asset deposit/withdrawal totals and validates conservation.
#[derive(Debug, Default)]
pub struct SupplyLedger {
    /// Total deposits per asset since genesis.
    deposits: HashMap<AssetId, Amount>,
    /// Total withdrawals per asset since genesis.
    withdrawals: HashMap<AssetId, Amount>,
}

impl SupplyLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deposit.
    ///
    /// # Errors
    /// Returns `AmountOverflow` if the running total would overflow; the
    /// total is left unchanged.
    pub fn record_deposit(&mut self, asset: AssetId, amount: Amount) -> Result<()> {
        let total = self.deposits.entry(asset).or_insert(0);
        *total = total
            .checked_add(amount)
            .ok_or(SwapmatchError::AmountOverflow)?;
        Ok(())
    }

    /// Record a withdrawal.
    pub fn record_withdrawal(&mut self, asset: AssetId, amount: Amount) -> Result<()> {
        let total = self.withdrawals.entry(asset).or_insert(0);
        *total = total
            .checked_add(amount)
            .ok_or(SwapmatchError::AmountOverflow)?;
        Ok(())
    }

    /// Expected total supply for an asset: deposits - withdrawals.
    /// Withdrawals can never exceed deposits because every withdrawal is
    /// balance-checked first.
    #[must_use]
    pub fn expected_supply(&self, asset: AssetId) -> Amount {
        let deposited = self.deposits.get(&asset).copied().unwrap_or(0);
        let withdrawn = self.withdrawals.get(&asset).copied().unwrap_or(0);
        deposited.saturating_sub(withdrawn)
    }

    /// Verify that the actual balance total matches the expected supply.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` on mismatch.
    pub fn verify(&self, asset: AssetId, actual: Amount) -> Result<()> {
        let expected = self.expected_supply(asset);
        if actual != expected {
            return Err(SwapmatchError::SupplyInvariantViolation {
                reason: format!("asset {asset}: expected supply {expected}, found {actual}"),
            });
        }
        Ok(())
    }
}
