//! Per-(account, asset) custodial balance store.

use std::collections::HashMap;

use swapmatch_types::{AccountId, Amount, AssetId, Result, SwapmatchError};

use crate::supply::SupplyLedger;

/// The source of truth for all custodial balances.
///
/// The trade executor is the only caller of [`Ledger::transfer`]; deposits
/// and withdrawals come from the client layer outside of trading. Balances
/// are plain unsigned integers — an operation that would go negative is
/// rejected up front, never wrapped.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Per-(account, asset) balances. Absent entry == zero.
    balances: HashMap<(AccountId, AssetId), Amount>,
    /// Deposit/withdrawal totals for conservation checking.
    supply: SupplyLedger,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit deposited funds to an account.
    ///
    /// # Errors
    /// Returns `AmountOverflow` if the account balance or the supply total
    /// would overflow; nothing is applied.
    pub fn deposit(&mut self, account: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        let current = self.balance_of(account, asset);
        let updated = current
            .checked_add(amount)
            .ok_or(SwapmatchError::AmountOverflow)?;
        self.supply.record_deposit(asset, amount)?;
        self.balances.insert((account, asset), updated);
        tracing::debug!(%account, %asset, amount, "Deposit credited");
        Ok(())
    }

    /// Debit withdrawn funds from an account.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if the account holds less than `amount`.
    pub fn withdraw(&mut self, account: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        let current = self.balance_of(account, asset);
        if current < amount {
            return Err(SwapmatchError::InsufficientBalance {
                needed: amount,
                available: current,
            });
        }
        self.supply.record_withdrawal(asset, amount)?;
        self.balances.insert((account, asset), current - amount);
        tracing::debug!(%account, %asset, amount, "Withdrawal debited");
        Ok(())
    }

    /// Current balance of an account in an asset. Unknown pairs are zero.
    #[must_use]
    pub fn balance_of(&self, account: AccountId, asset: AssetId) -> Amount {
        self.balances.get(&(account, asset)).copied().unwrap_or(0)
    }

    /// Pre-flight check that `account` can cover a debit of `needed`.
    ///
    /// The executor runs this for every debit leg of a settlement before
    /// mutating anything, which is what makes a settlement all-or-nothing.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` without touching any state.
    pub fn require(&self, account: AccountId, asset: AssetId, needed: Amount) -> Result<()> {
        let available = self.balance_of(account, asset);
        if available < needed {
            return Err(SwapmatchError::InsufficientBalance { needed, available });
        }
        Ok(())
    }

    /// Move `amount` of `asset` between two accounts. A self-transfer is a
    /// balance-checked no-op.
    ///
    /// # Errors
    /// `InsufficientBalance` if `from` holds less than `amount`;
    /// `AmountOverflow` if the receiving balance would overflow. Either way
    /// no balance changes.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<()> {
        let from_balance = self.balance_of(from, asset);
        if from_balance < amount {
            return Err(SwapmatchError::InsufficientBalance {
                needed: amount,
                available: from_balance,
            });
        }
        if from == to {
            return Ok(());
        }
        let to_balance = self.balance_of(to, asset);
        let to_updated = to_balance
            .checked_add(amount)
            .ok_or(SwapmatchError::AmountOverflow)?;
        self.balances.insert((from, asset), from_balance - amount);
        self.balances.insert((to, asset), to_updated);
        Ok(())
    }

    /// Total of all account balances in an asset.
    #[must_use]
    pub fn total_supply(&self, asset: AssetId) -> Amount {
        self.balances
            .iter()
            .filter(|((_, a), _)| *a == asset)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Check the supply conservation invariant for an asset.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if balances drifted from the
    /// deposit/withdrawal totals.
    pub fn verify_supply(&self, asset: AssetId) -> Result<()> {
        self.supply.verify(asset, self.total_supply(asset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapmatch_types::TokenId;

    const TOKEN: AssetId = AssetId::Token(TokenId([0x11; 32]));

    fn acct(byte: u8) -> AccountId {
        AccountId([byte; 32])
    }

    #[test]
    fn deposit_then_balance() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, 1_000).unwrap();
        assert_eq!(ledger.balance_of(acct(1), AssetId::Ether), 1_000);
        assert_eq!(ledger.balance_of(acct(1), TOKEN), 0);
    }

    #[test]
    fn withdraw_reduces_balance() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), TOKEN, 700).unwrap();
        ledger.withdraw(acct(1), TOKEN, 300).unwrap();
        assert_eq!(ledger.balance_of(acct(1), TOKEN), 400);
    }

    #[test]
    fn withdraw_more_than_balance_fails() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, 100).unwrap();
        let err = ledger.withdraw(acct(1), AssetId::Ether, 200).unwrap_err();
        assert!(matches!(
            err,
            SwapmatchError::InsufficientBalance {
                needed: 200,
                available: 100
            }
        ));
        // Balance unchanged.
        assert_eq!(ledger.balance_of(acct(1), AssetId::Ether), 100);
    }

    #[test]
    fn transfer_moves_funds() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, 1_000).unwrap();
        ledger
            .transfer(acct(1), acct(2), AssetId::Ether, 400)
            .unwrap();
        assert_eq!(ledger.balance_of(acct(1), AssetId::Ether), 600);
        assert_eq!(ledger.balance_of(acct(2), AssetId::Ether), 400);
    }

    #[test]
    fn transfer_insufficient_fails_cleanly() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, 100).unwrap();
        let err = ledger
            .transfer(acct(1), acct(2), AssetId::Ether, 101)
            .unwrap_err();
        assert!(matches!(err, SwapmatchError::InsufficientBalance { .. }));
        assert_eq!(ledger.balance_of(acct(1), AssetId::Ether), 100);
        assert_eq!(ledger.balance_of(acct(2), AssetId::Ether), 0);
    }

    #[test]
    fn self_transfer_is_noop() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, 100).unwrap();
        ledger
            .transfer(acct(1), acct(1), AssetId::Ether, 100)
            .unwrap();
        assert_eq!(ledger.balance_of(acct(1), AssetId::Ether), 100);
    }

    #[test]
    fn require_checks_without_mutating() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), TOKEN, 50).unwrap();
        assert!(ledger.require(acct(1), TOKEN, 50).is_ok());
        assert!(ledger.require(acct(1), TOKEN, 51).is_err());
        assert_eq!(ledger.balance_of(acct(1), TOKEN), 50);
    }

    #[test]
    fn total_supply_sums_accounts_per_asset() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, 1_000).unwrap();
        ledger.deposit(acct(2), AssetId::Ether, 500).unwrap();
        ledger.deposit(acct(2), TOKEN, 7).unwrap();
        assert_eq!(ledger.total_supply(AssetId::Ether), 1_500);
        assert_eq!(ledger.total_supply(TOKEN), 7);
    }

    #[test]
    fn supply_conserved_through_transfers() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, 1_000).unwrap();
        ledger.deposit(acct(2), AssetId::Ether, 200).unwrap();
        ledger
            .transfer(acct(1), acct(2), AssetId::Ether, 999)
            .unwrap();
        ledger.withdraw(acct(2), AssetId::Ether, 150).unwrap();
        ledger.verify_supply(AssetId::Ether).unwrap();
    }

    #[test]
    fn deposit_overflow_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger.deposit(acct(1), AssetId::Ether, Amount::MAX).unwrap();
        let err = ledger.deposit(acct(1), AssetId::Ether, 1).unwrap_err();
        assert!(matches!(err, SwapmatchError::AmountOverflow));
        assert_eq!(ledger.balance_of(acct(1), AssetId::Ether), Amount::MAX);
        ledger.verify_supply(AssetId::Ether).unwrap();
    }
}
