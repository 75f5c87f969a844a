//! Referrer assignment and taker-history eligibility.
//!
//! A referrer is earned, never configured: the only mutation path is a
//! successful settlement. The first eligible hint a taker trades with
//! becomes its permanent referrer — later hints are ignored. Eligibility
//! requires the hinted account to have completed at least one successful
//! trade as a taker itself, which stops an account from naming a fresh
//! throwaway account (or itself) purely to siphon fees.

use std::collections::{HashMap, HashSet};

use swapmatch_types::AccountId;

/// Tracks per-taker referrer assignment and taker history.
#[derive(Debug, Default)]
pub struct ReferrerRegistry {
    /// Assigned referrer per taker. Write-once.
    referrers: HashMap<AccountId, AccountId>,
    /// Accounts with at least one successful taker trade.
    taker_history: HashSet<AccountId>,
}

impl ReferrerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The taker's assigned referrer, if one was ever earned.
    #[must_use]
    pub fn referrer_of(&self, taker: AccountId) -> Option<AccountId> {
        self.referrers.get(&taker).copied()
    }

    /// Whether the account has completed a successful trade as a taker.
    #[must_use]
    pub fn has_taker_history(&self, account: AccountId) -> bool {
        self.taker_history.contains(&account)
    }

    /// Resolve the effective referrer for a settlement: the sticky
    /// assignment if present, otherwise an eligible hint.
    ///
    /// Returns `(referrer, newly_assigned)`. The caller commits a new
    /// assignment with [`ReferrerRegistry::assign`] only after the
    /// settlement succeeds.
    #[must_use]
    pub(crate) fn resolve(&self, taker: AccountId, hint: AccountId) -> (Option<AccountId>, bool) {
        if let Some(existing) = self.referrer_of(taker) {
            return (Some(existing), false);
        }
        // Self-referral is explicitly excluded; any other account qualifies
        // once it has genuine taker history.
        if !hint.is_zero() && hint != taker && self.has_taker_history(hint) {
            return (Some(hint), true);
        }
        (None, false)
    }

    /// Record a successful taker trade.
    pub(crate) fn record_taker(&mut self, taker: AccountId) {
        self.taker_history.insert(taker);
    }

    /// Assign a referrer. First write wins; a later call for the same taker
    /// changes nothing.
    pub(crate) fn assign(&mut self, taker: AccountId, referrer: AccountId) {
        self.referrers.entry(taker).or_insert(referrer);
    }
}
