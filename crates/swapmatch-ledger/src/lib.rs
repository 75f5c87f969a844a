//! # swapmatch-ledger
//!
//! **Custodial balance store** for the Swapmatch settlement engine.
//!
//! Tracks per-(account, asset) balances. Funds enter via `deposit`, leave
//! via `withdraw`, and move between accounts only through `transfer` calls
//! issued by the trade executor inside a settlement's atomic boundary.
//!
//! Every mutation is all-or-nothing: a failed check leaves the ledger
//! exactly as it was. The [`SupplyLedger`] cross-checks that
//! `Σ balances == Σ deposits − Σ withdrawals` holds per asset after any
//! sequence of settlements.

pub mod ledger;
pub mod supply;

pub use ledger::Ledger;
pub use supply::SupplyLedger;
