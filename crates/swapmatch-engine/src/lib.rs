//! # swapmatch-engine
//!
//! **Trade settlement core**: signature authorization, fill computation,
//! fee distribution, and the order-lifecycle registries.
//!
//! ## Settlement flow
//!
//! ```text
//! settle_trade(order, sig, taker, requested, hint, height)
//!   → hash order → cancelled? expired? signer == maker?
//!   → remaining = maker_token_amount - filled    (reject if 0)
//!   → fill = min(requested, remaining)           (reject if 0)
//!   → eth  = floor(maker_eth * fill / maker_tokens)
//!   → fee  = floor(eth * 3 / 1000), taker-borne
//!   → pre-check both debit legs, then move balances via Ledger
//!   → record fill, taker history, sticky referrer
//! ```
//!
//! Exactly one signed order is evaluated per call; settlements are strictly
//! sequential and each call is an all-or-nothing unit. A rejected settlement
//! changes nothing — the caller resubmits with a new nonce or amount at its
//! own discretion.

pub mod executor;
pub mod fills;
pub mod referrers;
pub mod signature;

pub use executor::TradeExecutor;
pub use fills::OrderFillRegistry;
pub use referrers::ReferrerRegistry;
pub use signature::recover_signer;
