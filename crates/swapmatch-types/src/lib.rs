//! # swapmatch-types
//!
//! Shared types, errors, and configuration for the **Swapmatch** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`TokenId`], [`EngineId`], [`AssetId`], [`OrderHash`], [`BlockHeight`]
//! - **Order model**: [`Order`], [`OrderKind`], order hashing
//! - **Signature model**: [`MakerSignature`]
//! - **Settlement result**: [`FillOutcome`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`SwapmatchError`] with `SM_ERR_` prefix codes
//! - **Constants**: fee schedule and system-wide defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod fill;
pub mod ids;
pub mod order;
pub mod signature;

// Re-export all primary types at crate root for ergonomic imports:
//   use swapmatch_types::{Order, OrderKind, AccountId, ...};

pub use config::*;
pub use error::*;
pub use fill::*;
pub use ids::*;
pub use order::*;
pub use signature::*;

// Constants are accessed via `swapmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
