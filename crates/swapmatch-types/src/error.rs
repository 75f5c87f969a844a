//! Error types for the Swapmatch settlement engine.
//!
//! All errors use the `SM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order lifecycle errors
//! - 2xx: Balance / ledger errors
//! - 3xx: Signature errors
//! - 9xx: General / internal errors
//!
//! Every error is terminal to the attempted operation: a rejected settlement
//! leaves no partial state behind, and the caller decides whether to resubmit
//! with adjusted parameters.

use thiserror::Error;

use crate::{Amount, BlockHeight, OrderHash};

/// Central error enum for all Swapmatch operations.
#[derive(Debug, Error)]
pub enum SwapmatchError {
    // =================================================================
    // Order Lifecycle Errors (1xx)
    // =================================================================
    /// The order's expiry height is behind the current chain height.
    #[error("SM_ERR_100: Order expired at {expires}, current {current}")]
    OrderExpired {
        expires: BlockHeight,
        current: BlockHeight,
    },

    /// The order hash was cancelled by its maker.
    #[error("SM_ERR_101: Order cancelled: {0}")]
    OrderCancelled(OrderHash),

    /// The order has no fillable remainder.
    #[error("SM_ERR_102: Order fully filled: {0}")]
    OrderFullyFilled(OrderHash),

    /// The computed fill amount is zero.
    #[error("SM_ERR_103: Zero fill amount for order {0}")]
    ZeroFill(OrderHash),

    /// The order failed structural validation (zero amounts, etc.).
    #[error("SM_ERR_104: Invalid order: {reason}")]
    InvalidOrder { reason: String },

    // =================================================================
    // Balance / Ledger Errors (2xx)
    // =================================================================
    /// A required balance deduction would go negative.
    #[error("SM_ERR_200: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// An amount computation overflowed the 128-bit base-unit range.
    #[error("SM_ERR_201: Amount overflow")]
    AmountOverflow,

    /// Supply conservation invariant violated — critical safety alert.
    #[error("SM_ERR_202: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // Signature Errors (3xx)
    // =================================================================
    /// The signature is malformed, does not verify, or the recovered
    /// signer does not match the claimed maker.
    #[error("SM_ERR_300: Invalid signature: {reason}")]
    InvalidSignature { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SM_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SwapmatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = SwapmatchError::OrderCancelled(OrderHash([0u8; 32]));
        let msg = format!("{err}");
        assert!(msg.starts_with("SM_ERR_101"), "Got: {msg}");
    }

    #[test]
    fn insufficient_balance_display() {
        let err = SwapmatchError::InsufficientBalance {
            needed: 100,
            available: 50,
        };
        let msg = format!("{err}");
        assert!(msg.contains("SM_ERR_200"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn order_expired_display() {
        let err = SwapmatchError::OrderExpired {
            expires: BlockHeight(10),
            current: BlockHeight(11),
        };
        let msg = format!("{err}");
        assert!(msg.contains("SM_ERR_100"));
        assert!(msg.contains("block:10"));
        assert!(msg.contains("block:11"));
    }

    #[test]
    fn all_errors_have_sm_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(SwapmatchError::OrderFullyFilled(OrderHash([1u8; 32]))),
            Box::new(SwapmatchError::ZeroFill(OrderHash([2u8; 32]))),
            Box::new(SwapmatchError::AmountOverflow),
            Box::new(SwapmatchError::InvalidSignature {
                reason: "test".into(),
            }),
            Box::new(SwapmatchError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("SM_ERR_"),
                "Error missing SM_ERR_ prefix: {msg}"
            );
        }
    }
}
