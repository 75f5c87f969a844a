//! Configuration for one engine instance.

use serde::{Deserialize, Serialize};

use crate::{AccountId, EngineId};

/// Static configuration of a deployed settlement engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// This deployment's identity, bound into every order hash.
    pub engine_id: EngineId,
    /// The administrator account credited with trading fees.
    pub admin: AccountId,
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl EngineConfig {
    pub fn dummy(admin: AccountId) -> Self {
        Self {
            engine_id: EngineId([0xee; 32]),
            admin,
        }
    }
}
