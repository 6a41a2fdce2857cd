use serde::{Deserialize, Serialize};

use crate::types::DAY_SECS;

/// Configuration for a badge registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Grace period in seconds. Governs both renewal eligibility (a new
    /// badge may be issued once remaining clearance drops to this value or
    /// below) and the minimum issuance duration floor (grace + one day).
    pub grace_period_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: DAY_SECS,
        }
    }
}
