use std::sync::Arc;

use gatepass_core::AccountId;

use crate::error::BadgeError;
use crate::registry::BadgeRegistry;

/// Clearance check consumed by the external value-transfer collaborator.
///
/// Before crediting a recipient, the transfer mechanism asks this gate
/// whether the recipient currently holds any valid badge. Only the
/// recipient is consulted: a holder whose clearance has lapsed may still
/// send outbound, but can no longer receive.
pub struct TransferGate {
    registry: Arc<BadgeRegistry>,
}

impl TransferGate {
    /// Create a gate over the given registry.
    pub fn new(registry: Arc<BadgeRegistry>) -> Self {
        Self { registry }
    }

    /// Authorize crediting `recipient` at time `now`.
    pub fn authorize_credit_at(&self, recipient: &AccountId, now: u64) -> Result<(), BadgeError> {
        if self.registry.is_cleared_at(recipient, now) {
            Ok(())
        } else {
            tracing::debug!(recipient = %recipient, "credit denied: no valid badge");
            Err(BadgeError::AccessDenied(*recipient))
        }
    }

    /// Authorize crediting `recipient` against the wall clock.
    pub fn authorize_credit(&self, recipient: &AccountId) -> Result<(), BadgeError> {
        if self.registry.is_cleared(recipient) {
            Ok(())
        } else {
            tracing::debug!(recipient = %recipient, "credit denied: no valid badge");
            Err(BadgeError::AccessDenied(*recipient))
        }
    }
}
