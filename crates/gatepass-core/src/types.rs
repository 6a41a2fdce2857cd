use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Seconds in one day, the base unit of the minimum-duration policy.
pub const DAY_SECS: u64 = 86_400;

/// Address-equivalent identity of an account (32 bytes).
///
/// Derived from an Ed25519 public key by hashing its bytes; the derivation
/// lives in gatepass-crypto so this crate stays signature-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Create from a 32-byte identity value.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice (must be 32 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            CoreError::InvalidIdentity(format!("identity must be 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encode as hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decode from hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| CoreError::InvalidIdentity(format!("invalid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

/// Sequentially assigned badge identifier. IDs start at 0 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BadgeId(pub u64);

impl BadgeId {
    /// The raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "badge-{}", self.0)
    }
}

/// The `[activation, expiration)` interval during which a badge counts
/// toward clearance. Timestamps are Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    /// Start of validity. Informational at issuance time: not checked
    /// against the clock, only against the expiration.
    pub activation: u64,
    /// End of validity.
    pub expiration: u64,
}

impl ValidityWindow {
    /// Create a new window.
    pub fn new(activation: u64, expiration: u64) -> Self {
        Self {
            activation,
            expiration,
        }
    }

    /// Check the window invariant: expiration strictly after activation.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.expiration <= self.activation {
            return Err(CoreError::InvalidWindow {
                activation: self.activation,
                expiration: self.expiration,
            });
        }
        Ok(())
    }

    /// Total length of the window in seconds.
    pub fn duration(&self) -> u64 {
        self.expiration.saturating_sub(self.activation)
    }

    /// Remaining valid time at `now`. Zero for an expired window, never
    /// a negative-equivalent value.
    pub fn remaining_at(&self, now: u64) -> u64 {
        self.expiration.saturating_sub(now)
    }

    /// Whether the window has expired at `now`.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expiration
    }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.activation, self.expiration)
    }
}
