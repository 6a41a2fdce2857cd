use gatepass_core::{AccountId, BadgeId};

/// Badge service errors. Every variant is a caller-facing rejection of the
/// specific call; none are fatal and none are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("invalid signature: grant does not verify against the trusted issuer key")]
    InvalidSignature,

    #[error("invalid nonce: expected {expected}, got {got}")]
    InvalidNonce { expected: u64, got: u64 },

    #[error("overlap not allowed: remaining clearance of {remaining}s exceeds grace period of {grace}s")]
    OverlapNotAllowed { remaining: u64, grace: u64 },

    #[error("duration too short: window of {got}s is below the minimum of {minimum}s")]
    DurationTooShort { minimum: u64, got: u64 },

    #[error("unauthorized: administrative capability required")]
    Unauthorized,

    #[error("access denied: {0} holds no valid badge")]
    AccessDenied(AccountId),

    #[error("unknown badge: {0}")]
    UnknownBadge(BadgeId),

    #[error("{account} does not own {badge}")]
    NotOwner { account: AccountId, badge: BadgeId },
}
