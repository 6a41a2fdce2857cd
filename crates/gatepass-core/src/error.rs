/// Core domain errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid account identity: {0}")]
    InvalidIdentity(String),

    #[error("invalid validity window: activation {activation} is not before expiration {expiration}")]
    InvalidWindow { activation: u64, expiration: u64 },
}
