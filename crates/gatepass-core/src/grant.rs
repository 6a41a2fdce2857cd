use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{AccountId, ValidityWindow};

/// Domain separation tag bound into every grant payload. Signatures over a
/// grant can never be replayed in another signing context.
const DOMAIN_TAG: &[u8] = b"gatepass.grant";

/// Canonical grant encoding version.
const GRANT_VERSION: u8 = 1;

/// An off-system issuance authorization, produced by the holder of the
/// trusted issuer key and submitted by the requester.
///
/// Every field is bound into the canonical signing payload, so a signature
/// cannot be replayed against a different recipient, nonce, or time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceGrant {
    /// Identity the issuance is attributed to; its nonce is consumed.
    pub requester: AccountId,
    /// Identity that receives the badge.
    pub recipient: AccountId,
    /// The requester's expected nonce at submission time.
    pub nonce: u64,
    /// Badge validity window.
    pub window: ValidityWindow,
    /// Ed25519 signature over the grant digest (64 bytes once signed).
    pub signature: Vec<u8>,
}

impl IssuanceGrant {
    /// Create a new GrantBuilder.
    pub fn builder() -> GrantBuilder {
        GrantBuilder::default()
    }

    /// Validate the grant's structural invariants.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.window.validate()
    }

    /// Compute the canonical signing payload.
    ///
    /// Fixed-width big-endian encoding: domain tag, version byte, requester
    /// (32 bytes), recipient (32 bytes), nonce, activation, expiration.
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(DOMAIN_TAG.len() + 1 + 32 + 32 + 8 + 8 + 8);
        payload.extend_from_slice(DOMAIN_TAG);
        payload.push(GRANT_VERSION);
        payload.extend_from_slice(self.requester.as_bytes());
        payload.extend_from_slice(self.recipient.as_bytes());
        payload.extend_from_slice(&self.nonce.to_be_bytes());
        payload.extend_from_slice(&self.window.activation.to_be_bytes());
        payload.extend_from_slice(&self.window.expiration.to_be_bytes());
        payload
    }
}

/// Builder for constructing IssuanceGrant instances.
#[derive(Default)]
pub struct GrantBuilder {
    requester: Option<AccountId>,
    recipient: Option<AccountId>,
    nonce: u64,
    window: Option<ValidityWindow>,
}

impl GrantBuilder {
    /// Set the requester identity.
    pub fn requester(mut self, id: AccountId) -> Self {
        self.requester = Some(id);
        self
    }

    /// Set the recipient identity.
    pub fn recipient(mut self, id: AccountId) -> Self {
        self.recipient = Some(id);
        self
    }

    /// Set the requester nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Set the validity window.
    pub fn window(mut self, activation: u64, expiration: u64) -> Self {
        self.window = Some(ValidityWindow::new(activation, expiration));
        self
    }

    /// Build the grant, unsigned. Attach the signature after signing the
    /// grant digest.
    pub fn build(self) -> Result<IssuanceGrant, CoreError> {
        let requester = self
            .requester
            .ok_or_else(|| CoreError::MissingField("requester".into()))?;
        let recipient = self
            .recipient
            .ok_or_else(|| CoreError::MissingField("recipient".into()))?;
        let window = self
            .window
            .ok_or_else(|| CoreError::MissingField("window".into()))?;

        let grant = IssuanceGrant {
            requester,
            recipient,
            nonce: self.nonce,
            window,
            signature: Vec::new(),
        };
        grant.validate()?;
        Ok(grant)
    }
}
