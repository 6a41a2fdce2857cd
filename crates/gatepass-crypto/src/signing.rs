use ed25519_dalek::Signer;
use ed25519_dalek::Verifier;

use gatepass_core::IssuanceGrant;

use crate::error::CryptoError;
use crate::hashing::grant_digest;
use crate::keys::{KeyPair, PublicKey};

/// Ed25519 signature (64 bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    inner: ed25519_dalek::Signature,
}

impl Signature {
    /// Get the raw bytes (64 bytes).
    pub fn to_bytes(&self) -> [u8; 64] {
        self.inner.to_bytes()
    }

    /// Create from raw bytes (64 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let bytes_arr: [u8; 64] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidInput(format!("signature must be 64 bytes, got {}", bytes.len()))
        })?;
        let inner = ed25519_dalek::Signature::from_bytes(&bytes_arr);
        Ok(Self { inner })
    }

    /// Encode as hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Sign a message using Ed25519.
pub fn sign(message: &[u8], keypair: &KeyPair) -> Signature {
    let sig = keypair.signing_key().sign(message);
    Signature { inner: sig }
}

/// Verify an Ed25519 signature.
pub fn verify(message: &[u8], signature: &Signature, pubkey: &PublicKey) -> Result<(), CryptoError> {
    pubkey
        .verifying_key()
        .verify(message, &signature.inner)
        .map_err(|_| CryptoError::SignatureVerificationFailed)
}

/// Sign a grant's digest with the issuer key pair.
pub fn sign_grant(grant: &IssuanceGrant, keypair: &KeyPair) -> Signature {
    let digest = grant_digest(grant);
    sign(&digest, keypair)
}

/// Verify a grant's attached signature against the trusted issuer key.
/// Recomputes the digest from the grant fields, so any altered field fails.
pub fn verify_grant(grant: &IssuanceGrant, issuer_key: &PublicKey) -> Result<(), CryptoError> {
    let digest = grant_digest(grant);
    let sig = Signature::from_bytes(&grant.signature)?;
    verify(&digest, &sig, issuer_key)
}
