use gatepass_core::IssuanceGrant;

/// BLAKE3 hash (32 bytes).
pub type Hash = [u8; 32];

/// Hash arbitrary data using BLAKE3.
pub fn hash(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}

/// Digest of a grant's canonical signing payload. This is the message the
/// trusted issuer signs and the registry verifies.
pub fn grant_digest(grant: &IssuanceGrant) -> Hash {
    hash(&grant.signing_payload())
}
