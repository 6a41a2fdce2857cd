//! Integration test: Full issuance lifecycle across crates.
//!
//! Drives the issuer → registry → gate flow using gatepass-core,
//! gatepass-crypto, and gatepass-badges together.

use std::sync::Arc;

use gatepass_badges::{BadgeError, BadgeRegistry, TransferGate};
use gatepass_core::{AccountId, BadgeId, IssuanceGrant, RegistryConfig, DAY_SECS};
use gatepass_crypto::{sign_grant, KeyPair};

const T0: u64 = 1_700_000_000;

/// Helper: registry with a one-day grace period and a deterministic issuer.
fn create_registry() -> (Arc<BadgeRegistry>, KeyPair) {
    let issuer = KeyPair::from_seed(&[7u8; 32]);
    let admin = AccountId::new([0xAD; 32]);
    let registry = Arc::new(BadgeRegistry::new(
        admin,
        issuer.public_key(),
        RegistryConfig {
            grace_period_secs: DAY_SECS,
        },
    ));
    (registry, issuer)
}

/// Helper: build and sign a grant.
fn grant(
    issuer: &KeyPair,
    requester: AccountId,
    recipient: AccountId,
    nonce: u64,
    activation: u64,
    expiration: u64,
) -> IssuanceGrant {
    let mut grant = IssuanceGrant::builder()
        .requester(requester)
        .recipient(recipient)
        .nonce(nonce)
        .window(activation, expiration)
        .build()
        .expect("grant should build");
    grant.signature = sign_grant(&grant, issuer).to_bytes().to_vec();
    grant
}

// =========================================================================
// End-to-end renewal scenario: issue, blocked overlap, grace-window renewal
// =========================================================================

#[test]
fn test_end_to_end_renewal_scenario() {
    let (registry, issuer) = create_registry();
    let gate = TransferGate::new(Arc::clone(&registry));
    let a = AccountId::new([1u8; 32]);

    // Issue badge 0: two-day window starting now
    let g0 = grant(&issuer, a, a, 0, T0, T0 + 2 * DAY_SECS);
    assert_eq!(registry.issue_at(&g0, T0).unwrap(), BadgeId(0));
    assert!(gate.authorize_credit_at(&a, T0).is_ok());

    // Immediate renewal attempt: ~2 days of clearance left, above the
    // one-day grace, so overlap is rejected
    let early = grant(&issuer, a, a, 1, T0, T0 + 4 * DAY_SECS);
    assert!(matches!(
        registry.issue_at(&early, T0),
        Err(BadgeError::OverlapNotAllowed { .. })
    ));

    // 1.1 days later: 0.9 days left, inside the grace window
    let t1 = T0 + DAY_SECS + DAY_SECS / 10;
    assert!(registry.remaining_for_account_at(&a, t1) <= DAY_SECS);
    assert!(gate.authorize_credit_at(&a, t1).is_ok());

    let g1 = grant(&issuer, a, a, 1, t1, t1 + 2 * DAY_SECS);
    assert_eq!(registry.issue_at(&g1, t1).unwrap(), BadgeId(1));
    assert_eq!(registry.badges_of(&a), vec![BadgeId(0), BadgeId(1)]);

    // Cleared continuously until the later expiration passes
    assert!(gate.authorize_credit_at(&a, T0 + 2 * DAY_SECS).is_ok());
    assert!(gate.authorize_credit_at(&a, t1 + 2 * DAY_SECS - 1).is_ok());
    assert!(matches!(
        gate.authorize_credit_at(&a, t1 + 2 * DAY_SECS),
        Err(BadgeError::AccessDenied(_))
    ));
}

// =========================================================================
// Nonce sequencing across many issuances
// =========================================================================

#[test]
fn test_nonce_sequence_has_no_gaps_or_repeats() {
    let (registry, issuer) = create_registry();
    let requester = AccountId::new([1u8; 32]);

    // One requester obtains badges for many distinct recipients; the
    // accepted nonces form 0, 1, 2, ... with no gaps
    for (i, tag) in (10u8..15).enumerate() {
        let recipient = AccountId::new([tag; 32]);
        assert_eq!(registry.nonce_of(&requester), i as u64);
        let g = grant(
            &issuer,
            requester,
            recipient,
            i as u64,
            T0,
            T0 + 2 * DAY_SECS,
        );
        registry.issue_at(&g, T0).unwrap();
    }
    assert_eq!(registry.nonce_of(&requester), 5);

    // Every consumed nonce is dead
    for nonce in 0..5 {
        let g = grant(
            &issuer,
            requester,
            AccountId::new([99u8; 32]),
            nonce,
            T0,
            T0 + 2 * DAY_SECS,
        );
        assert!(matches!(
            registry.issue_at(&g, T0),
            Err(BadgeError::InvalidNonce { .. })
        ));
    }
}

#[test]
fn test_third_party_cannot_burn_victim_nonces() {
    let (registry, issuer) = create_registry();
    let attacker = AccountId::new([1u8; 32]);
    let victim = AccountId::new([2u8; 32]);

    // The attacker requests a badge FOR the victim; only the attacker's
    // own nonce is consumed
    let g = grant(&issuer, attacker, victim, 0, T0, T0 + 2 * DAY_SECS);
    registry.issue_at(&g, T0).unwrap();
    assert_eq!(registry.nonce_of(&attacker), 1);
    assert_eq!(registry.nonce_of(&victim), 0);

    // The victim's own nonce-0 grant still works once their badge lapses
    let later = T0 + 10 * DAY_SECS;
    let own = grant(&issuer, victim, victim, 0, later, later + 2 * DAY_SECS);
    registry.issue_at(&own, later).unwrap();
    assert_eq!(registry.nonce_of(&victim), 1);
}

// =========================================================================
// Grants over the wire
// =========================================================================

#[test]
fn test_grant_survives_json_roundtrip() {
    let (registry, issuer) = create_registry();
    let a = AccountId::new([1u8; 32]);
    let g = grant(&issuer, a, a, 0, T0, T0 + 2 * DAY_SECS);

    // The grant travels from the off-system issuer as JSON
    let wire = serde_json::to_string(&g).expect("serialize should work");
    let received: IssuanceGrant = serde_json::from_str(&wire).expect("deserialize should work");
    assert_eq!(received, g);

    assert_eq!(registry.issue_at(&received, T0).unwrap(), BadgeId(0));
}

#[test]
fn test_tampered_wire_grant_is_rejected() {
    let (registry, issuer) = create_registry();
    let a = AccountId::new([1u8; 32]);
    let g = grant(&issuer, a, a, 0, T0, T0 + 2 * DAY_SECS);

    let wire = serde_json::to_string(&g).unwrap();
    let mut received: IssuanceGrant = serde_json::from_str(&wire).unwrap();
    // Redirect the badge to another account in transit
    received.recipient = AccountId::new([9u8; 32]);

    assert!(matches!(
        registry.issue_at(&received, T0),
        Err(BadgeError::InvalidSignature)
    ));
}
