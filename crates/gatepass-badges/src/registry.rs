use std::sync::RwLock;

use gatepass_core::{AccountId, BadgeId, IssuanceGrant, RegistryConfig, ValidityWindow, DAY_SECS};
use gatepass_crypto::{verify_grant, PublicKey};

use crate::error::BadgeError;
use crate::nonce::NonceLedger;
use crate::store::BadgeStore;

/// State guarded by the registry's single writer lock. Issuance reads and
/// writes the store, the ledger, and the policy values as one atomic step.
struct RegistryState {
    store: BadgeStore,
    nonces: NonceLedger,
    issuer_key: PublicKey,
    grace_period: u64,
}

/// The badge registry: signature-authenticated issuance, replay protection,
/// overlap/renewal policy, and clearance accounting.
///
/// All operations take "now" as an explicit snapshot; the variants without
/// an `_at` suffix read the wall clock once per call.
pub struct BadgeRegistry {
    admin: AccountId,
    state: RwLock<RegistryState>,
}

impl BadgeRegistry {
    /// Create a registry trusting `issuer_key`, administered by `admin`.
    pub fn new(admin: AccountId, issuer_key: PublicKey, config: RegistryConfig) -> Self {
        Self {
            admin,
            state: RwLock::new(RegistryState {
                store: BadgeStore::new(),
                nonces: NonceLedger::new(),
                issuer_key,
                grace_period: config.grace_period_secs,
            }),
        }
    }

    // ---------------------------------------------------------------------
    // Issuance
    // ---------------------------------------------------------------------

    /// Apply an issuance grant at time `now`.
    ///
    /// Checks, in order: issuer signature, requester nonce, recipient
    /// overlap policy, minimum duration. All checks are preconditions; no
    /// state is mutated unless every one of them passes. On success the
    /// requester's nonce advances by one and the new badge lands in the
    /// recipient's index.
    pub fn issue_at(&self, grant: &IssuanceGrant, now: u64) -> Result<BadgeId, BadgeError> {
        let mut state = self.state.write().unwrap();

        verify_grant(grant, &state.issuer_key).map_err(|_| BadgeError::InvalidSignature)?;

        let expected = state.nonces.expected(&grant.requester);
        if grant.nonce != expected {
            return Err(BadgeError::InvalidNonce {
                expected,
                got: grant.nonce,
            });
        }

        // Renewal is only open to an unprotected recipient or one inside
        // its grace window.
        if state.store.has_badges(&grant.recipient) {
            let remaining = state.store.remaining_for_account_at(&grant.recipient, now);
            if remaining > state.grace_period {
                return Err(BadgeError::OverlapNotAllowed {
                    remaining,
                    grace: state.grace_period,
                });
            }
        }

        let minimum = state.grace_period + DAY_SECS;
        let got = grant.window.duration();
        if got < minimum {
            return Err(BadgeError::DurationTooShort { minimum, got });
        }

        state.nonces.advance(&grant.requester);
        let id = state.store.insert(grant.recipient, grant.window);

        tracing::info!(
            badge = %id,
            requester = %grant.requester,
            recipient = %grant.recipient,
            nonce = grant.nonce,
            expiration = grant.window.expiration,
            "badge issued"
        );

        Ok(id)
    }

    /// Apply an issuance grant against the wall clock.
    pub fn issue(&self, grant: &IssuanceGrant) -> Result<BadgeId, BadgeError> {
        self.issue_at(grant, unix_now())
    }

    // ---------------------------------------------------------------------
    // Administration
    // ---------------------------------------------------------------------

    /// Replace the trusted issuer key. Immediately invalidates every
    /// not-yet-consumed grant signed under the old key; stored badge
    /// windows are unaffected.
    pub fn set_issuer_key(&self, caller: &AccountId, key: PublicKey) -> Result<(), BadgeError> {
        if *caller != self.admin {
            return Err(BadgeError::Unauthorized);
        }
        let mut state = self.state.write().unwrap();
        state.issuer_key = key;
        tracing::warn!(issuer_key = %state.issuer_key.to_hex(), "trusted issuer key replaced");
        Ok(())
    }

    /// Replace the grace period. Takes effect on all subsequent issuance.
    pub fn set_grace_period(&self, caller: &AccountId, secs: u64) -> Result<(), BadgeError> {
        if *caller != self.admin {
            return Err(BadgeError::Unauthorized);
        }
        let mut state = self.state.write().unwrap();
        state.grace_period = secs;
        tracing::warn!(grace_period_secs = secs, "grace period replaced");
        Ok(())
    }

    /// The current trusted issuer key.
    pub fn issuer_key(&self) -> PublicKey {
        self.state.read().unwrap().issuer_key.clone()
    }

    /// The current grace period in seconds.
    pub fn grace_period(&self) -> u64 {
        self.state.read().unwrap().grace_period
    }

    // ---------------------------------------------------------------------
    // Ownership
    // ---------------------------------------------------------------------

    /// Move a badge from one owner to another. The validity window travels
    /// with the badge; clearance queries follow the new owner immediately.
    pub fn transfer_badge(
        &self,
        from: &AccountId,
        to: &AccountId,
        id: BadgeId,
    ) -> Result<(), BadgeError> {
        self.state.write().unwrap().store.transfer(from, to, id)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Remaining valid time of one badge at `now`. Nonexistent or expired
    /// badges read as zero.
    pub fn remaining_for_badge_at(&self, id: BadgeId, now: u64) -> u64 {
        self.state.read().unwrap().store.remaining_for_badge_at(id, now)
    }

    /// Remaining valid time of one badge against the wall clock.
    pub fn remaining_for_badge(&self, id: BadgeId) -> u64 {
        self.remaining_for_badge_at(id, unix_now())
    }

    /// Aggregate remaining valid time across all badges the account owns
    /// at `now`. An account with no badges reads as zero.
    pub fn remaining_for_account_at(&self, account: &AccountId, now: u64) -> u64 {
        self.state
            .read()
            .unwrap()
            .store
            .remaining_for_account_at(account, now)
    }

    /// Aggregate remaining valid time against the wall clock.
    pub fn remaining_for_account(&self, account: &AccountId) -> u64 {
        self.remaining_for_account_at(account, unix_now())
    }

    /// Whether the account holds at least one non-expired badge at `now`.
    pub fn is_cleared_at(&self, account: &AccountId, now: u64) -> bool {
        self.remaining_for_account_at(account, now) > 0
    }

    /// Whether the account is currently cleared against the wall clock.
    pub fn is_cleared(&self, account: &AccountId) -> bool {
        self.is_cleared_at(account, unix_now())
    }

    /// The nonce expected from this account's next grant.
    pub fn nonce_of(&self, account: &AccountId) -> u64 {
        self.state.read().unwrap().nonces.expected(account)
    }

    /// Badge IDs owned by the account, in acquisition order.
    pub fn badges_of(&self, account: &AccountId) -> Vec<BadgeId> {
        self.state.read().unwrap().store.badges_of(account)
    }

    /// Current owner of a badge, if it exists.
    pub fn owner_of(&self, id: BadgeId) -> Option<AccountId> {
        self.state.read().unwrap().store.owner_of(id)
    }

    /// The validity window of a badge, if it exists.
    pub fn window_of(&self, id: BadgeId) -> Option<ValidityWindow> {
        self.state.read().unwrap().store.window_of(id)
    }

    /// Total number of badges ever issued.
    pub fn badge_count(&self) -> u64 {
        self.state.read().unwrap().store.badge_count()
    }
}

/// Wall clock as Unix seconds.
fn unix_now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}
