use std::collections::HashMap;

use gatepass_core::{AccountId, BadgeId, ValidityWindow};

use crate::error::BadgeError;

/// Durable mapping from badge ID to validity window, plus an enumerable
/// per-owner index. IDs are assigned sequentially from 0 and never reused;
/// each owner's index keeps insertion order.
#[derive(Debug, Default)]
pub struct BadgeStore {
    windows: HashMap<BadgeId, ValidityWindow>,
    owners: HashMap<BadgeId, AccountId>,
    owned: HashMap<AccountId, Vec<BadgeId>>,
    next_id: u64,
}

impl BadgeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new badge under the owner's index. Returns the assigned ID.
    pub fn insert(&mut self, owner: AccountId, window: ValidityWindow) -> BadgeId {
        let id = BadgeId(self.next_id);
        self.next_id += 1;
        self.windows.insert(id, window);
        self.owners.insert(id, owner);
        self.owned.entry(owner).or_default().push(id);
        tracing::debug!(badge = %id, owner = %owner, window = %window, "badge stored");
        id
    }

    /// The validity window of a badge, if it exists.
    pub fn window_of(&self, id: BadgeId) -> Option<ValidityWindow> {
        self.windows.get(&id).copied()
    }

    /// Current owner of a badge, if it exists.
    pub fn owner_of(&self, id: BadgeId) -> Option<AccountId> {
        self.owners.get(&id).copied()
    }

    /// Badge IDs owned by the account, in acquisition order.
    pub fn badges_of(&self, account: &AccountId) -> Vec<BadgeId> {
        self.owned.get(account).cloned().unwrap_or_default()
    }

    /// Whether the account owns any badge, expired or not.
    pub fn has_badges(&self, account: &AccountId) -> bool {
        self.owned.get(account).is_some_and(|ids| !ids.is_empty())
    }

    /// Total number of badges ever issued.
    pub fn badge_count(&self) -> u64 {
        self.next_id
    }

    /// Remaining valid time of one badge at `now`. A nonexistent or expired
    /// badge reads as zero; there is no error condition.
    pub fn remaining_for_badge_at(&self, id: BadgeId, now: u64) -> u64 {
        self.windows
            .get(&id)
            .map(|w| w.remaining_at(now))
            .unwrap_or(0)
    }

    /// Aggregate remaining valid time across every badge the account owns.
    ///
    /// Sums `max(0, expiration - now)` over the full owned set. An account
    /// with no badges reads as zero.
    pub fn remaining_for_account_at(&self, account: &AccountId, now: u64) -> u64 {
        let Some(ids) = self.owned.get(account) else {
            return 0;
        };
        ids.iter()
            .map(|id| self.remaining_for_badge_at(*id, now))
            .sum()
    }

    /// Move a badge between owner indexes. The validity window travels with
    /// the badge.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        id: BadgeId,
    ) -> Result<(), BadgeError> {
        let owner = self.owner_of(id).ok_or(BadgeError::UnknownBadge(id))?;
        if owner != *from {
            return Err(BadgeError::NotOwner {
                account: *from,
                badge: id,
            });
        }
        if let Some(ids) = self.owned.get_mut(from) {
            ids.retain(|held| *held != id);
        }
        self.owned.entry(*to).or_default().push(id);
        self.owners.insert(id, *to);
        tracing::debug!(badge = %id, from = %from, to = %to, "badge transferred");
        Ok(())
    }
}
