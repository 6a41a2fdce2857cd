use std::collections::HashMap;

use gatepass_core::AccountId;

/// Per-requester monotonic counters preventing replay of issuance grants.
///
/// A counter starts at 0 and advances by exactly 1 per accepted issuance
/// attributed to that account. Counters only ever advance.
#[derive(Debug, Default)]
pub struct NonceLedger {
    nonces: HashMap<AccountId, u64>,
}

impl NonceLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nonce expected from this account's next grant.
    pub fn expected(&self, account: &AccountId) -> u64 {
        self.nonces.get(account).copied().unwrap_or(0)
    }

    /// Advance the account's counter by one. Returns the new expected value.
    pub fn advance(&mut self, account: &AccountId) -> u64 {
        let counter = self.nonces.entry(*account).or_insert(0);
        *counter += 1;
        *counter
    }
}
