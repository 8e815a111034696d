use primitive_types::U256;
use std::collections::HashMap;

use crate::address::Address;

/// Key types for overlay storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LedgerKey {
    /// Total supply of the token
    Supply,
    /// Balance for account
    Balance(Address),
    /// Allowance from owner to spender
    Allowance { owner: Address, spender: Address },
}

/// Overlay cache for ledger operations
///
/// Accumulates writes during one operation. On success the changes are applied to the
/// ledger, on failure they are dropped together with the overlay.
#[derive(Debug, Clone, Default)]
pub struct LedgerOverlay {
    /// Changes to be applied (key → value)
    changes: HashMap<LedgerKey, U256>,
}

impl LedgerOverlay {
    /// Create a new empty overlay
    pub fn new() -> Self {
        Self {
            changes: HashMap::new(),
        }
    }

    /// Get the number of changes in the overlay
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Get a value from the overlay (returns None if not in overlay)
    pub fn get(&self, key: &LedgerKey) -> Option<U256> {
        self.changes.get(key).copied()
    }

    /// Set a value in the overlay
    pub fn set(&mut self, key: LedgerKey, value: U256) {
        self.changes.insert(key, value);
    }

    /// Record `value` for `key` unless the key already holds one
    ///
    /// Used to build an undo overlay holding the oldest value of every touched key.
    pub fn set_if_absent(&mut self, key: LedgerKey, value: U256) {
        self.changes.entry(key).or_insert(value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &LedgerKey> {
        self.changes.keys()
    }

    pub fn into_changes(self) -> impl Iterator<Item = (LedgerKey, U256)> {
        self.changes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let account = Address::from_seed(1);
        let mut overlay = LedgerOverlay::new();
        assert_eq!(overlay.len(), 0);

        overlay.set(LedgerKey::Balance(account), U256::from(1));
        overlay.set(LedgerKey::Supply, U256::from(1));
        overlay.set(LedgerKey::Balance(account), U256::from(5));

        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.get(&LedgerKey::Balance(account)), Some(U256::from(5)));
        assert_eq!(overlay.get(&LedgerKey::Supply), Some(U256::from(1)));
        assert_eq!(overlay.get(&LedgerKey::Balance(Address::from_seed(2))), None);
    }

    #[test]
    fn test_set_if_absent_keeps_oldest() {
        let account = Address::from_seed(1);
        let mut undo = LedgerOverlay::new();
        undo.set_if_absent(LedgerKey::Balance(account), U256::from(7));
        undo.set_if_absent(LedgerKey::Balance(account), U256::from(3));
        assert_eq!(undo.get(&LedgerKey::Balance(account)), Some(U256::from(7)));
        assert_eq!(undo.keys().count(), 1);
    }
}
