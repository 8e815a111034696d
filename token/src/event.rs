//! Token Events
//!
//! Emitted once per state change so that observers can rebuild the ledger history.
//! Events of an operation that fails are discarded with the rest of its effects.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::address::Address;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenEvent {
    /// Balance movement; `from` is `None` for mints and `to` is `None` for burns
    Transfer {
        from: Option<Address>,
        to: Option<Address>,
        amount: U256,
        /// Payload attached by `transfer_to_address` / `transfer_to_contract`
        #[serde(default, skip_serializing_if = "Vec::is_empty", with = "hex")]
        data: Vec<u8>,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: U256,
    },
    Frozen {
        account: Address,
        by: Address,
    },
    Unfrozen {
        account: Address,
        by: Address,
    },
    Paused {
        by: Address,
    },
    Unpaused {
        by: Address,
    },
    PauseDisabled {
        by: Address,
    },
    FreezeDisabled {
        by: Address,
    },
    OwnerAdded {
        account: Address,
    },
    OwnerRemoved {
        account: Address,
    },
    OperatorAdded {
        account: Address,
    },
    OperatorRemoved {
        account: Address,
    },
}

impl TokenEvent {
    pub fn transfer(from: Address, to: Address, amount: U256) -> Self {
        Self::Transfer {
            from: Some(from),
            to: Some(to),
            amount,
            data: Vec::new(),
        }
    }

    pub fn mint(to: Address, amount: U256) -> Self {
        Self::Transfer {
            from: None,
            to: Some(to),
            amount,
            data: Vec::new(),
        }
    }

    pub fn burn(from: Address, amount: U256) -> Self {
        Self::Transfer {
            from: Some(from),
            to: None,
            amount,
            data: Vec::new(),
        }
    }
}
