//! Owner/Operator Access Control
//!
//! Owners manage both role sets; operators run day-to-day administration.
//! Every owner passes an operator check.

use indexmap::IndexSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{TokenError, TokenResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    owners: IndexSet<Address>,
    operators: IndexSet<Address>,
}

impl AccessControl {
    /// Seed the deployer as sole owner
    pub fn new(deployer: Address) -> Self {
        let mut owners = IndexSet::new();
        owners.insert(deployer);
        Self {
            owners,
            operators: IndexSet::new(),
        }
    }

    pub fn is_owner(&self, account: &Address) -> bool {
        self.owners.contains(account)
    }

    pub fn is_operator(&self, account: &Address) -> bool {
        self.is_owner(account) || self.operators.contains(account)
    }

    pub fn owners(&self) -> impl Iterator<Item = &Address> {
        self.owners.iter()
    }

    pub fn operators(&self) -> impl Iterator<Item = &Address> {
        self.operators.iter()
    }

    pub fn require_owner(&self, caller: &Address) -> TokenResult<()> {
        if !self.is_owner(caller) {
            warn!("Access denied: {} is not an owner", caller);
            return Err(TokenError::AccessDenied);
        }
        Ok(())
    }

    pub fn require_operator(&self, caller: &Address) -> TokenResult<()> {
        if !self.is_operator(caller) {
            warn!("Access denied: {} is not an operator", caller);
            return Err(TokenError::AccessDenied);
        }
        Ok(())
    }

    /// Returns whether the owner set changed
    pub fn add_owner(&mut self, caller: &Address, account: Address) -> TokenResult<bool> {
        self.require_owner(caller)?;
        let added = self.owners.insert(account);
        if added {
            debug!("owner {} added by {}", account, caller);
        }
        Ok(added)
    }

    /// Returns whether the owner set changed
    pub fn remove_owner(&mut self, caller: &Address, account: &Address) -> TokenResult<bool> {
        self.require_owner(caller)?;
        if !self.owners.contains(account) {
            return Ok(false);
        }
        if self.owners.len() == 1 {
            return Err(TokenError::LastOwner);
        }
        self.owners.swap_remove(account);
        debug!("owner {} removed by {}", account, caller);
        Ok(true)
    }

    /// Hand the caller's ownership over to `account`
    ///
    /// Returns whether the owner set changed.
    pub fn set_owner(&mut self, caller: &Address, account: Address) -> TokenResult<bool> {
        self.require_owner(caller)?;
        if *caller == account {
            return Ok(false);
        }
        self.owners.swap_remove(caller);
        self.owners.insert(account);
        debug!("ownership handed from {} to {}", caller, account);
        Ok(true)
    }

    /// Returns whether the operator set changed
    pub fn add_operator(&mut self, caller: &Address, account: Address) -> TokenResult<bool> {
        self.require_owner(caller)?;
        Ok(self.operators.insert(account))
    }

    /// Returns whether the operator set changed
    pub fn remove_operator(&mut self, caller: &Address, account: &Address) -> TokenResult<bool> {
        self.require_owner(caller)?;
        Ok(self.operators.swap_remove(account))
    }
}
