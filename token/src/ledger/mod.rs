//! Balance and Allowance Ledger
//!
//! Writes never touch [`Ledger`] directly: an operation stages them in a [`LedgerTx`]
//! which reads through its overlay to the committed state. [`Ledger::apply`] commits the
//! staged changes once the whole operation has succeeded.

mod overlay;

pub use overlay::{LedgerKey, LedgerOverlay};

use log::trace;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::address::Address;
use crate::error::{TokenError, TokenResult};
use crate::event::TokenEvent;

/// Committed ledger state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    balances: HashMap<Address, U256>,
    allowances: HashMap<Address, HashMap<Address, U256>>,
    total_supply: U256,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Committed value behind an overlay key
    pub fn get(&self, key: &LedgerKey) -> U256 {
        match key {
            LedgerKey::Supply => self.total_supply,
            LedgerKey::Balance(account) => self.balance_of(account),
            LedgerKey::Allowance { owner, spender } => self.allowance(owner, spender),
        }
    }

    /// Sum of all balances, `None` on overflow
    pub fn sum_of_balances(&self) -> Option<U256> {
        self.balances
            .values()
            .try_fold(U256::zero(), |acc, balance| acc.checked_add(*balance))
    }

    /// Commit the writes staged by a successful operation
    ///
    /// Zero balances and allowances are dropped rather than stored.
    pub fn apply(&mut self, overlay: LedgerOverlay) {
        if log::log_enabled!(log::Level::Trace) {
            trace!("applying {} ledger changes", overlay.len());
        }
        for (key, value) in overlay.into_changes() {
            match key {
                LedgerKey::Supply => self.total_supply = value,
                LedgerKey::Balance(account) if value.is_zero() => {
                    self.balances.remove(&account);
                }
                LedgerKey::Balance(account) => {
                    self.balances.insert(account, value);
                }
                LedgerKey::Allowance { owner, spender } if value.is_zero() => {
                    if let Some(spenders) = self.allowances.get_mut(&owner) {
                        spenders.remove(&spender);
                        if spenders.is_empty() {
                            self.allowances.remove(&owner);
                        }
                    }
                }
                LedgerKey::Allowance { owner, spender } => {
                    self.allowances
                        .entry(owner)
                        .or_default()
                        .insert(spender, value);
                }
            }
        }
    }
}

/// Staged view of the ledger for one operation
pub struct LedgerTx<'a> {
    base: &'a Ledger,
    /// Identity of the token contract itself
    token: Address,
    overlay: LedgerOverlay,
    events: Vec<TokenEvent>,
}

impl<'a> LedgerTx<'a> {
    pub fn new(base: &'a Ledger, token: Address) -> Self {
        Self {
            base,
            token,
            overlay: LedgerOverlay::new(),
            events: Vec::new(),
        }
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.overlay
            .get(&LedgerKey::Balance(*account))
            .unwrap_or_else(|| self.base.balance_of(account))
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.overlay
            .get(&LedgerKey::Allowance {
                owner: *owner,
                spender: *spender,
            })
            .unwrap_or_else(|| self.base.allowance(owner, spender))
    }

    pub fn total_supply(&self) -> U256 {
        self.overlay
            .get(&LedgerKey::Supply)
            .unwrap_or_else(|| self.base.total_supply())
    }

    pub fn emit(&mut self, event: TokenEvent) {
        self.events.push(event);
    }

    fn add_balance(&mut self, account: Address, amount: U256) -> TokenResult<()> {
        let balance = self
            .balance_of(&account)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.overlay.set(LedgerKey::Balance(account), balance);
        Ok(())
    }

    /// Add newly issued tokens to `account`
    pub fn credit(&mut self, account: Address, amount: U256) -> TokenResult<()> {
        let supply = self
            .total_supply()
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.add_balance(account, amount)?;
        self.overlay.set(LedgerKey::Supply, supply);
        Ok(())
    }

    pub fn debit(&mut self, account: Address, amount: U256) -> TokenResult<()> {
        let balance = self
            .balance_of(&account)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        self.overlay.set(LedgerKey::Balance(account), balance);
        Ok(())
    }

    /// Remove tokens from `account` and from the supply
    pub fn retire(&mut self, account: Address, amount: U256) -> TokenResult<()> {
        self.debit(account, amount)
            .map_err(|_| TokenError::BurnExceedsBalance)?;
        // supply >= any single balance, so this cannot underflow
        let supply = self.total_supply().saturating_sub(amount);
        self.overlay.set(LedgerKey::Supply, supply);
        Ok(())
    }

    pub fn move_internal(&mut self, from: Address, to: Address, amount: U256) -> TokenResult<()> {
        if to == self.token {
            return Err(TokenError::SelfTransferToContract);
        }
        self.debit(from, amount)?;
        self.add_balance(to, amount)
    }

    pub fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        self.overlay
            .set(LedgerKey::Allowance { owner, spender }, amount);
    }

    pub fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> TokenResult<()> {
        let remaining = self
            .allowance(&owner, &spender)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)?;
        self.set_allowance(owner, spender, remaining);
        Ok(())
    }

    pub fn into_parts(self) -> (LedgerOverlay, Vec<TokenEvent>) {
        (self.overlay, self.events)
    }
}
