//! Fungible Token Service
//!
//! [`FungibleToken`] owns the whole state of one deployment: role registry, lifecycle
//! flags, ledger and pending events. Every public operation takes the caller explicitly
//! and runs its checks in the same order:
//!
//! 1. authorization (owner / operator)
//! 2. lifecycle (pause, freeze)
//! 3. ledger arithmetic, staged in a [`LedgerTx`]
//! 4. commit, then the external notification for `transfer_to_contract`
//!
//! A failing operation leaves no trace: the staged writes and events are dropped.

mod admin;
mod supply;
mod transfer;

use log::debug;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::access::AccessControl;
use crate::address::Address;
use crate::config::TokenConfig;
use crate::error::{TokenError, TokenResult};
use crate::event::TokenEvent;
use crate::ledger::{Ledger, LedgerOverlay, LedgerTx};
use crate::lifecycle::{Lifecycle, PauseState};

/// Zip parallel account/amount arrays into bulk pairs
pub fn pair_up(accounts: &[Address], amounts: &[U256]) -> TokenResult<Vec<(Address, U256)>> {
    if accounts.len() != amounts.len() {
        return Err(TokenError::LengthMismatch);
    }
    Ok(accounts.iter().copied().zip(amounts.iter().copied()).collect())
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FungibleToken {
    /// Address the token contract is deployed at
    address: Address,
    metadata: TokenConfig,
    access: AccessControl,
    lifecycle: Lifecycle,
    ledger: Ledger,
    #[serde(skip)]
    events: Vec<TokenEvent>,
    /// Prior values of the ledger keys written while a receiver callback is in flight
    #[serde(skip)]
    journal: Option<LedgerOverlay>,
}

impl FungibleToken {
    /// Deploy a token at `address`, `deployer` becoming its sole owner
    pub fn new(config: TokenConfig, deployer: Address, address: Address) -> TokenResult<Self> {
        config.validate()?;
        debug!(
            "deploying token {} ({}) at {} owned by {}",
            config.name, config.symbol, address, deployer
        );
        Ok(Self {
            address,
            metadata: config,
            access: AccessControl::new(deployer),
            lifecycle: Lifecycle::new(),
            ledger: Ledger::new(),
            events: Vec::new(),
            journal: None,
        })
    }

    /// Restore a token from the JSON produced by [`FungibleToken::to_json`]
    pub fn from_json(json: &str) -> TokenResult<Self> {
        let token: Self =
            serde_json::from_str(json).map_err(|e| TokenError::InvalidSnapshot(e.to_string()))?;
        token.metadata.validate()?;
        if token.access.owners().next().is_none() {
            return Err(TokenError::InvalidSnapshot("no owner".into()));
        }
        if token.ledger.sum_of_balances() != Some(token.ledger.total_supply()) {
            return Err(TokenError::InvalidSnapshot(
                "total supply does not match balances".into(),
            ));
        }
        Ok(token)
    }

    /// Serialize the committed state; pending events are not part of it
    pub fn to_json(&self) -> TokenResult<String> {
        serde_json::to_string(self).map_err(|e| TokenError::InvalidSnapshot(e.to_string()))
    }

    // ===== Queries =====

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.ledger.allowance(owner, spender)
    }

    pub fn is_owner(&self, account: &Address) -> bool {
        self.access.is_owner(account)
    }

    pub fn is_operator(&self, account: &Address) -> bool {
        self.access.is_operator(account)
    }

    pub fn owners(&self) -> Vec<Address> {
        self.access.owners().copied().collect()
    }

    pub fn operators(&self) -> Vec<Address> {
        self.access.operators().copied().collect()
    }

    pub fn is_frozen(&self, account: &Address) -> bool {
        self.lifecycle.is_frozen(account)
    }

    pub fn is_paused(&self) -> bool {
        self.lifecycle.is_paused()
    }

    pub fn is_pause_disabled(&self) -> bool {
        self.lifecycle.is_pause_disabled()
    }

    pub fn pause_state(&self) -> PauseState {
        self.lifecycle.pause_state()
    }

    pub fn is_freeze_disabled(&self) -> bool {
        self.lifecycle.is_freeze_disabled()
    }

    /// Committed ledger, for invariant checks and indexing
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ===== Events =====

    /// Events emitted since the previous call, oldest first
    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[TokenEvent] {
        &self.events
    }

    fn emit(&mut self, event: TokenEvent) {
        self.events.push(event);
    }

    // ===== Staging =====

    /// Run `f` against a staged view of the ledger and commit its writes and events
    /// only if it succeeds
    fn execute<T>(&mut self, f: impl FnOnce(&mut LedgerTx<'_>) -> TokenResult<T>) -> TokenResult<T> {
        let mut tx = LedgerTx::new(&self.ledger, self.address);
        let output = f(&mut tx)?;
        let (overlay, events) = tx.into_parts();
        if let Some(journal) = self.journal.as_mut() {
            for key in overlay.keys() {
                journal.set_if_absent(key.clone(), self.ledger.get(key));
            }
        }
        self.ledger.apply(overlay);
        self.events.extend(events);
        Ok(output)
    }
}
