//! External Capabilities
//!
//! Collaborators that live outside the ledger are injected by the host as trait objects:
//! the recipient contract notified by `transfer_to_contract`, and the foreign assets the
//! rescue operations sweep or approve on behalf of the token contract.

use primitive_types::U256;

use crate::address::Address;
use crate::error::TokenResult;
use crate::token::FungibleToken;

/// Contract able to accept tokens sent with `transfer_to_contract`
///
/// Called after the ledger move is committed, so `token` already reflects the transfer.
/// The receiver may call back into the token through `token`, acting as itself only;
/// returning an error rolls back the transfer and anything done through the callback.
pub trait TokenReceiver {
    fn on_tokens_received(
        &mut self,
        token: &mut ReceiverContext<'_>,
        from: Address,
        amount: U256,
        data: &[u8],
    ) -> Result<(), String>;
}

/// Handle on the token given to a receiver for the duration of its callback
///
/// Every operation runs with the recipient as caller. Administrative operations are not
/// reachable from here.
pub struct ReceiverContext<'a> {
    token: &'a mut FungibleToken,
    account: Address,
}

impl<'a> ReceiverContext<'a> {
    pub(crate) fn new(token: &'a mut FungibleToken, account: Address) -> Self {
        Self { token, account }
    }

    /// The recipient, caller of every operation made through this context
    pub fn account(&self) -> Address {
        self.account
    }

    pub fn token_address(&self) -> Address {
        self.token.address()
    }

    pub fn decimals(&self) -> u8 {
        self.token.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.token.total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.token.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.token.allowance(owner, spender)
    }

    pub fn is_frozen(&self, account: &Address) -> bool {
        self.token.is_frozen(account)
    }

    pub fn is_paused(&self) -> bool {
        self.token.is_paused()
    }

    // ===== Operations as the recipient =====

    pub fn transfer(&mut self, to: Address, amount: U256) -> TokenResult<()> {
        self.token.transfer(&self.account, to, amount)
    }

    pub fn transfer_to_address(&mut self, to: Address, amount: U256, data: &[u8]) -> TokenResult<()> {
        self.token.transfer_to_address(&self.account, to, amount, data)
    }

    pub fn transfer_bulk(&mut self, pairs: &[(Address, U256)]) -> TokenResult<()> {
        self.token.transfer_bulk(&self.account, pairs)
    }

    /// Spend the recipient's allowance on `owner`
    pub fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) -> TokenResult<()> {
        self.token.transfer_from(&self.account, owner, to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> TokenResult<()> {
        self.token.approve(&self.account, spender, amount)
    }

    pub fn increase_allowance(&mut self, spender: Address, added: U256) -> TokenResult<()> {
        self.token.increase_allowance(&self.account, spender, added)
    }

    pub fn decrease_allowance(&mut self, spender: Address, subtracted: U256) -> TokenResult<()> {
        self.token.decrease_allowance(&self.account, spender, subtracted)
    }

    pub fn burn(&mut self, amount: U256) -> TokenResult<()> {
        self.token.burn(&self.account, amount)
    }
}

/// Foreign fungible token that may hold a balance for the token contract
pub trait ExternalFungible {
    /// Contract address of the foreign token
    fn address(&self) -> Address;

    fn balance_of(&self, holder: &Address) -> U256;

    /// Move `amount` held by `holder`, `holder` being the caller on the foreign ledger
    fn transfer(&mut self, holder: Address, to: Address, amount: U256) -> Result<(), String>;
}

/// Native coin balances of the execution environment
pub trait NativeVault {
    fn balance_of(&self, holder: &Address) -> U256;

    fn send(&mut self, holder: Address, to: Address, amount: U256) -> Result<(), String>;
}

/// Foreign non-fungible (ERC721 style) or multi-token (ERC1155 style) collection
pub trait ExternalCollection {
    fn address(&self) -> Address;

    /// Let `operator` manage every item `holder` owns in this collection
    fn set_approval_for_all(
        &mut self,
        holder: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), String>;
}
