use log::debug;
use primitive_types::U256;

use super::FungibleToken;
use crate::address::Address;
use crate::config::decimals_scale;
use crate::error::{TokenError, TokenResult};
use crate::event::TokenEvent;

impl FungibleToken {
    // ===== Mint =====

    pub fn mint(&mut self, caller: &Address, to: Address, amount: U256) -> TokenResult<()> {
        self.mint_bulk(caller, &[(to, amount)])
    }

    /// Mint to every pair or to none of them
    pub fn mint_bulk(&mut self, caller: &Address, pairs: &[(Address, U256)]) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        self.execute(|tx| {
            for &(to, amount) in pairs {
                tx.credit(to, amount)?;
                tx.emit(TokenEvent::mint(to, amount));
            }
            Ok(())
        })?;
        if log::log_enabled!(log::Level::Debug) {
            debug!("{} minted to {} accounts", caller, pairs.len());
        }
        Ok(())
    }

    /// Mint `amount` whole tokens, scaled by the token decimals
    pub fn mint_add_decimals(
        &mut self,
        caller: &Address,
        to: Address,
        amount: U256,
    ) -> TokenResult<()> {
        self.mint_add_decimals_bulk(caller, &[(to, amount)])
    }

    pub fn mint_add_decimals_bulk(
        &mut self,
        caller: &Address,
        pairs: &[(Address, U256)],
    ) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        let scale = decimals_scale(self.decimals());
        let scaled = pairs
            .iter()
            .map(|&(to, amount)| {
                amount
                    .checked_mul(scale)
                    .map(|scaled| (to, scaled))
                    .ok_or(TokenError::MultiplicationOverflow)
            })
            .collect::<TokenResult<Vec<_>>>()?;
        self.mint_bulk(caller, &scaled)
    }

    // ===== Burn =====

    /// Burn from the caller's own balance
    pub fn burn(&mut self, caller: &Address, amount: U256) -> TokenResult<()> {
        self.lifecycle.require_not_paused()?;
        self.lifecycle.require_not_frozen(caller)?;
        let holder = *caller;
        self.execute(|tx| {
            tx.retire(holder, amount)?;
            tx.emit(TokenEvent::burn(holder, amount));
            Ok(())
        })
    }

    /// Burn the whole balance of a frozen account, returns the amount burned
    pub fn burn_frozen_tokens(&mut self, caller: &Address, account: Address) -> TokenResult<U256> {
        self.access.require_operator(caller)?;
        self.lifecycle.require_frozen(&account)?;
        let burned = self.burn_all(account)?;
        debug!("{} burned {} frozen tokens of {}", caller, burned, account);
        Ok(burned)
    }

    /// Freeze `account` and burn its whole balance in one step
    pub fn freeze_and_burn_tokens(
        &mut self,
        caller: &Address,
        account: Address,
    ) -> TokenResult<U256> {
        self.access.require_operator(caller)?;
        let newly_frozen = self.lifecycle.freeze(account)?;
        let burned = match self.burn_all_after(
            account,
            newly_frozen.then_some(TokenEvent::Frozen {
                account,
                by: *caller,
            }),
        ) {
            Ok(burned) => burned,
            Err(e) => {
                if newly_frozen {
                    self.lifecycle.unfreeze(&account);
                }
                return Err(e);
            }
        };
        debug!("{} froze {} and burned {} tokens", caller, account, burned);
        Ok(burned)
    }

    fn burn_all(&mut self, account: Address) -> TokenResult<U256> {
        self.burn_all_after(account, None)
    }

    /// Burn the whole balance of `account`, `preceding` being emitted ahead of the burn
    fn burn_all_after(
        &mut self,
        account: Address,
        preceding: Option<TokenEvent>,
    ) -> TokenResult<U256> {
        self.execute(|tx| {
            if let Some(event) = preceding {
                tx.emit(event);
            }
            let balance = tx.balance_of(&account);
            tx.retire(account, balance)?;
            tx.emit(TokenEvent::burn(account, balance));
            Ok(balance)
        })
    }
}
