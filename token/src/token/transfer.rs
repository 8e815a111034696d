use log::{debug, warn};
use primitive_types::U256;

use super::FungibleToken;
use crate::address::Address;
use crate::error::{TokenError, TokenResult};
use crate::event::TokenEvent;
use crate::external::{ReceiverContext, TokenReceiver};
use crate::ledger::LedgerOverlay;

impl FungibleToken {
    /// Lifecycle gates shared by every outbound transfer from `source`
    fn require_transferable(&self, source: &Address) -> TokenResult<()> {
        self.lifecycle.require_not_paused()?;
        self.lifecycle.require_not_frozen(source)
    }

    pub fn transfer(&mut self, caller: &Address, to: Address, amount: U256) -> TokenResult<()> {
        self.transfer_with_data(caller, to, amount, &[])
    }

    /// Transfer to a plain account, recording `data` in the transfer event
    pub fn transfer_to_address(
        &mut self,
        caller: &Address,
        to: Address,
        amount: U256,
        data: &[u8],
    ) -> TokenResult<()> {
        self.transfer_with_data(caller, to, amount, data)
    }

    /// Transfer to a contract and notify it through `receiver`
    ///
    /// The balances are committed before `receiver` runs, so a reentrant call sees the
    /// post-transfer state. If the receiver rejects the tokens, the transfer and anything
    /// the receiver did through the token are rolled back.
    pub fn transfer_to_contract(
        &mut self,
        caller: &Address,
        to: Address,
        amount: U256,
        data: &[u8],
        receiver: &mut dyn TokenReceiver,
    ) -> TokenResult<()> {
        self.require_transferable(caller)?;
        let events_mark = self.events.len();
        let outer = self.journal.replace(LedgerOverlay::new());

        let result = match self.transfer_with_data(caller, to, amount, data) {
            Ok(()) => {
                let mut context = ReceiverContext::new(self, to);
                receiver
                    .on_tokens_received(&mut context, *caller, amount, data)
                    .map_err(|reason| {
                        warn!("receiver {} rejected {} tokens from {}: {}", to, amount, caller, reason);
                        TokenError::ReceiverRejected(reason)
                    })
            }
            Err(e) => Err(e),
        };

        let undo = std::mem::replace(&mut self.journal, outer).unwrap_or_default();
        match result {
            Ok(()) => {
                if let Some(outer) = self.journal.as_mut() {
                    for (key, value) in undo.into_changes() {
                        outer.set_if_absent(key, value);
                    }
                }
                Ok(())
            }
            Err(e) => {
                self.ledger.apply(undo);
                self.events.truncate(events_mark);
                Err(e)
            }
        }
    }

    fn transfer_with_data(
        &mut self,
        caller: &Address,
        to: Address,
        amount: U256,
        data: &[u8],
    ) -> TokenResult<()> {
        self.require_transferable(caller)?;
        let from = *caller;
        self.execute(|tx| {
            tx.move_internal(from, to, amount)?;
            tx.emit(TokenEvent::Transfer {
                from: Some(from),
                to: Some(to),
                amount,
                data: data.to_vec(),
            });
            Ok(())
        })
    }

    /// Transfer to every pair or to none of them
    pub fn transfer_bulk(&mut self, caller: &Address, pairs: &[(Address, U256)]) -> TokenResult<()> {
        self.require_transferable(caller)?;
        let from = *caller;
        self.execute(|tx| {
            for &(to, amount) in pairs {
                tx.move_internal(from, to, amount)?;
                tx.emit(TokenEvent::transfer(from, to, amount));
            }
            Ok(())
        })?;
        if log::log_enabled!(log::Level::Debug) {
            debug!("{} transferred to {} accounts", caller, pairs.len());
        }
        Ok(())
    }

    /// Spend the caller's allowance on `owner` to move `amount` to `to`
    pub fn transfer_from(
        &mut self,
        caller: &Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> TokenResult<()> {
        self.require_transferable(&owner)?;
        let spender = *caller;
        self.execute(|tx| {
            tx.spend_allowance(owner, spender, amount)?;
            tx.move_internal(owner, to, amount)?;
            tx.emit(TokenEvent::transfer(owner, to, amount));
            tx.emit(TokenEvent::Approval {
                owner,
                spender,
                amount: tx.allowance(&owner, &spender),
            });
            Ok(())
        })
    }

    // ===== Allowances =====

    pub fn approve(&mut self, caller: &Address, spender: Address, amount: U256) -> TokenResult<()> {
        self.approve_bulk(caller, &[(spender, amount)])
    }

    pub fn approve_bulk(&mut self, caller: &Address, pairs: &[(Address, U256)]) -> TokenResult<()> {
        let owner = *caller;
        self.execute(|tx| {
            for &(spender, amount) in pairs {
                tx.set_allowance(owner, spender, amount);
                tx.emit(TokenEvent::Approval {
                    owner,
                    spender,
                    amount,
                });
            }
            Ok(())
        })
    }

    pub fn increase_allowance(
        &mut self,
        caller: &Address,
        spender: Address,
        added: U256,
    ) -> TokenResult<()> {
        let owner = *caller;
        self.execute(|tx| {
            let amount = tx
                .allowance(&owner, &spender)
                .checked_add(added)
                .ok_or(TokenError::Overflow)?;
            tx.set_allowance(owner, spender, amount);
            tx.emit(TokenEvent::Approval {
                owner,
                spender,
                amount,
            });
            Ok(())
        })
    }

    pub fn decrease_allowance(
        &mut self,
        caller: &Address,
        spender: Address,
        subtracted: U256,
    ) -> TokenResult<()> {
        let owner = *caller;
        self.execute(|tx| {
            let amount = tx
                .allowance(&owner, &spender)
                .checked_sub(subtracted)
                .ok_or(TokenError::AllowanceBelowZero)?;
            tx.set_allowance(owner, spender, amount);
            tx.emit(TokenEvent::Approval {
                owner,
                spender,
                amount,
            });
            Ok(())
        })
    }
}
