use log::{debug, info, warn};
use primitive_types::U256;

use super::FungibleToken;
use crate::address::Address;
use crate::error::{TokenError, TokenResult};
use crate::event::TokenEvent;
use crate::external::{ExternalCollection, ExternalFungible, NativeVault};

impl FungibleToken {
    // ===== Roles =====

    pub fn add_owner(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        if self.access.add_owner(caller, account)? {
            self.emit(TokenEvent::OwnerAdded { account });
        }
        Ok(())
    }

    pub fn remove_owner(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        if self.access.remove_owner(caller, &account)? {
            self.emit(TokenEvent::OwnerRemoved { account });
        }
        Ok(())
    }

    /// Replace the caller as owner by `account`
    pub fn set_owner(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        let already_owner = self.access.is_owner(&account);
        if self.access.set_owner(caller, account)? {
            self.emit(TokenEvent::OwnerRemoved { account: *caller });
            if !already_owner {
                self.emit(TokenEvent::OwnerAdded { account });
            }
        }
        Ok(())
    }

    pub fn add_operator(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        if self.access.add_operator(caller, account)? {
            self.emit(TokenEvent::OperatorAdded { account });
        }
        Ok(())
    }

    pub fn remove_operator(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        if self.access.remove_operator(caller, &account)? {
            self.emit(TokenEvent::OperatorRemoved { account });
        }
        Ok(())
    }

    // ===== Pause =====

    pub fn pause(&mut self, caller: &Address) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        self.lifecycle.pause()?;
        info!("token {} paused by {}", self.address, caller);
        self.emit(TokenEvent::Paused { by: *caller });
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Address) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        self.lifecycle.unpause()?;
        info!("token {} unpaused by {}", self.address, caller);
        self.emit(TokenEvent::Unpaused { by: *caller });
        Ok(())
    }

    /// Remove the ability to pause, lifting a pause in effect
    pub fn disable_pause_forever(&mut self, caller: &Address) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        let was_paused = self.lifecycle.disable_pause_forever()?;
        info!("token {} pause disabled by {}", self.address, caller);
        if was_paused {
            self.emit(TokenEvent::Unpaused { by: *caller });
        }
        self.emit(TokenEvent::PauseDisabled { by: *caller });
        Ok(())
    }

    // ===== Freeze =====

    pub fn freeze(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        if self.lifecycle.freeze(account)? {
            debug!("{} frozen by {}", account, caller);
            self.emit(TokenEvent::Frozen {
                account,
                by: *caller,
            });
        }
        Ok(())
    }

    pub fn unfreeze(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        if self.lifecycle.unfreeze(&account) {
            debug!("{} unfrozen by {}", account, caller);
            self.emit(TokenEvent::Unfrozen {
                account,
                by: *caller,
            });
        }
        Ok(())
    }

    pub fn disable_freeze_forever(&mut self, caller: &Address) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        self.lifecycle.disable_freeze_forever()?;
        info!("token {} freeze disabled by {}", self.address, caller);
        self.emit(TokenEvent::FreezeDisabled { by: *caller });
        Ok(())
    }

    // ===== Rescue =====

    /// Sweep the whole `asset` balance held by the token contract to `to`
    ///
    /// Returns the amount moved.
    pub fn withdraw_erc20(
        &mut self,
        caller: &Address,
        asset: &mut dyn ExternalFungible,
        to: Address,
    ) -> TokenResult<U256> {
        self.access.require_operator(caller)?;
        if asset.address() == self.address {
            return self.withdraw_self_tokens(caller, to);
        }
        let amount = asset.balance_of(&self.address);
        asset.transfer(self.address, to, amount).map_err(|reason| {
            warn!("withdrawing {} of {} failed: {}", amount, asset.address(), reason);
            TokenError::ExternalCall(reason)
        })?;
        debug!("{} withdrew {} of {} to {}", caller, amount, asset.address(), to);
        Ok(amount)
    }

    /// Sweep the balance of this token held at the token's own address
    pub fn withdraw_self_tokens(&mut self, caller: &Address, to: Address) -> TokenResult<U256> {
        self.access.require_operator(caller)?;
        let holder = self.address;
        let amount = self.execute(|tx| {
            let amount = tx.balance_of(&holder);
            tx.move_internal(holder, to, amount)?;
            tx.emit(TokenEvent::transfer(holder, to, amount));
            Ok(amount)
        })?;
        debug!("{} withdrew {} self-held tokens to {}", caller, amount, to);
        Ok(amount)
    }

    /// Sweep the native coins held by the token contract to `to`
    pub fn withdraw_eth(
        &mut self,
        caller: &Address,
        vault: &mut dyn NativeVault,
        to: Address,
    ) -> TokenResult<U256> {
        self.access.require_operator(caller)?;
        let amount = vault.balance_of(&self.address);
        vault
            .send(self.address, to, amount)
            .map_err(TokenError::ExternalCall)?;
        debug!("{} withdrew {} native coins to {}", caller, amount, to);
        Ok(amount)
    }

    pub fn approve_erc721(
        &mut self,
        caller: &Address,
        collection: &mut dyn ExternalCollection,
        operator: Address,
    ) -> TokenResult<()> {
        self.approve_collection(caller, collection, operator)
    }

    pub fn approve_erc1155(
        &mut self,
        caller: &Address,
        collection: &mut dyn ExternalCollection,
        operator: Address,
    ) -> TokenResult<()> {
        self.approve_collection(caller, collection, operator)
    }

    fn approve_collection(
        &mut self,
        caller: &Address,
        collection: &mut dyn ExternalCollection,
        operator: Address,
    ) -> TokenResult<()> {
        self.access.require_operator(caller)?;
        collection
            .set_approval_for_all(self.address, operator, true)
            .map_err(TokenError::ExternalCall)?;
        debug!(
            "{} approved {} on collection {}",
            caller,
            operator,
            collection.address()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenConfig;

    const CEO: Address = Address::from_seed(1);
    const OPERATOR: Address = Address::from_seed(2);
    const USER1: Address = Address::from_seed(3);
    const USER2: Address = Address::from_seed(4);
    const TOKEN: Address = Address::from_seed(0xaa);

    fn deploy() -> FungibleToken {
        FungibleToken::new(TokenConfig::new("name", "symbol"), CEO, TOKEN)
            .expect("valid config")
    }

    #[test]
    fn test_role_events() -> Result<(), TokenError> {
        let mut token = deploy();
        token.add_operator(&CEO, OPERATOR)?;
        token.add_operator(&CEO, OPERATOR)?;
        token.add_owner(&CEO, USER1)?;
        token.remove_owner(&USER1, CEO)?;
        token.remove_operator(&USER1, OPERATOR)?;
        assert_eq!(
            token.take_events(),
            vec![
                TokenEvent::OperatorAdded { account: OPERATOR },
                TokenEvent::OwnerAdded { account: USER1 },
                TokenEvent::OwnerRemoved { account: CEO },
                TokenEvent::OperatorRemoved { account: OPERATOR },
            ]
        );
        assert_eq!(token.owners(), vec![USER1]);
        Ok(())
    }

    #[test]
    fn test_set_owner_hands_over() -> Result<(), TokenError> {
        let mut token = deploy();
        token.set_owner(&CEO, USER1)?;
        assert!(!token.is_owner(&CEO));
        assert!(token.is_owner(&USER1));
        assert_eq!(
            token.take_events(),
            vec![
                TokenEvent::OwnerRemoved { account: CEO },
                TokenEvent::OwnerAdded { account: USER1 },
            ]
        );
        assert_eq!(token.set_owner(&CEO, USER2), Err(TokenError::AccessDenied));
        Ok(())
    }

    #[test]
    fn test_remove_last_owner() {
        let mut token = deploy();
        assert_eq!(token.remove_owner(&CEO, CEO), Err(TokenError::LastOwner));
        assert!(token.is_owner(&CEO));
    }

    #[test]
    fn test_disable_pause_while_paused() -> Result<(), TokenError> {
        let mut token = deploy();
        token.add_operator(&CEO, OPERATOR)?;
        token.pause(&OPERATOR)?;
        token.take_events();

        token.disable_pause_forever(&OPERATOR)?;
        assert!(!token.is_paused());
        assert!(token.is_pause_disabled());
        assert_eq!(
            token.take_events(),
            vec![
                TokenEvent::Unpaused { by: OPERATOR },
                TokenEvent::PauseDisabled { by: OPERATOR },
            ]
        );
        assert_eq!(token.pause(&OPERATOR), Err(TokenError::PauseNotAllowed));
        assert_eq!(token.unpause(&OPERATOR), Err(TokenError::NotPaused));
        assert_eq!(
            token.disable_pause_forever(&OPERATOR),
            Err(TokenError::AlreadyDisabled)
        );
        Ok(())
    }

    #[test]
    fn test_freeze_is_idempotent() -> Result<(), TokenError> {
        let mut token = deploy();
        token.freeze(&CEO, USER1)?;
        token.freeze(&CEO, USER1)?;
        token.unfreeze(&CEO, USER1)?;
        token.unfreeze(&CEO, USER1)?;
        assert_eq!(
            token.take_events(),
            vec![
                TokenEvent::Frozen {
                    account: USER1,
                    by: CEO
                },
                TokenEvent::Unfrozen {
                    account: USER1,
                    by: CEO
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_disable_freeze_keeps_unfreeze() -> Result<(), TokenError> {
        let mut token = deploy();
        token.freeze(&CEO, USER1)?;
        token.disable_freeze_forever(&CEO)?;
        assert_eq!(token.freeze(&CEO, USER2), Err(TokenError::FreezeNotAllowed));
        assert_eq!(
            token.disable_freeze_forever(&CEO),
            Err(TokenError::FreezeAlreadyDisabled)
        );
        token.unfreeze(&CEO, USER1)?;
        assert!(!token.is_frozen(&USER1));
        Ok(())
    }

    #[test]
    fn test_withdraw_self_tokens() -> Result<(), TokenError> {
        let mut token = deploy();
        token.mint(&CEO, TOKEN, U256::from(50))?;
        assert_eq!(token.withdraw_self_tokens(&CEO, USER1)?, U256::from(50));
        assert_eq!(token.balance_of(&TOKEN), U256::zero());
        assert_eq!(token.balance_of(&USER1), U256::from(50));
        assert_eq!(token.total_supply(), U256::from(50));
        assert_eq!(
            token.withdraw_self_tokens(&USER1, USER1),
            Err(TokenError::AccessDenied)
        );
        Ok(())
    }
}
