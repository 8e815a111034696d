//! Pause and Freeze Lifecycle
//!
//! Both features can be switched off for good; the terminal variants have no way back.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{TokenError, TokenResult};

/// Global pause state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PauseState {
    #[default]
    Active,
    Paused,
    /// Terminal: pausing is never possible again
    PauseDisabled,
}

/// Whether accounts may still be frozen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreezeFeature {
    #[default]
    Enabled,
    /// Terminal: `freeze` and `freeze_and_burn_tokens` are never possible again
    DisabledForever,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pause: PauseState,
    freeze_feature: FreezeFeature,
    frozen: IndexSet<Address>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause_state(&self) -> PauseState {
        self.pause
    }

    pub fn is_paused(&self) -> bool {
        self.pause == PauseState::Paused
    }

    pub fn is_pause_disabled(&self) -> bool {
        self.pause == PauseState::PauseDisabled
    }

    pub fn is_freeze_disabled(&self) -> bool {
        self.freeze_feature == FreezeFeature::DisabledForever
    }

    pub fn is_frozen(&self, account: &Address) -> bool {
        self.frozen.contains(account)
    }

    // ===== Pause =====

    pub fn pause(&mut self) -> TokenResult<()> {
        match self.pause {
            PauseState::Active => {
                self.pause = PauseState::Paused;
                Ok(())
            }
            PauseState::Paused => Err(TokenError::AlreadyPaused),
            PauseState::PauseDisabled => Err(TokenError::PauseNotAllowed),
        }
    }

    pub fn unpause(&mut self) -> TokenResult<()> {
        match self.pause {
            PauseState::Paused => {
                self.pause = PauseState::Active;
                Ok(())
            }
            PauseState::Active | PauseState::PauseDisabled => Err(TokenError::NotPaused),
        }
    }

    /// Returns whether the token was paused at the time it got disabled
    pub fn disable_pause_forever(&mut self) -> TokenResult<bool> {
        let was_paused = match self.pause {
            PauseState::Active => false,
            PauseState::Paused => true,
            PauseState::PauseDisabled => return Err(TokenError::AlreadyDisabled),
        };
        self.pause = PauseState::PauseDisabled;
        Ok(was_paused)
    }

    pub fn require_not_paused(&self) -> TokenResult<()> {
        if self.is_paused() {
            return Err(TokenError::TransferWhilePaused);
        }
        Ok(())
    }

    // ===== Freeze =====

    pub fn require_freeze_allowed(&self) -> TokenResult<()> {
        if self.is_freeze_disabled() {
            return Err(TokenError::FreezeNotAllowed);
        }
        Ok(())
    }

    pub fn require_not_frozen(&self, source: &Address) -> TokenResult<()> {
        if self.is_frozen(source) {
            return Err(TokenError::SourceFrozen);
        }
        Ok(())
    }

    pub fn require_frozen(&self, account: &Address) -> TokenResult<()> {
        if !self.is_frozen(account) {
            return Err(TokenError::NotFrozen);
        }
        Ok(())
    }

    /// Returns whether the account was newly frozen
    pub fn freeze(&mut self, account: Address) -> TokenResult<bool> {
        self.require_freeze_allowed()?;
        Ok(self.frozen.insert(account))
    }

    /// Returns whether the account was frozen before
    pub fn unfreeze(&mut self, account: &Address) -> bool {
        self.frozen.swap_remove(account)
    }

    pub fn disable_freeze_forever(&mut self) -> TokenResult<()> {
        if self.is_freeze_disabled() {
            return Err(TokenError::FreezeAlreadyDisabled);
        }
        self.freeze_feature = FreezeFeature::DisabledForever;
        Ok(())
    }
}
