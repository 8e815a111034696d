//! Token Constants and Deployment Configuration

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::error::{TokenError, TokenResult};

// ===== Metadata Limits =====

/// Maximum length of token name (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length of token symbol/ticker (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 12;

/// Maximum decimals for a token
pub const MAX_DECIMALS: u8 = 18;

// ===== Supply =====

/// Decimals of a token unless configured otherwise
pub const DEFAULT_DECIMALS: u8 = 18;

/// Number of base units in one whole token, the scale applied by `mint_add_decimals`
pub fn decimals_scale(decimals: u8) -> U256 {
    U256::exp10(decimals as usize)
}

/// Deployment parameters of a token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Token name
    pub name: String,
    /// Token symbol/ticker
    pub symbol: String,
    /// Decimal places reported to wallets
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

impl TokenConfig {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: DEFAULT_DECIMALS,
        }
    }

    /// Load a config from its JSON form
    pub fn from_json(json: &str) -> TokenResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TokenError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TokenResult<()> {
        if self.name.is_empty() {
            return Err(TokenError::InvalidConfig("name cannot be empty".into()));
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(TokenError::InvalidConfig("name too long".into()));
        }
        if self.symbol.is_empty() {
            return Err(TokenError::InvalidConfig("symbol cannot be empty".into()));
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(TokenError::InvalidConfig("symbol too long".into()));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(TokenError::InvalidConfig("decimals too high".into()));
        }
        Ok(())
    }
}
