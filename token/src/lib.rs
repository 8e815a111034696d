//! Fungible token ledger
//!
//! Balances, allowances and supply of a single token, administered by owners and
//! operators, with a terminal-capable pause switch, per-account freezing, bulk
//! operations and notify-on-receipt transfers.

pub mod access;
pub mod address;
pub mod config;
pub mod error;
pub mod event;
pub mod external;
pub mod ledger;
pub mod lifecycle;
pub mod token;

pub use address::Address;
pub use config::TokenConfig;
pub use error::{ErrorKind, TokenError, TokenResult};
pub use event::TokenEvent;
pub use external::{
    ExternalCollection, ExternalFungible, NativeVault, ReceiverContext, TokenReceiver,
};
pub use lifecycle::PauseState;
pub use primitive_types::U256;
pub use token::{pair_up, FungibleToken};
