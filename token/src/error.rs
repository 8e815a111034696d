//! Token Error Codes
//!
//! Range: 0x0300 - 0x03FF
//! Format: TOKEN_ERROR_<CATEGORY>_<SPECIFIC>
//!
//! The `Display` text of every [`TokenError`] is the revert reason observed by callers
//! and must stay byte-for-byte stable.

use thiserror::Error;

// ===== Authorization Errors (0x0300 - 0x030F) =====

pub const TOKEN_ERROR_ACCESS_DENIED: u64 = 0x0300;
pub const TOKEN_ERROR_LAST_OWNER: u64 = 0x0301;

// ===== Lifecycle Errors (0x0310 - 0x031F) =====

pub const TOKEN_ERROR_TRANSFER_WHILE_PAUSED: u64 = 0x0310;
pub const TOKEN_ERROR_ALREADY_PAUSED: u64 = 0x0311;
pub const TOKEN_ERROR_NOT_PAUSED: u64 = 0x0312;
pub const TOKEN_ERROR_PAUSE_ALREADY_DISABLED: u64 = 0x0313;
pub const TOKEN_ERROR_PAUSE_NOT_ALLOWED: u64 = 0x0314;
pub const TOKEN_ERROR_SOURCE_FROZEN: u64 = 0x0315;
pub const TOKEN_ERROR_FREEZE_NOT_ALLOWED: u64 = 0x0316;
pub const TOKEN_ERROR_FREEZE_ALREADY_DISABLED: u64 = 0x0317;
pub const TOKEN_ERROR_NOT_FROZEN: u64 = 0x0318;

// ===== Arithmetic Errors (0x0320 - 0x032F) =====

pub const TOKEN_ERROR_INSUFFICIENT_BALANCE: u64 = 0x0320;
pub const TOKEN_ERROR_BURN_EXCEEDS_BALANCE: u64 = 0x0321;
pub const TOKEN_ERROR_INSUFFICIENT_ALLOWANCE: u64 = 0x0322;
pub const TOKEN_ERROR_ALLOWANCE_BELOW_ZERO: u64 = 0x0323;
pub const TOKEN_ERROR_SELF_TRANSFER: u64 = 0x0324;
pub const TOKEN_ERROR_ADDITION_OVERFLOW: u64 = 0x0325;
pub const TOKEN_ERROR_MULTIPLICATION_OVERFLOW: u64 = 0x0326;

// ===== Input Errors (0x0330 - 0x033F) =====

pub const TOKEN_ERROR_LENGTH_MISMATCH: u64 = 0x0330;
pub const TOKEN_ERROR_INVALID_CONFIG: u64 = 0x0331;
pub const TOKEN_ERROR_INVALID_SNAPSHOT: u64 = 0x0332;

// ===== External Errors (0x0340 - 0x034F) =====

pub const TOKEN_ERROR_RECEIVER_REJECTED: u64 = 0x0340;
pub const TOKEN_ERROR_EXTERNAL_CALL: u64 = 0x0341;

/// Error category, used by callers deciding whether a retry can succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller lacks the owner/operator role
    Authorization,
    /// Operation invalid for the current pause/freeze state
    LifecycleViolation,
    /// Insufficient balance or allowance, self-transfer, overflow
    ArithmeticViolation,
    /// Malformed input
    InputViolation,
    /// A collaborator outside the ledger refused or failed
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    // Authorization
    #[error("Access denied")]
    AccessDenied,
    #[error("AccessControl: can't remove the last owner")]
    LastOwner,

    // Lifecycle
    #[error("ERC20Pausable: token transfer while paused")]
    TransferWhilePaused,
    #[error("Pausable: paused")]
    AlreadyPaused,
    #[error("Pausable: not paused")]
    NotPaused,
    #[error("Pausable: Pause was already disabled")]
    AlreadyDisabled,
    #[error("Pausable: Pause not allowed")]
    PauseNotAllowed,
    #[error("FungibleToken: source address was frozen")]
    SourceFrozen,
    #[error("FungibleToken: Freeze not allowed")]
    FreezeNotAllowed,
    #[error("FungibleToken: Freeze was already disabled")]
    FreezeAlreadyDisabled,
    #[error("FungibleToken: Target account is not frozen")]
    NotFrozen,

    // Arithmetic
    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance,
    #[error("ERC20: burn amount exceeds balance")]
    BurnExceedsBalance,
    #[error("ERC20: transfer amount exceeds allowance")]
    InsufficientAllowance,
    #[error("ERC20: decreased allowance below zero")]
    AllowanceBelowZero,
    #[error("FungibleToken: can't transfer to token contract self")]
    SelfTransferToContract,
    #[error("SafeMath: addition overflow")]
    Overflow,
    #[error("SafeMath: multiplication overflow")]
    MultiplicationOverflow,

    // Input
    #[error("FungibleToken: array length mismatch")]
    LengthMismatch,
    #[error("FungibleToken: invalid config: {0}")]
    InvalidConfig(String),
    #[error("FungibleToken: invalid snapshot: {0}")]
    InvalidSnapshot(String),

    // External
    #[error("FungibleToken: receiver rejected tokens: {0}")]
    ReceiverRejected(String),
    #[error("FungibleToken: external call failed: {0}")]
    ExternalCall(String),
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AccessDenied | Self::LastOwner => ErrorKind::Authorization,
            Self::TransferWhilePaused
            | Self::AlreadyPaused
            | Self::NotPaused
            | Self::AlreadyDisabled
            | Self::PauseNotAllowed
            | Self::SourceFrozen
            | Self::FreezeNotAllowed
            | Self::FreezeAlreadyDisabled
            | Self::NotFrozen => ErrorKind::LifecycleViolation,
            Self::InsufficientBalance
            | Self::BurnExceedsBalance
            | Self::InsufficientAllowance
            | Self::AllowanceBelowZero
            | Self::SelfTransferToContract
            | Self::Overflow
            | Self::MultiplicationOverflow => ErrorKind::ArithmeticViolation,
            Self::LengthMismatch | Self::InvalidConfig(_) | Self::InvalidSnapshot(_) => {
                ErrorKind::InputViolation
            }
            Self::ReceiverRejected(_) | Self::ExternalCall(_) => ErrorKind::External,
        }
    }

    /// Convert error to u64 error code
    pub fn to_code(&self) -> u64 {
        match self {
            Self::AccessDenied => TOKEN_ERROR_ACCESS_DENIED,
            Self::LastOwner => TOKEN_ERROR_LAST_OWNER,
            Self::TransferWhilePaused => TOKEN_ERROR_TRANSFER_WHILE_PAUSED,
            Self::AlreadyPaused => TOKEN_ERROR_ALREADY_PAUSED,
            Self::NotPaused => TOKEN_ERROR_NOT_PAUSED,
            Self::AlreadyDisabled => TOKEN_ERROR_PAUSE_ALREADY_DISABLED,
            Self::PauseNotAllowed => TOKEN_ERROR_PAUSE_NOT_ALLOWED,
            Self::SourceFrozen => TOKEN_ERROR_SOURCE_FROZEN,
            Self::FreezeNotAllowed => TOKEN_ERROR_FREEZE_NOT_ALLOWED,
            Self::FreezeAlreadyDisabled => TOKEN_ERROR_FREEZE_ALREADY_DISABLED,
            Self::NotFrozen => TOKEN_ERROR_NOT_FROZEN,
            Self::InsufficientBalance => TOKEN_ERROR_INSUFFICIENT_BALANCE,
            Self::BurnExceedsBalance => TOKEN_ERROR_BURN_EXCEEDS_BALANCE,
            Self::InsufficientAllowance => TOKEN_ERROR_INSUFFICIENT_ALLOWANCE,
            Self::AllowanceBelowZero => TOKEN_ERROR_ALLOWANCE_BELOW_ZERO,
            Self::SelfTransferToContract => TOKEN_ERROR_SELF_TRANSFER,
            Self::Overflow => TOKEN_ERROR_ADDITION_OVERFLOW,
            Self::MultiplicationOverflow => TOKEN_ERROR_MULTIPLICATION_OVERFLOW,
            Self::LengthMismatch => TOKEN_ERROR_LENGTH_MISMATCH,
            Self::InvalidConfig(_) => TOKEN_ERROR_INVALID_CONFIG,
            Self::InvalidSnapshot(_) => TOKEN_ERROR_INVALID_SNAPSHOT,
            Self::ReceiverRejected(_) => TOKEN_ERROR_RECEIVER_REJECTED,
            Self::ExternalCall(_) => TOKEN_ERROR_EXTERNAL_CALL,
        }
    }

    /// Create error from u64 error code
    ///
    /// Variants carrying a message come back with an empty one.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            TOKEN_ERROR_ACCESS_DENIED => Some(Self::AccessDenied),
            TOKEN_ERROR_LAST_OWNER => Some(Self::LastOwner),
            TOKEN_ERROR_TRANSFER_WHILE_PAUSED => Some(Self::TransferWhilePaused),
            TOKEN_ERROR_ALREADY_PAUSED => Some(Self::AlreadyPaused),
            TOKEN_ERROR_NOT_PAUSED => Some(Self::NotPaused),
            TOKEN_ERROR_PAUSE_ALREADY_DISABLED => Some(Self::AlreadyDisabled),
            TOKEN_ERROR_PAUSE_NOT_ALLOWED => Some(Self::PauseNotAllowed),
            TOKEN_ERROR_SOURCE_FROZEN => Some(Self::SourceFrozen),
            TOKEN_ERROR_FREEZE_NOT_ALLOWED => Some(Self::FreezeNotAllowed),
            TOKEN_ERROR_FREEZE_ALREADY_DISABLED => Some(Self::FreezeAlreadyDisabled),
            TOKEN_ERROR_NOT_FROZEN => Some(Self::NotFrozen),
            TOKEN_ERROR_INSUFFICIENT_BALANCE => Some(Self::InsufficientBalance),
            TOKEN_ERROR_BURN_EXCEEDS_BALANCE => Some(Self::BurnExceedsBalance),
            TOKEN_ERROR_INSUFFICIENT_ALLOWANCE => Some(Self::InsufficientAllowance),
            TOKEN_ERROR_ALLOWANCE_BELOW_ZERO => Some(Self::AllowanceBelowZero),
            TOKEN_ERROR_SELF_TRANSFER => Some(Self::SelfTransferToContract),
            TOKEN_ERROR_ADDITION_OVERFLOW => Some(Self::Overflow),
            TOKEN_ERROR_MULTIPLICATION_OVERFLOW => Some(Self::MultiplicationOverflow),
            TOKEN_ERROR_LENGTH_MISMATCH => Some(Self::LengthMismatch),
            TOKEN_ERROR_INVALID_CONFIG => Some(Self::InvalidConfig(String::new())),
            TOKEN_ERROR_INVALID_SNAPSHOT => Some(Self::InvalidSnapshot(String::new())),
            TOKEN_ERROR_RECEIVER_REJECTED => Some(Self::ReceiverRejected(String::new())),
            TOKEN_ERROR_EXTERNAL_CALL => Some(Self::ExternalCall(String::new())),
            _ => None,
        }
    }
}

/// Result type for token operations
pub type TokenResult<T> = Result<T, TokenError>;
