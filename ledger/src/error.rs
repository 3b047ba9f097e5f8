//! Ledger error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Registry error: {0}")]
    Registry(#[from] registry::RegistryError),

    #[error("Payment mismatch: channel costs {expected}, paid {paid}")]
    PaymentMismatch { expected: u64, paid: u64 },

    #[error("Already joined: {account} is a member of channel {channel_id}")]
    AlreadyJoined { channel_id: u64, account: String },

    #[error("Unauthorized: {0} is not the administrator")]
    Unauthorized(String),

    #[error("Treasury overflow")]
    TreasuryOverflow,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
