//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Amount overflow")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, CoreError>;
