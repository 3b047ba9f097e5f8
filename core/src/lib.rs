//! Guildhall Core Library
//!
//! Shared currency types and the account balance substrate that the
//! membership node settles payments against.

pub mod accounts;
pub mod constants;
pub mod error;

pub use accounts::Accounts;
pub use constants::COIN;
pub use error::{CoreError, Result};

/// Account identity. Plain string addresses, provisioned externally.
pub type Address = String;

/// Monetary amount in the smallest indivisible unit.
pub type Amount = u64;
