//! Guildhall Membership Ledger
//!
//! Owns the global sequence of membership tokens, the per-channel
//! membership sets, payment validation against channel costs, and custody
//! of collected funds pending administrator withdrawal.

pub mod error;
pub mod membership;

pub use error::{LedgerError, Result};
pub use membership::{MembershipLedger, MembershipToken};
