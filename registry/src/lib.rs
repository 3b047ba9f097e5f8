//! Guildhall Channel Registry
//!
//! Owns the collection of channels: sequential id assignment, creation
//! validation, and read access to channel attributes and counts.

pub mod channel;
pub mod error;

pub use channel::{Channel, ChannelRegistry};
pub use error::{RegistryError, Result};
