//! Guildhall Node
//!
//! The assembled membership system: initialization metadata, configuration
//! loading, and the serialized call surface over the channel registry,
//! membership ledger, and account substrate.

pub mod config;
pub mod error;
pub mod node;

pub use config::{ConfigError, NodeConfig};
pub use error::{NodeError, Result};
pub use node::Guildhall;
