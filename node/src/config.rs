//! Node configuration (guildhall.toml) support
//!
//! Format:
//! ```toml
//! name = "Guildhall"
//! symbol = "GH"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Collection metadata recorded at initialization and returned verbatim by
/// the node's `name()` / `symbol()` accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    pub symbol: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            name: "Guildhall".to_string(),
            symbol: "GH".to_string(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
