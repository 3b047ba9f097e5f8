//! Registry error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unauthorized: {0} is not the administrator")]
    Unauthorized(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(u64),

    #[error("Channel name cannot be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, RegistryError>;
