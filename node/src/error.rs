//! Node error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("Core error: {0}")]
    Core(#[from] guildhall_core::CoreError),

    #[error("Registry error: {0}")]
    Registry(#[from] registry::RegistryError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] ledger::LedgerError),
}

pub type Result<T> = std::result::Result<T, NodeError>;
