//! Channel records and the registry that owns them

use crate::error::{RegistryError, Result};
use guildhall_core::{Address, Amount};
use serde::{Deserialize, Serialize};

/// A named membership group with a fixed joining cost.
///
/// Channels are immutable once created and are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    pub cost: Amount,
}

/// Registry of all channels, created exclusively by the administrator.
///
/// Ids are dense and sequential starting at 1: a channel's id is its
/// position in creation order plus one, so the count and the highest id
/// always agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRegistry {
    owner: Address,
    channels: Vec<Channel>,
}

impl ChannelRegistry {
    pub fn new(owner: Address) -> Self {
        ChannelRegistry {
            owner,
            channels: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Create a channel. Administrator only.
    ///
    /// Returns the newly assigned channel id. A zero cost is allowed;
    /// empty and all-whitespace names are rejected.
    pub fn create_channel(&mut self, caller: &str, name: &str, cost: Amount) -> Result<u64> {
        if caller != self.owner {
            return Err(RegistryError::Unauthorized(caller.to_string()));
        }
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let id = self.channels.len() as u64 + 1;
        self.channels.push(Channel {
            id,
            name: name.to_string(),
            cost,
        });

        Ok(id)
    }

    /// Look up a channel by its 1-indexed id.
    pub fn get_channel(&self, id: u64) -> Result<&Channel> {
        if id == 0 {
            return Err(RegistryError::ChannelNotFound(id));
        }
        self.channels
            .get((id - 1) as usize)
            .ok_or(RegistryError::ChannelNotFound(id))
    }

    pub fn total_channels(&self) -> u64 {
        self.channels.len() as u64
    }

    /// All channels in creation order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}
