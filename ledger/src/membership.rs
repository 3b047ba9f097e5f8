//! Membership token minting and treasury custody

use crate::error::{LedgerError, Result};
use guildhall_core::{Address, Amount};
use registry::ChannelRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Proof of admission to a single channel.
///
/// Token ids are dense and sequential starting at 1 and shared across all
/// channels: a token's id is its position in mint order plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipToken {
    pub id: u64,
    pub channel_id: u64,
    pub account: Address,
}

/// Ledger of issued memberships and collected funds.
///
/// Membership is monotonic per (channel, account) pair: once joined,
/// always joined. Tokens are never transferred or burned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipLedger {
    owner: Address,
    tokens: Vec<MembershipToken>,
    members: HashMap<u64, HashSet<Address>>,
    treasury: Amount,
}

impl MembershipLedger {
    pub fn new(owner: Address) -> Self {
        MembershipLedger {
            owner,
            tokens: Vec::new(),
            members: HashMap::new(),
            treasury: 0,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Join a channel by paying its exact cost. Returns the minted token id.
    ///
    /// Channel lookup is delegated to the registry; a nonexistent channel
    /// propagates as a registry error. All validation happens before any
    /// state is written, so a failed join changes nothing.
    pub fn join(
        &mut self,
        registry: &ChannelRegistry,
        channel_id: u64,
        payment: Amount,
        caller: &str,
    ) -> Result<u64> {
        let channel = registry.get_channel(channel_id)?;

        if payment != channel.cost {
            return Err(LedgerError::PaymentMismatch {
                expected: channel.cost,
                paid: payment,
            });
        }
        if self.has_joined(channel_id, caller) {
            return Err(LedgerError::AlreadyJoined {
                channel_id,
                account: caller.to_string(),
            });
        }

        // Checked before the mint so a failed join writes nothing
        let treasury = self
            .treasury
            .checked_add(payment)
            .ok_or(LedgerError::TreasuryOverflow)?;

        let token_id = self.tokens.len() as u64 + 1;
        self.tokens.push(MembershipToken {
            id: token_id,
            channel_id,
            account: caller.to_string(),
        });
        self.members
            .entry(channel_id)
            .or_default()
            .insert(caller.to_string());
        self.treasury = treasury;

        Ok(token_id)
    }

    /// Membership check. Unknown channels and accounts are simply false.
    pub fn has_joined(&self, channel_id: u64, account: &str) -> bool {
        self.members
            .get(&channel_id)
            .map(|set| set.contains(account))
            .unwrap_or(false)
    }

    /// Count of tokens minted system-wide.
    pub fn total_supply(&self) -> u64 {
        self.tokens.len() as u64
    }

    /// Funds held pending administrator withdrawal.
    pub fn treasury_balance(&self) -> Amount {
        self.treasury
    }

    /// Drain the full treasury balance. Administrator only.
    ///
    /// Returns the drained amount; draining an empty treasury is a
    /// successful no-op returning zero.
    pub fn withdraw(&mut self, caller: &str) -> Result<Amount> {
        if caller != self.owner {
            return Err(LedgerError::Unauthorized(caller.to_string()));
        }

        let amount = self.treasury;
        self.treasury = 0;
        Ok(amount)
    }

    /// Full record of a minted token by its 1-indexed id.
    pub fn token(&self, token_id: u64) -> Option<&MembershipToken> {
        if token_id == 0 {
            return None;
        }
        self.tokens.get((token_id - 1) as usize)
    }

    /// Holder of a minted token.
    pub fn owner_of(&self, token_id: u64) -> Option<&Address> {
        self.token(token_id).map(|token| &token.account)
    }

    /// Number of membership tokens held by an account across all channels.
    pub fn balance_of(&self, account: &str) -> u64 {
        self.tokens
            .iter()
            .filter(|token| token.account == account)
            .count() as u64
    }
}
