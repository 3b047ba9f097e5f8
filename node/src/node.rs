//! The assembled membership node

use crate::config::NodeConfig;
use crate::error::Result;
use guildhall_core::{Accounts, Address, Amount, CoreError};
use ledger::MembershipLedger;
use parking_lot::RwLock;
use registry::{Channel, ChannelRegistry};

struct State {
    registry: ChannelRegistry,
    ledger: MembershipLedger,
    accounts: Accounts,
}

/// A running membership system instance.
///
/// All mutating calls serialize through a single write lock. The account
/// debit or credit and the matching ledger update for one call happen
/// inside the same critical section, so readers never observe payment
/// recorded without membership or the other way around.
pub struct Guildhall {
    name: String,
    symbol: String,
    owner: Address,
    state: RwLock<State>,
}

impl Guildhall {
    /// Initialize the system, recording `owner` as the administrator.
    pub fn new(config: NodeConfig, owner: impl Into<Address>) -> Self {
        let owner = owner.into();
        Guildhall {
            name: config.name,
            symbol: config.symbol,
            owner: owner.clone(),
            state: RwLock::new(State {
                registry: ChannelRegistry::new(owner.clone()),
                ledger: MembershipLedger::new(owner),
                accounts: Accounts::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Provision or top up an account. Harness-facing.
    pub fn fund_account(&self, address: &str, amount: Amount) -> Result<()> {
        let mut state = self.state.write();
        state.accounts.credit(address, amount)?;
        Ok(())
    }

    /// Balance held by an address in the account substrate.
    pub fn account_balance(&self, address: &str) -> Amount {
        self.state.read().accounts.balance(address)
    }

    /// Create a channel. Administrator only. Returns the new channel id.
    pub fn create_channel(&self, caller: &str, name: &str, cost: Amount) -> Result<u64> {
        let mut state = self.state.write();
        let id = state.registry.create_channel(caller, name, cost)?;
        log::info!("Channel {} created: {:?} (cost {})", id, name, cost);
        Ok(id)
    }

    /// Stored attributes of a channel, by 1-indexed id.
    pub fn get_channel(&self, id: u64) -> Result<Channel> {
        let state = self.state.read();
        Ok(state.registry.get_channel(id)?.clone())
    }

    pub fn total_channels(&self) -> u64 {
        self.state.read().registry.total_channels()
    }

    /// Join a channel, paying its exact cost from the caller's account.
    /// Returns the minted membership token id.
    ///
    /// The funds check, the membership record, the treasury credit, and the
    /// account debit form one atomic step under the write lock: a failure
    /// at any point leaves every balance and membership flag untouched.
    pub fn join(&self, caller: &str, channel_id: u64, payment: Amount) -> Result<u64> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let available = state.accounts.balance(caller);
        if available < payment {
            return Err(CoreError::InsufficientFunds {
                required: payment,
                available,
            }
            .into());
        }

        let token_id = match state.ledger.join(&state.registry, channel_id, payment, caller) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Join rejected for {} on channel {}: {}", caller, channel_id, e);
                return Err(e.into());
            }
        };
        // Cannot fail: funds were checked above and the lock is still held.
        state.accounts.debit(caller, payment)?;

        log::info!(
            "Token {} minted: {} joined channel {} for {}",
            token_id,
            caller,
            channel_id,
            payment
        );
        Ok(token_id)
    }

    /// Membership check; false for unknown channels and accounts.
    pub fn has_joined(&self, channel_id: u64, account: &str) -> bool {
        self.state.read().ledger.has_joined(channel_id, account)
    }

    /// Count of membership tokens minted system-wide.
    pub fn total_supply(&self) -> u64 {
        self.state.read().ledger.total_supply()
    }

    /// Funds held pending administrator withdrawal.
    pub fn treasury_balance(&self) -> Amount {
        self.state.read().ledger.treasury_balance()
    }

    /// Drain the treasury to the administrator's account. Administrator
    /// only. Returns the withdrawn amount; zero is a successful no-op.
    pub fn withdraw(&self, caller: &str) -> Result<Amount> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        // The drain and the owner credit stand or fall together: make sure
        // the credit cannot overflow before the ledger gives up custody.
        // An unauthorized caller must still see the authorization error, so
        // the precheck only runs for the administrator.
        if caller == state.ledger.owner() {
            let pending = state.ledger.treasury_balance();
            state
                .accounts
                .balance(&self.owner)
                .checked_add(pending)
                .ok_or(CoreError::AmountOverflow)?;
        }

        let amount = state.ledger.withdraw(caller)?;
        state.accounts.credit(&self.owner, amount)?;

        log::info!("Treasury withdrawal: {} to {}", amount, self.owner);
        Ok(amount)
    }

    /// Holder of a minted token, by 1-indexed token id.
    pub fn owner_of(&self, token_id: u64) -> Option<Address> {
        self.state.read().ledger.owner_of(token_id).cloned()
    }

    /// Number of membership tokens held by an account across all channels.
    pub fn balance_of(&self, account: &str) -> u64 {
        self.state.read().ledger.balance_of(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_records_metadata_and_owner() {
        let config = NodeConfig {
            name: "Discord".to_string(),
            symbol: "DC".to_string(),
        };
        let hall = Guildhall::new(config, "deployer");

        assert_eq!(hall.name(), "Discord");
        assert_eq!(hall.symbol(), "DC");
        assert_eq!(hall.owner(), "deployer");
        assert_eq!(hall.total_channels(), 0);
        assert_eq!(hall.total_supply(), 0);
        assert_eq!(hall.treasury_balance(), 0);
    }

    #[test]
    fn test_fund_account() {
        let hall = Guildhall::new(NodeConfig::default(), "deployer");

        hall.fund_account("user", 500).unwrap();
        hall.fund_account("user", 250).unwrap();
        assert_eq!(hall.account_balance("user"), 750);
        assert_eq!(hall.account_balance("stranger"), 0);
    }
}
