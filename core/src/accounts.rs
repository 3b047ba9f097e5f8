//! Account balance substrate
//!
//! Models the external currency system the membership ledger settles
//! against: a flat address -> balance map. Provisioning (the first credit
//! to an address) is done by the surrounding harness.

use crate::error::{CoreError, Result};
use crate::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Accounts {
    balances: HashMap<Address, Amount>,
}

impl Accounts {
    pub fn new() -> Self {
        Accounts {
            balances: HashMap::new(),
        }
    }

    /// Balance of an address. Unknown addresses hold zero.
    pub fn balance(&self, address: &str) -> Amount {
        self.balances.get(address).copied().unwrap_or(0)
    }

    /// Credit an address, creating the account on first use.
    pub fn credit(&mut self, address: &str, amount: Amount) -> Result<()> {
        let balance = self.balances.entry(address.to_string()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(CoreError::AmountOverflow)?;
        Ok(())
    }

    /// Debit an address, failing without any change if funds are short.
    pub fn debit(&mut self, address: &str, amount: Amount) -> Result<()> {
        let balance = self.balances.entry(address.to_string()).or_insert(0);
        if *balance < amount {
            return Err(CoreError::InsufficientFunds {
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_and_balance() {
        let mut accounts = Accounts::new();

        accounts.credit("alice", 1000).unwrap();
        assert_eq!(accounts.balance("alice"), 1000);

        accounts.credit("alice", 500).unwrap();
        assert_eq!(accounts.balance("alice"), 1500);
    }

    #[test]
    fn test_unknown_address_has_zero_balance() {
        let accounts = Accounts::new();
        assert_eq!(accounts.balance("nobody"), 0);
    }

    #[test]
    fn test_debit() {
        let mut accounts = Accounts::new();

        accounts.credit("alice", 1000).unwrap();
        accounts.debit("alice", 400).unwrap();
        assert_eq!(accounts.balance("alice"), 600);
    }

    #[test]
    fn test_debit_insufficient_funds() {
        let mut accounts = Accounts::new();
        accounts.credit("alice", 100).unwrap();

        let result = accounts.debit("alice", 200);
        assert!(matches!(
            result,
            Err(CoreError::InsufficientFunds {
                required: 200,
                available: 100
            })
        ));
        // Failed debit leaves the balance untouched
        assert_eq!(accounts.balance("alice"), 100);
    }

    #[test]
    fn test_credit_overflow() {
        let mut accounts = Accounts::new();
        accounts.credit("alice", u64::MAX).unwrap();

        let result = accounts.credit("alice", 1);
        assert!(matches!(result, Err(CoreError::AmountOverflow)));
    }
}
