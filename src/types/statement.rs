//! Account statements
//!
//! A statement is the read-only view of an account handed back to callers.
//! It owns its data so it can be rendered after the account lock is released.

use super::account::{Account, AccountNumber, Customer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of an account's identity and balance
///
/// Serializes to JSON for the HTTP routes; `Display` gives the short text
/// form `<number> - <name> - <balance>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub number: AccountNumber,
    pub customer: Customer,
    pub balance: Decimal,
}

impl From<&Account> for Statement {
    fn from(account: &Account) -> Self {
        Statement {
            number: account.number(),
            customer: account.customer().clone(),
            balance: account.balance(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.number,
            self.customer.name,
            self.balance.normalize()
        )
    }
}
