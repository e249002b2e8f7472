//! Startup account set
//!
//! There is no endpoint for opening accounts; the server starts with this
//! fixed set.

use super::registry::Registry;
use crate::types::{Account, BankError, Customer};

/// The accounts every server starts with
pub fn default_accounts() -> Vec<Account> {
    vec![
        Account::new(
            1001,
            Customer::new("John", "Los Angeles, California", "(213) 555 0147"),
        ),
        Account::new(
            1002,
            Customer::new("Mark", "Irvine, California", "(949) 555 0198"),
        ),
    ]
}

/// Registry populated with [`default_accounts`]
pub fn default_registry() -> Result<Registry, BankError> {
    Registry::seeded(default_accounts())
}
