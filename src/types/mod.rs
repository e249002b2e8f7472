//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and Customer, with the balance operations
//! - `statement`: Read-only account snapshots
//! - `error`: Error types for the bank API

pub mod account;
pub mod error;
pub mod statement;

pub use account::{Account, AccountNumber, Customer};
pub use error::{BankError, QueryParameter};
pub use statement::Statement;
