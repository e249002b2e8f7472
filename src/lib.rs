//! Bank API Library
//! # Overview
//!
//! This library provides an in-memory account registry exposed over HTTP with
//! four operations: statement, deposit, withdrawal and transfer.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Customer, Statement, BankError)
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Synchronized account lookup and balance operations
//!   - [`core::seed`] - Accounts loaded at startup
//! - [`http`] - axum router, query parsing and response rendering
//! - [`cli`] - CLI arguments parsing
//! - [`telemetry`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Deposit**: Credit a positive amount to an account
//! - **Withdraw**: Debit a positive amount no larger than the balance
//! - **Transfer**: Withdraw from one account and deposit into another, as a
//!   single unit under both account locks
//! - **Statement**: Read-only snapshot of an account's identity and balance
//!
//! # Invariants
//!
//! - Balances never go negative
//! - A failed operation leaves every balance it touched unchanged
//! - Looking up an unknown account never creates one

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod telemetry;
pub mod types;

pub use crate::core::Registry;
pub use types::{Account, AccountNumber, BankError, Customer, QueryParameter, Statement};
