//! Error types for the bank API
//!
//! This module defines all error types that can occur while handling a
//! request. Errors are rendered with their `Display` text straight into the
//! HTTP response body, so the messages are written for end users.
//!
//! # Error Categories
//!
//! - **Request Errors**: Missing or malformed query parameters
//! - **Lookup Errors**: Unknown account numbers
//! - **Account Errors**: Non-positive amounts, insufficient funds
//! - **Arithmetic Errors**: Balance overflow
//! - **Seeding Errors**: Duplicate account numbers at startup

use super::account::AccountNumber;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Query parameter accepted by the account routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParameter {
    /// `number` - the account the operation applies to
    Number,
    /// `amount` - the amount to deposit, withdraw or transfer
    Amount,
    /// `dest` - the transfer destination account
    Destination,
}

impl QueryParameter {
    /// Name of the parameter in the query string
    pub fn key(self) -> &'static str {
        match self {
            QueryParameter::Number => "number",
            QueryParameter::Amount => "amount",
            QueryParameter::Destination => "dest",
        }
    }

    fn label(self) -> &'static str {
        match self {
            QueryParameter::Number => "account number",
            QueryParameter::Amount => "amount number",
            QueryParameter::Destination => "account destination number",
        }
    }
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Main error type for the bank API
///
/// Every variant carries enough context to produce the user facing message
/// and to log the rejected operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// A required query parameter was absent or empty
    #[error("{} is missing!", capitalize(parameter.label()))]
    MissingParameter {
        /// The missing parameter
        parameter: QueryParameter,
    },

    /// A query parameter could not be parsed as a number
    #[error("Invalid {}!", parameter.label())]
    InvalidNumberFormat {
        /// The malformed parameter
        parameter: QueryParameter,
    },

    /// No account is registered under the requested number
    #[error("Account with number {number} can't be found!")]
    AccountNotFound {
        /// The unknown account number
        number: AccountNumber,
    },

    /// Amount is zero or negative
    ///
    /// The account is left untouched.
    #[error("the amount to {operation} should be greater than zero")]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: String,
    },

    /// Amount exceeds the current balance
    ///
    /// The account is left untouched.
    #[error("the amount to {operation} should be less than the account's balance")]
    InsufficientFunds {
        /// Operation that was rejected
        operation: String,
        /// Account that lacks funds
        number: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance representable.
    #[error("Arithmetic overflow in {operation} for account {number}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        number: AccountNumber,
    },

    /// An account number was seeded twice
    #[error("Account with number {number} already exists")]
    DuplicateAccount {
        /// The duplicated account number
        number: AccountNumber,
    },
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create a MissingParameter error
    pub fn missing_parameter(parameter: QueryParameter) -> Self {
        BankError::MissingParameter { parameter }
    }

    /// Create an InvalidNumberFormat error
    pub fn invalid_number_format(parameter: QueryParameter) -> Self {
        BankError::InvalidNumberFormat { parameter }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(number: AccountNumber) -> Self {
        BankError::AccountNotFound { number }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str) -> Self {
        BankError::InvalidAmount {
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        operation: &str,
        number: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    ) -> Self {
        BankError::InsufficientFunds {
            operation: operation.to_string(),
            number,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, number: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            number,
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(number: AccountNumber) -> Self {
        BankError::DuplicateAccount { number }
    }
}
