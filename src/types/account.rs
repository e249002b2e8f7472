//! Account-related types for the bank API
//!
//! This module defines the Account entity, its embedded Customer, and the
//! balance operations that enforce the non-negative balance invariant.

use super::error::BankError;
use super::statement::Statement;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Integer account numbers keep registry keys exact.
pub type AccountNumber = u64;

/// Customer identity attached to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Customer {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

/// Customer account state
///
/// The number is fixed at construction; the balance only changes through
/// [`Account::deposit`], [`Account::withdraw`] and [`Account::transfer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    balance: Decimal,
    customer: Customer,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(number: AccountNumber, customer: Customer) -> Self {
        Account {
            number,
            balance: Decimal::ZERO,
            customer,
        }
    }

    /// Create an account with an opening balance
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the opening balance is negative.
    pub fn with_balance(
        number: AccountNumber,
        customer: Customer,
        balance: Decimal,
    ) -> Result<Self, BankError> {
        if balance < Decimal::ZERO {
            return Err(BankError::invalid_amount("open"));
        }
        Ok(Account {
            number,
            balance,
            customer,
        })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Adding the amount would overflow the balance
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.credit("deposit", amount)
    }

    /// Withdraw funds from the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The amount exceeds the current balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.debit("withdraw", amount)
    }

    /// Move funds from this account into `destination`
    ///
    /// Both legs happen or neither does: if the deposit into `destination`
    /// fails, the withdrawal is reversed before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The amount exceeds this account's balance
    /// - Crediting the destination would overflow its balance
    pub fn transfer(
        &mut self,
        amount: Decimal,
        destination: &mut Account,
    ) -> Result<(), BankError> {
        self.debit("transfer", amount)?;

        if let Err(error) = destination.credit("transfer", amount) {
            // Restores the exact prior value, so it cannot overflow.
            self.balance += amount;
            return Err(error);
        }

        Ok(())
    }

    /// Check that a transfer of `amount` out of this account would pass
    /// validation, without changing the balance
    pub fn check_transfer(&self, amount: Decimal) -> Result<(), BankError> {
        self.check_debit("transfer", amount)
    }

    /// Snapshot the account for display
    pub fn statement(&self) -> Statement {
        Statement::from(self)
    }

    fn credit(&mut self, operation: &str, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(operation));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow(operation, self.number))?;

        Ok(())
    }

    fn debit(&mut self, operation: &str, amount: Decimal) -> Result<(), BankError> {
        self.check_debit(operation, amount)?;
        self.balance -= amount;
        Ok(())
    }

    fn check_debit(&self, operation: &str, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(operation));
        }

        if self.balance < amount {
            return Err(BankError::insufficient_funds(
                operation,
                self.number,
                self.balance,
                amount,
            ));
        }

        Ok(())
    }
}
