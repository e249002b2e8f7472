//! Thread-safe account registry
//!
//! This module provides the `Registry` struct, which maps account numbers to
//! accounts and runs every balance operation under the owning account's lock.
//!
//! # Design
//!
//! The key set is stored in a `DashMap` so lookups from concurrent request
//! handlers never contend on a global lock. Each account sits behind its own
//! `Mutex`, which serializes operations on the same account while leaving
//! other accounts free.
//!
//! Adding accounts requires `&mut self`. Once the registry is shared (behind
//! an `Arc`) its key set is frozen; only balances change.
//!
//! # Lock Ordering
//!
//! A transfer holds both account locks for the whole operation. Locks are
//! always taken in ascending account-number order, so two opposite transfers
//! between the same pair of accounts cannot deadlock.

use crate::types::{Account, AccountNumber, BankError, Statement};
use dashmap::DashMap;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// Shared, lockable handle to a registered account
pub type AccountHandle = Arc<Mutex<Account>>;

/// Account registry shared by all request handlers
#[derive(Debug, Default)]
pub struct Registry {
    accounts: DashMap<AccountNumber, AccountHandle>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Build a registry from a fixed set of accounts
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if two accounts share a number.
    pub fn seeded<I>(accounts: I) -> Result<Self, BankError>
    where
        I: IntoIterator<Item = Account>,
    {
        let mut registry = Self::new();
        for account in accounts {
            registry.insert(account)?;
        }
        Ok(registry)
    }

    /// Register an account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the number is already registered; the
    /// existing account is kept.
    pub fn insert(&mut self, account: Account) -> Result<(), BankError> {
        let number = account.number();
        if self.accounts.contains_key(&number) {
            return Err(BankError::duplicate_account(number));
        }

        self.accounts.insert(number, Arc::new(Mutex::new(account)));
        debug!(number, "registered account");
        Ok(())
    }

    /// Find the account registered under `number`
    ///
    /// Never creates an account.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has that number.
    pub fn lookup(&self, number: AccountNumber) -> Result<AccountHandle, BankError> {
        self.accounts
            .get(&number)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| BankError::account_not_found(number))
    }

    /// Snapshot the account registered under `number`
    pub fn statement(&self, number: AccountNumber) -> Result<Statement, BankError> {
        let handle = self.lookup(number)?;
        let account = handle.lock();
        Ok(account.statement())
    }

    /// Deposit into an account and return its updated statement
    pub fn deposit(&self, number: AccountNumber, amount: Decimal) -> Result<Statement, BankError> {
        let handle = self.lookup(number)?;
        let mut account = handle.lock();
        account.deposit(amount)?;
        debug!(number, %amount, balance = %account.balance(), "deposit applied");
        Ok(account.statement())
    }

    /// Withdraw from an account and return its updated statement
    pub fn withdraw(&self, number: AccountNumber, amount: Decimal) -> Result<Statement, BankError> {
        let handle = self.lookup(number)?;
        let mut account = handle.lock();
        account.withdraw(amount)?;
        debug!(number, %amount, balance = %account.balance(), "withdrawal applied");
        Ok(account.statement())
    }

    /// Transfer between two accounts and return the source's statement
    ///
    /// The source is looked up before the destination, so an unknown source
    /// is reported even when the destination is unknown too. Transferring an
    /// account to itself is validated like any other transfer and leaves the
    /// balance unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either account is unknown or if
    /// [`Account::transfer`] rejects the amount. Neither balance changes on
    /// error.
    pub fn transfer(
        &self,
        number: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<Statement, BankError> {
        let source_handle = self.lookup(number)?;
        let destination_handle = self.lookup(destination)?;

        if number == destination {
            let account = source_handle.lock();
            account.check_transfer(amount)?;
            debug!(number, %amount, "self transfer accepted");
            return Ok(account.statement());
        }

        let (mut source, mut target) = if number < destination {
            let source = source_handle.lock();
            let target = destination_handle.lock();
            (source, target)
        } else {
            let target = destination_handle.lock();
            let source = source_handle.lock();
            (source, target)
        };

        source.transfer(amount, &mut target)?;
        debug!(
            number,
            destination,
            %amount,
            source_balance = %source.balance(),
            destination_balance = %target.balance(),
            "transfer applied"
        );
        Ok(source.statement())
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All registered account numbers in ascending order
    pub fn numbers(&self) -> Vec<AccountNumber> {
        let mut numbers: Vec<AccountNumber> =
            self.accounts.iter().map(|entry| *entry.key()).collect();
        numbers.sort_unstable();
        numbers
    }

    /// Statements for every account, sorted by account number
    ///
    /// Each statement is taken under its own lock; the set as a whole is not
    /// a single consistent snapshot while transfers are running.
    pub fn statements(&self) -> Vec<Statement> {
        let mut handles: Vec<(AccountNumber, AccountHandle)> = self
            .accounts
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect();
        handles.sort_unstable_by_key(|(number, _)| *number);

        handles
            .into_iter()
            .map(|(_, handle)| handle.lock().statement())
            .collect()
    }
}
