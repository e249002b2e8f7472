//! Query string parsing for the account routes
//!
//! The extractor hands over the raw key/value pairs and they are parsed here,
//! so a malformed or repeated value becomes a [`BankError`] with a readable
//! message instead of an extractor rejection.

use crate::types::{AccountNumber, BankError, QueryParameter};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw query parameters shared by all account routes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountQuery {
    pub number: Option<String>,
    pub amount: Option<String>,
    pub dest: Option<String>,
}

impl AccountQuery {
    /// Collect the account parameters from decoded query pairs
    ///
    /// When a key is repeated the first value is used; unknown keys are
    /// ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = AccountQuery::default();
        for (key, value) in pairs {
            let slot = if key == QueryParameter::Number.key() {
                &mut query.number
            } else if key == QueryParameter::Amount.key() {
                &mut query.amount
            } else if key == QueryParameter::Destination.key() {
                &mut query.dest
            } else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// The account the request applies to
    ///
    /// # Errors
    ///
    /// - `MissingParameter` when `number` is absent or empty
    /// - `InvalidNumberFormat` when it is not a non-negative integer
    pub fn number(&self) -> Result<AccountNumber, BankError> {
        match self.number.as_deref() {
            None | Some("") => Err(BankError::missing_parameter(QueryParameter::Number)),
            Some(raw) => parse_account_number(raw, QueryParameter::Number),
        }
    }

    /// The amount to move
    ///
    /// An absent amount is reported as malformed rather than missing. Plain
    /// decimals (`12.50`) and scientific notation (`1e3`) are accepted.
    pub fn amount(&self) -> Result<Decimal, BankError> {
        let raw = self.amount.as_deref().unwrap_or_default();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| BankError::invalid_number_format(QueryParameter::Amount))
    }

    /// The transfer destination account
    pub fn destination(&self) -> Result<AccountNumber, BankError> {
        parse_account_number(
            self.dest.as_deref().unwrap_or_default(),
            QueryParameter::Destination,
        )
    }
}

fn parse_account_number(
    raw: &str,
    parameter: QueryParameter,
) -> Result<AccountNumber, BankError> {
    raw.parse::<AccountNumber>()
        .map_err(|_| BankError::invalid_number_format(parameter))
}
