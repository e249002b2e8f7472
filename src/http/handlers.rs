//! Route handlers
//!
//! Each handler parses its query parameters in the order the messages are
//! expected (number, amount, destination), then delegates to the registry.
//! Query pairs are extracted as a list so repeated keys never fail
//! extraction; the first value of each key wins.

use super::query::AccountQuery;
use super::AppState;
use crate::types::{BankError, Statement};
use axum::extract::{Query, State};
use axum::Json;
use tracing::{debug, warn};

type StatementResult = Result<Json<Statement>, BankError>;

/// GET /statement?number=<n>
pub async fn statement(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> StatementResult {
    let query = AccountQuery::from_pairs(pairs);
    respond("statement", || {
        let number = query.number()?;
        state.registry.statement(number)
    })
}

/// GET /deposit?number=<n>&amount=<x>
pub async fn deposit(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> StatementResult {
    let query = AccountQuery::from_pairs(pairs);
    respond("deposit", || {
        let number = query.number()?;
        let amount = query.amount()?;
        state.registry.deposit(number, amount)
    })
}

/// GET /withdraw?number=<n>&amount=<x>
pub async fn withdraw(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> StatementResult {
    let query = AccountQuery::from_pairs(pairs);
    respond("withdraw", || {
        let number = query.number()?;
        let amount = query.amount()?;
        state.registry.withdraw(number, amount)
    })
}

/// GET /transfer?number=<n>&amount=<x>&dest=<m>
pub async fn transfer(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> StatementResult {
    let query = AccountQuery::from_pairs(pairs);
    respond("transfer", || {
        let number = query.number()?;
        let amount = query.amount()?;
        let destination = query.destination()?;
        state.registry.transfer(number, destination, amount)
    })
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

fn respond<F>(route: &'static str, operation: F) -> StatementResult
where
    F: FnOnce() -> Result<Statement, BankError>,
{
    match operation() {
        Ok(statement) => {
            debug!(
                route,
                number = statement.number,
                balance = %statement.balance,
                "request served"
            );
            Ok(Json(statement))
        }
        Err(error) => {
            warn!(route, %error, "request rejected");
            Err(error)
        }
    }
}
