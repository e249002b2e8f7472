//! Bank API server
//!
//! Serves the account routes over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --host 0.0.0.0 --port 8080
//! RUST_LOG=debug cargo run
//! ```
//!
//! ```bash
//! curl 'http://localhost:8000/statement?number=1001'
//! curl 'http://localhost:8000/deposit?number=1001&amount=100'
//! curl 'http://localhost:8000/withdraw?number=1001&amount=30'
//! curl 'http://localhost:8000/transfer?number=1001&amount=50&dest=1002'
//! ```
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown (Ctrl+C)
//! - 1: Startup error (address cannot be bound, invalid seed data)

use anyhow::Context;
use bank_api::{cli, core, http, telemetry};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();
    telemetry::init(&args.log_level);

    let registry = Arc::new(core::default_registry().context("failed to seed accounts")?);

    let address = args.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(
        address = %listener.local_addr()?,
        accounts = registry.len(),
        "bank api listening"
    );

    http::serve(listener, registry).await
}
