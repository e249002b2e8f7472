//! Core business logic module
//!
//! This module contains the account bookkeeping components:
//! - `registry` - Synchronized account lookup and balance operations
//! - `seed` - The fixed set of accounts loaded at startup

pub mod registry;
pub mod seed;

pub use registry::{AccountHandle, Registry};
pub use seed::{default_accounts, default_registry};
