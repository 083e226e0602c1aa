//! Wallet API client and types.
//!
//! This module provides the endpoint mappings and the data-transfer types
//! for the wallet service REST API.

mod client;
mod types;

pub use client::WalletApiClient;
pub use types::*;
