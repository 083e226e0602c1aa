//! Wallet API Client
//!
//! Thin, typed client for a remote wallet-management REST API. Each public
//! method maps one-to-one to a single endpoint: the client renders paths,
//! query strings, and request bodies, and delegates the actual exchange to
//! an injected [`ApiTransport`]. Transport concerns (networking,
//! authentication, retries) live behind that trait; a reqwest-backed
//! [`HttpTransport`] is provided for native and browser targets.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet_api_client::{HttpTransport, PagingOptions, WalletApiClient};
//!
//! let transport = HttpTransport::new("https://api.example.com").with_bearer_token(token);
//! let client = WalletApiClient::new(transport);
//!
//! let wallet = client.create_wallet().await?;
//! let account = client.create_wallet_account(&wallet.wallet_id).await?;
//!
//! // Listing endpoints take cursor-based pagination; absent fields are
//! // omitted from the query string entirely.
//! let page = PagingOptions { page_size: Some(25), ..Default::default() };
//! let wallets = client.get_wallets(&page).await?;
//! ```

pub mod api;
pub mod error;
pub mod transport;

pub use api::{
    AssetAddress, AssetBalance, EnableWallet, PagedResponse, Paging, PagingOptions, RpcError,
    RpcRequest, RpcResponse, Wallet, WalletAccount, WalletApiClient, WalletAsset,
};
pub use error::{Error, Result};
pub use transport::{ApiTransport, HttpTransport, TransportFuture};
