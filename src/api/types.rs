//! API types for the wallet service.
//!
//! These types match the service API schema and are used for request/response
//! serialization. Wire names are camelCase.

use serde::{Deserialize, Serialize};

/// A top-level wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub wallet_id: String,
    pub enabled: bool,
}

/// A sub-ledger within a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub wallet_id: String,
    pub account_id: u32,
}

/// An asset tracked within a wallet account.
///
/// Beyond the asset id, the attribute set is the remote service's contract
/// and is carried through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletAsset {
    pub id: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// A deposit address belonging to a wallet asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetAddress {
    pub address: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Balance snapshot for a wallet asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBalance {
    pub id: String,
    pub total: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// One page of a listing endpoint's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// Cursor metadata returned alongside a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging {
    /// Cursor for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Pagination parameters accepted by every listing endpoint.
///
/// All fields are optional; absent fields are omitted from the query
/// string entirely rather than sent as empty values. `Default` gives the
/// all-absent value, equivalent to passing no pagination at all.
///
/// Fields serialize in declaration order: `pageCursor`, `pageSize`,
/// `sort`, `order`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingOptions {
    /// Opaque cursor from a previous response's [`Paging::next`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction, "ASC" or "DESC".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Body of the wallet enable/disable endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnableWallet {
    pub enabled: bool,
}

/// Body of the device RPC invocation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub payload: String,
}

/// Outcome of a device RPC invocation.
///
/// The success/failure split is carried in the response body, not the HTTP
/// status: a 2xx response holds either variant, and the client returns it
/// as received without branching on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcResponse {
    Success { result: String },
    Error { error: RpcError },
}

/// Error payload of a failed RPC invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}

impl RpcResponse {
    /// Whether this is the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, RpcResponse::Success { .. })
    }
}
