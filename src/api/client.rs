//! Client for the wallet service REST endpoints.

use crate::error::Result;
use crate::transport::ApiTransport;

use super::types::*;

/// Wallet service API client.
///
/// Each method maps one-to-one to a single REST endpoint: it renders the
/// path (and, for listing endpoints, the query string), hands the call to
/// the injected [`ApiTransport`], and returns the transport's result
/// unchanged. No retries, validation, or response transformation happen
/// here.
#[derive(Debug, Clone)]
pub struct WalletApiClient<A> {
    transport: A,
}

/// Render `base?query` for a listing endpoint.
///
/// Absent pagination fields are omitted from the query entirely; the `?`
/// separator is always present, matching the service's wire convention.
fn paged_path(base: &str, page: &PagingOptions) -> Result<String> {
    let query = serde_urlencoded::to_string(page)?;
    Ok(format!("{base}?{query}"))
}

impl<A: ApiTransport> WalletApiClient<A> {
    /// Create a new client on top of the given transport.
    pub fn new(transport: A) -> Self {
        Self { transport }
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &A {
        &self.transport
    }

    /// Create a new wallet.
    pub async fn create_wallet(&self) -> Result<Wallet> {
        self.transport
            .issue_post_request("/v1/wallets", &serde_json::json!({}))
            .await
    }

    /// Get a wallet by id.
    pub async fn get_wallet(&self, wallet_id: &str) -> Result<Wallet> {
        self.transport
            .issue_get_request(&format!("/v1/wallets/{wallet_id}"))
            .await
    }

    /// Enable or disable a wallet.
    ///
    /// The service response body is returned verbatim.
    pub async fn enable_wallet(
        &self,
        wallet_id: &str,
        enabled: bool,
    ) -> Result<serde_json::Value> {
        self.transport
            .issue_put_request(
                &format!("/v1/wallets/{wallet_id}/enable"),
                &EnableWallet { enabled },
            )
            .await
    }

    /// Invoke an RPC payload on one of the wallet's devices.
    ///
    /// The success/error split lives in the returned [`RpcResponse`], not
    /// in the HTTP status; neither variant is an error from this client's
    /// point of view.
    pub async fn invoke_wallet_rpc(
        &self,
        wallet_id: &str,
        device_id: &str,
        payload: impl Into<String>,
    ) -> Result<RpcResponse> {
        self.transport
            .issue_post_request(
                &format!("/v1/wallets/{wallet_id}/devices/{device_id}/invoke"),
                &RpcRequest {
                    payload: payload.into(),
                },
            )
            .await
    }

    /// Create a new account within a wallet.
    pub async fn create_wallet_account(&self, wallet_id: &str) -> Result<WalletAccount> {
        self.transport
            .issue_post_request(
                &format!("/v1/wallets/{wallet_id}/accounts"),
                &serde_json::json!({}),
            )
            .await
    }

    /// List wallets.
    pub async fn get_wallets(&self, page: &PagingOptions) -> Result<PagedResponse<Wallet>> {
        self.transport
            .issue_get_request(&paged_path("/v1/wallets", page)?)
            .await
    }

    /// List accounts of a wallet.
    pub async fn get_wallet_accounts(
        &self,
        wallet_id: &str,
        page: &PagingOptions,
    ) -> Result<PagedResponse<WalletAccount>> {
        self.transport
            .issue_get_request(&paged_path(
                &format!("/v1/wallets/{wallet_id}/accounts"),
                page,
            )?)
            .await
    }

    /// Get a single wallet account.
    pub async fn get_wallet_account(
        &self,
        wallet_id: &str,
        account_id: u32,
    ) -> Result<WalletAccount> {
        self.transport
            .issue_get_request(&format!("/v1/wallets/{wallet_id}/accounts/{account_id}"))
            .await
    }

    /// List assets of a wallet account.
    pub async fn get_wallet_assets(
        &self,
        wallet_id: &str,
        account_id: u32,
        page: &PagingOptions,
    ) -> Result<PagedResponse<WalletAsset>> {
        self.transport
            .issue_get_request(&paged_path(
                &format!("/v1/wallets/{wallet_id}/accounts/{account_id}/assets"),
                page,
            )?)
            .await
    }

    /// Get a single wallet asset.
    pub async fn get_wallet_asset(
        &self,
        wallet_id: &str,
        account_id: u32,
        asset_id: &str,
    ) -> Result<WalletAsset> {
        self.transport
            .issue_get_request(&format!(
                "/v1/wallets/{wallet_id}/accounts/{account_id}/assets/{asset_id}"
            ))
            .await
    }

    /// Activate an asset in a wallet account.
    ///
    /// Returns the deposit address created for the asset.
    pub async fn activate_wallet_asset(
        &self,
        wallet_id: &str,
        account_id: u32,
        asset_id: &str,
    ) -> Result<AssetAddress> {
        self.transport
            .issue_post_request(
                &format!("/v1/wallets/{wallet_id}/accounts/{account_id}/assets/{asset_id}"),
                &serde_json::json!({}),
            )
            .await
    }

    /// List deposit addresses of a wallet asset.
    pub async fn get_wallet_asset_addresses(
        &self,
        wallet_id: &str,
        account_id: u32,
        asset_id: &str,
        page: &PagingOptions,
    ) -> Result<PagedResponse<AssetAddress>> {
        self.transport
            .issue_get_request(&paged_path(
                &format!(
                    "/v1/wallets/{wallet_id}/accounts/{account_id}/assets/{asset_id}/addresses"
                ),
                page,
            )?)
            .await
    }

    /// Get the balance of a wallet asset.
    pub async fn get_wallet_asset_balance(
        &self,
        wallet_id: &str,
        account_id: u32,
        asset_id: &str,
    ) -> Result<AssetBalance> {
        self.transport
            .issue_get_request(&format!(
                "/v1/wallets/{wallet_id}/accounts/{account_id}/assets/{asset_id}/balance"
            ))
            .await
    }

    /// Ask the service to refresh the balance of a wallet asset.
    pub async fn refresh_wallet_asset_balance(
        &self,
        wallet_id: &str,
        account_id: u32,
        asset_id: &str,
    ) -> Result<AssetBalance> {
        self.transport
            .issue_put_request(
                &format!("/v1/wallets/{wallet_id}/accounts/{account_id}/assets/{asset_id}/balance"),
                &serde_json::json!({}),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pagination_yields_empty_query() {
        let path = paged_path("/v1/wallets", &PagingOptions::default()).unwrap();
        assert_eq!(path, "/v1/wallets?");
    }

    #[test]
    fn page_size_only() {
        let page = PagingOptions {
            page_size: Some(25),
            ..Default::default()
        };
        let path = paged_path("/v1/wallets", &page).unwrap();
        assert_eq!(path, "/v1/wallets?pageSize=25");
    }

    #[test]
    fn all_fields_serialize_in_declaration_order() {
        let page = PagingOptions {
            page_cursor: Some("abc".to_string()),
            page_size: Some(50),
            sort: Some("walletId".to_string()),
            order: Some("DESC".to_string()),
        };
        let path = paged_path("/v1/wallets/w1/accounts", &page).unwrap();
        assert_eq!(
            path,
            "/v1/wallets/w1/accounts?pageCursor=abc&pageSize=50&sort=walletId&order=DESC"
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let page = PagingOptions {
            page_cursor: Some("a b&c=d".to_string()),
            ..Default::default()
        };
        let path = paged_path("/v1/wallets", &page).unwrap();
        assert_eq!(path, "/v1/wallets?pageCursor=a+b%26c%3Dd");
    }

    #[test]
    fn cursor_only_omits_other_fields() {
        let page = PagingOptions {
            page_cursor: Some("next-page".to_string()),
            ..Default::default()
        };
        let path = paged_path("/v1/wallets", &page).unwrap();
        assert_eq!(path, "/v1/wallets?pageCursor=next-page");
        assert!(!path.contains("pageSize"));
        assert!(!path.contains("sort"));
        assert!(!path.contains("order"));
    }
}
