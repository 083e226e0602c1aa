//! Transport abstraction for issuing wallet API requests.
//!
//! The wallet client never talks to the network itself. It describes each
//! call (verb, path, body) and hands it to an [`ApiTransport`], which owns
//! connection handling, authentication, and response decoding. A
//! reqwest-backed [`HttpTransport`] is provided as the default
//! implementation; consumers with their own HTTP stack (or tests) can
//! implement the trait themselves.

use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;

/// Type alias for transport futures.
///
/// On WASM targets, futures don't need to be `Send` since JavaScript is
/// single-threaded. On native targets, futures should be `Send` to allow
/// use with multi-threaded runtimes.
#[cfg(target_arch = "wasm32")]
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a>>;

#[cfg(not(target_arch = "wasm32"))]
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Asynchronous HTTP transport used by the wallet client.
///
/// Each method performs one request/response exchange and decodes the JSON
/// response body into `T`. Implementations own all transport-level
/// concerns: base URL, authentication, timeouts, and error reporting.
/// Failures surface as [`Error`] values and are propagated to callers of
/// the wallet client unchanged.
#[cfg(target_arch = "wasm32")]
pub trait ApiTransport {
    /// Issue a GET request against `path` (relative to the service root).
    fn issue_get_request<T>(&self, path: &str) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned;

    /// Issue a POST request with a JSON `body`.
    fn issue_post_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized;

    /// Issue a PUT request with a JSON `body`.
    fn issue_put_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait ApiTransport: Send + Sync {
    /// Issue a GET request against `path` (relative to the service root).
    fn issue_get_request<T>(&self, path: &str) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned + Send;

    /// Issue a POST request with a JSON `body`.
    fn issue_post_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + ?Sized;

    /// Issue a PUT request with a JSON `body`.
    fn issue_put_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + ?Sized;
}

/// Default reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the wallet service (e.g., "https://api.example.com")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to send request to {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error: ApiErrorBody = response.json().await.unwrap_or_else(|_| ApiErrorBody {
                message: status.to_string(),
            });
            return Err(Error::Network(format!("API error: {}", error.message)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response: {}", e)))?;

        log::debug!("{} response: {}", url, text);

        serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Failed to parse response: {}. Body: {}", e, text)))
    }
}

#[cfg(target_arch = "wasm32")]
impl ApiTransport for HttpTransport {
    fn issue_get_request<T>(&self, path: &str) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.request(reqwest::Method::GET, path);
        Box::pin(async move { Self::execute(url, request).await })
    }

    fn issue_post_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.request(reqwest::Method::POST, path).json(body);
        Box::pin(async move { Self::execute(url, request).await })
    }

    fn issue_put_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.request(reqwest::Method::PUT, path).json(body);
        Box::pin(async move { Self::execute(url, request).await })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiTransport for HttpTransport {
    fn issue_get_request<T>(&self, path: &str) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned + Send,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.request(reqwest::Method::GET, path);
        Box::pin(async move { Self::execute(url, request).await })
    }

    fn issue_post_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.request(reqwest::Method::POST, path).json(body);
        Box::pin(async move { Self::execute(url, request).await })
    }

    fn issue_put_request<T, B>(&self, path: &str, body: &B) -> TransportFuture<'_, T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.request(reqwest::Method::PUT, path).json(body);
        Box::pin(async move { Self::execute(url, request).await })
    }
}

/// Error envelope the wallet service returns on non-2xx responses.
#[derive(Debug, Clone, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::new("https://api.example.com/");
        assert_eq!(transport.base_url(), "https://api.example.com");
    }
}
