//! HTTP transport shared by the v1 and v2 clients.
//!
//! [`Transport`] owns an injected [`reqwest::Client`] (which internally pools
//! connections and carries the caller's timeout/proxy settings), the base URL
//! and the API key. Every request goes through [`Transport::execute`], which
//! is the single place where outcomes are classified:
//!
//! | Outcome | Error |
//! |---------|-------|
//! | no response (connect, timeout, reset) | [`ClientError::Transport`] |
//! | non-2xx status | [`ClientError::RemoteApi`] with the body verbatim |
//! | 2xx, body does not decode | [`ClientError::MalformedResponse`] |
//!
//! No retries happen here.

use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{ClientError, RemoteApiError};

/// Header carrying the API key credential.
pub const API_KEY_HEADER: &str = "api_key";

/// A configured connection to one API host.
#[derive(Clone)]
pub struct Transport {
    http: Client,
    base_url: String,
    api_key: String,
}

impl Transport {
    /// Create a transport.
    ///
    /// # Arguments
    ///
    /// * `http`: pre-configured `reqwest::Client` (e.g. with a timeout).
    /// * `base_url`: scheme and host, e.g. `https://api.neynar.com`.
    /// * `api_key`: sent with every request.
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}{path}`; `path` starts with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {path}?{query}`.
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path).query(query);
        self.execute(Method::GET, path, request).await
    }

    /// `POST {path}` with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path).json(body);
        self.execute(Method::POST, path, request).await
    }

    /// `PATCH {path}` with a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PATCH, path).json(body);
        self.execute(Method::PATCH, path, request).await
    }

    /// `DELETE {path}` with a JSON body (the v2 write endpoints take one).
    pub async fn delete<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::DELETE, path).json(body);
        self.execute(Method::DELETE, path, request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        debug!("transport: {method} {path}");

        let response = request.send().await.map_err(|e| {
            warn!("transport: {method} {path} failed before a response: {e}");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::Transport)?;

        if !status.is_success() {
            debug!("transport: {method} {path} returned {status}");
            return Err(RemoteApiError::new(status.as_u16(), body).into());
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("transport: {method} {path} returned an unexpected body: {e}");
            ClientError::MalformedResponse(format!("{method} {path}: {e}"))
        })
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
