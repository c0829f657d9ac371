//! High-level Gantry API client with typed HTTP methods.
//!
//! This module provides `GantryClient`, which combines the session's bearer
//! token with an HTTP client and provides typed JSON methods for API
//! interactions.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Sensitive request bodies are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::RequestBuilder;

/// High-level Gantry API client.
///
/// This client combines a bearer token with HTTP infrastructure and provides
/// typed methods for making API requests. It's designed to be used by
/// higher-level API-surface crates (profile-rest, profile-settings).
///
/// ## Security
///
/// The access token is redacted in Debug output to prevent accidental
/// exposure in logs.
///
/// # Example
///
/// ```rust,ignore
/// use gantry_profile_client::GantryClient;
///
/// let client = GantryClient::new("https://api.gantry.example", "session-token")?;
///
/// // GET with typed response
/// let user: CurrentUser = client.get_json("/v1/users/me").await?;
///
/// // POST with body, ignoring the response body
/// client.post_unit("/v1/auth/update-password", &request).await?;
/// ```
#[derive(Clone)]
pub struct GantryClient {
    http: HttpClient,
    base_url: String,
    access_token: String,
}

impl std::fmt::Debug for GantryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GantryClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GantryClient {
    /// Create a new Gantry client with the given base URL and access token.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, access_token, ClientConfig::default())
    }

    /// Create a new Gantry client with custom configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;

        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the base URL.
    /// Otherwise, it's assumed to be a full URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.access_token)
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<crate::Response> {
        self.http.execute(request).await
    }

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let full_url = self.url(url);
        let request = self.get(&full_url);
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let full_url = self.url(url);
        let request = self.post(&full_url).json(body)?;
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// POST request with JSON body, ignoring the response body.
    ///
    /// For endpoints whose success response carries no body contract the
    /// caller uses.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_unit<B: Serialize>(&self, url: &str, body: &B) -> Result<()> {
        let full_url = self.url(url);
        let request = self.post(&full_url).json(body)?;
        self.http.execute(request).await?;
        Ok(())
    }
}
