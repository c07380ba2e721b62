//! Generic API client.
//!
//! [`ApiClient`] binds a base URL, an optional token and a transport. Each
//! call runs validate, build, send, interpret in order; nothing is retried
//! and no state is kept between calls. Resource-specific operation sets
//! such as [`BlogServiceProxy`](crate::BlogServiceProxy) are thin typed
//! wrappers over [`ApiClient::call`].

use std::env;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{ProxyError, Result};
use crate::request::{build_request, Args};
use crate::response::interpret;
use crate::transport::{ReqwestTransport, Transport};

/// Environment variable holding the service base URL.
pub const URL_ENV: &str = "BLOG_API_URL";
/// Environment variable holding the optional bearer token.
pub const TOKEN_ENV: &str = "BLOG_API_TOKEN";

/// Client bound to one target environment.
///
/// Configuration is immutable. Cloning is cheap and clones share the
/// transport. To rotate the token, build a new client with
/// [`with_token`](Self::with_token); in-flight calls keep the old one.
///
/// # Example
///
/// ```no_run
/// use blogproxy::ApiClient;
///
/// # fn example() -> blogproxy::Result<()> {
/// // Create from environment variables
/// let client = ApiClient::from_env()?;
///
/// // Or configure manually
/// let client = ApiClient::new("https://tutors.example.com/api", Some("token"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    token: Option<Arc<str>>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &&*self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client from environment variables.
    ///
    /// Uses `BLOG_API_URL` for the base URL and optionally `BLOG_API_TOKEN`
    /// for authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if `BLOG_API_URL` is not set or is not a valid URL.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(URL_ENV).map_err(|_| {
            ProxyError::ConfigMissing(format!("{URL_ENV} environment variable not set"))
        })?;
        let token = env::var(TOKEN_ENV).ok();

        Self::new(&base_url, token.as_deref())
    }

    /// Create a client using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Self::with_transport(base_url, token, Arc::new(transport))
    }

    /// Create a client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_transport(
        base_url: &str,
        token: Option<&str>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Url::parse(base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').into(),
            token: token.filter(|t| !t.is_empty()).map(Into::into),
            transport,
        })
    }

    /// A new client with the same base URL and transport but another token.
    #[must_use]
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: token.filter(|t| !t.is_empty()).map(Into::into),
            transport: self.transport.clone(),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Call `endpoint` and decode its result as `T`.
    ///
    /// Returns `Ok(None)` for empty results (204, empty body, or an endpoint
    /// without a response payload).
    ///
    /// # Errors
    ///
    /// Validation errors are returned before the transport is touched.
    /// Non-success statuses become [`ProxyError::Remote`].
    #[tracing::instrument(skip(self, endpoint, args, body), fields(operation = endpoint.name))]
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        args: &Args,
        body: Option<&serde_json::Value>,
    ) -> Result<Option<T>> {
        let request = build_request(
            endpoint,
            &self.base_url,
            self.token.as_deref(),
            args,
            body,
        )?;

        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "interpreting response");

        interpret(response, endpoint.response)
    }
}
