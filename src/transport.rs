//! Transport capability used to execute requests.
//!
//! The client never calls the network directly; it hands each
//! [`HttpRequest`] to a [`Transport`]. [`ReqwestTransport`] is the default.
//! Tests substitute their own implementation.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};

use crate::error::{ProxyError, Result};
use crate::http::{Headers, HttpMethod, HttpRequest, HttpResponse};

const USER_AGENT: &str = concat!("blogproxy/", env!("CARGO_PKG_VERSION"));

/// Executes an HTTP request and returns the fully read response.
///
/// Implementations must return `Ok` for every response the server sends,
/// whatever its status; status handling belongs to the response
/// interpreter.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest` client with a cookie store.
///
/// The cookie store keeps the service's session cookie across calls, so
/// requests marked `include_credentials` carry it. Cloning shares the
/// connection pool and the cookie jar.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport with the default client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(ProxyError::Transport)?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

/// Copy every header value, replacing bytes that are not UTF-8.
fn collect_headers(map: &HeaderMap) -> Headers {
    map.iter()
        .map(|(name, value)| {
            (
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip_all, fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.http.request(method(request.method), &request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(ProxyError::Transport)?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.text().await.map_err(ProxyError::Transport)?;

        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
