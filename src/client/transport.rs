//! HTTP transport used by the client.
//!
//! The client only ever issues GET requests and needs nothing back but the
//! status and the body, so the transport contract is kept that small.
//! Connection pooling, TLS, redirects and timeouts belong to the
//! implementation.

use futures_util::future::BoxFuture;
use reqwest::header::HeaderMap;
use url::Url;

use super::config::ClientConfig;
use crate::error::TransportError;
use crate::Result;

/// A fully resolved GET request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Absolute endpoint URL
    pub url: Url,
    /// Request headers, including authentication
    pub headers: HeaderMap,
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs GET requests on behalf of the client.
///
/// Return `Err` only when no response was received. Non-2xx responses are
/// returned as `Ok` so the client can classify them.
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request.
    fn get<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, std::result::Result<HttpResponse, TransportError>>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport honouring the configured timeout and user agent.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, std::result::Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let response = self
                .http
                .get(request.url.clone())
                .headers(request.headers.clone())
                .query(&request.query)
                .send()
                .await?;

            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();

            Ok(HttpResponse { status, body })
        })
    }
}
