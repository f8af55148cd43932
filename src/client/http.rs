//! HTTP client implementation for the CrowdTangle API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

use crate::api::{ListsService, PostsService};
use crate::auth::{InMemoryTokenProvider, TokenProvider, TOKEN_HEADER};
use crate::models::QueryParams;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::transport::{HttpRequest, HttpTransport};

/// The main client for interacting with the CrowdTangle API.
///
/// The client owns the token provider and the transport, and hands out
/// per-resource services that share them. Cloning is cheap and every clone
/// sees the same token.
///
/// # Example
///
/// ```no_run
/// use crowdtangle_rs::{ClientConfig, CrowdtangleClient, QueryParams, ReqwestTransport};
///
/// # async fn example() -> crowdtangle_rs::Result<()> {
/// let config = ClientConfig::default();
/// let transport = ReqwestTransport::new(&config)?;
/// let client = CrowdtangleClient::with_token("dashboard-token", transport, config)?;
///
/// for list in client.lists().list().await? {
///     println!("{:?} ({:?})", list.title, list.list_type);
/// }
///
/// let posts = client
///     .posts()
///     .list(QueryParams::new().with("searchTerm", "rust"), 250)
///     .await?;
/// println!("fetched {} posts", posts.len());
/// # Ok(())
/// # }
/// ```
pub struct CrowdtangleClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    transport: Arc<dyn HttpTransport>,
    token_provider: RwLock<Arc<dyn TokenProvider>>,
    base_url: Url,
    pub(crate) config: ClientConfig,
}

impl CrowdtangleClient {
    /// Create a client from any token provider and transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlParse`] if the configured base URL is invalid.
    /// A base URL without a trailing slash is treated as if it had one.
    pub fn new(
        token_provider: impl TokenProvider + 'static,
        transport: impl HttpTransport + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport: Arc::new(transport),
                token_provider: RwLock::new(Arc::new(token_provider)),
                base_url,
                config,
            }),
        })
    }

    /// Create a client authenticating with a fixed token.
    pub fn with_token(
        token: impl Into<String>,
        transport: impl HttpTransport + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::new(InMemoryTokenProvider::new(token), transport, config)
    }

    /// Get the lists service.
    pub fn lists(&self) -> ListsService {
        ListsService::new(self.inner.clone())
    }

    /// Get the posts service.
    pub fn posts(&self) -> PostsService {
        PostsService::new(self.inner.clone())
    }

    /// Issue a raw GET against an endpoint path and return the decoded body.
    ///
    /// This is the same path every service method goes through, exposed for
    /// endpoints the services do not cover.
    pub async fn request(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        self.inner.request(endpoint, params).await
    }

    /// Get the token the next request will carry.
    pub async fn access_token(&self) -> SecretString {
        self.inner.token_provider.read().await.token()
    }

    /// Replace the token provider with one holding `token`.
    ///
    /// Requests already in flight keep the token they started with.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        self.set_token_provider(InMemoryTokenProvider::new(token)).await;
    }

    /// Install a different token provider.
    pub async fn set_token_provider(&self, token_provider: impl TokenProvider + 'static) {
        *self.inner.token_provider.write().await = Arc::new(token_provider);
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Resolve an endpoint path against the base URL.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Resolve an endpoint path with one opaque trailing segment.
    ///
    /// The segment is percent-encoded, so `/`, `?` and `#` inside it stay
    /// part of the path.
    pub(crate) fn resource_url(&self, endpoint: &str, segment: &str) -> Result<Url> {
        let mut url = self.endpoint_url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidInput(format!("cannot append to {}", self.base_url)))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Build request headers with authentication.
    pub(crate) async fn build_headers(&self) -> Result<HeaderMap> {
        let provider = self.token_provider.read().await.clone();
        let token = provider.token();

        let mut token_value = HeaderValue::from_str(token.expose_secret())
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Make a GET request and decode the JSON body.
    ///
    /// Statuses in the retry allowlist are retried with backoff up to the
    /// configured limit. Any other failure is classified and returned
    /// immediately.
    pub(crate) async fn request(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        self.request_url(self.endpoint_url(endpoint)?, params).await
    }

    /// Make a GET request against an already resolved URL.
    pub(crate) async fn request_url(&self, url: Url, params: &QueryParams) -> Result<Value> {
        let request = HttpRequest {
            url,
            headers: self.build_headers().await?,
            query: params.to_pairs(),
        };
        let endpoint = request.url.path();
        let retry = &self.config.retry;

        let mut attempt = 0;
        loop {
            tracing::debug!(endpoint, attempt, query = %params, "sending request");

            let response = self
                .transport
                .get(&request)
                .await
                .map_err(Error::Transport)?;

            if response.is_success() {
                return decode_body(&response.body);
            }

            if attempt < retry.max_retries && retry.should_retry_status(response.status) {
                let backoff = retry.backoff_for_attempt(attempt);
                tracing::warn!(
                    endpoint,
                    status = response.status,
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    "retrying request"
                );
                tokio::time::sleep(backoff).await;
                attempt += 1;
                continue;
            }

            return Err(Error::from_response(response.status, &response.body));
        }
    }
}

/// Parse the base URL, making sure its path ends with a slash so endpoint
/// paths resolve below it.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Decode a successful response body. An empty or `null` body is an empty object.
fn decode_body(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Ok(Value::Object(Map::new())),
        value => Ok(value),
    }
}

impl Clone for CrowdtangleClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for CrowdtangleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrowdtangleClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
