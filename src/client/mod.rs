//! HTTP client and request pipeline for the CrowdTangle API.
//!
//! [`CrowdtangleClient`] is the entry point. It resolves endpoint paths
//! against the configured origin, attaches the API token, sends the request
//! through an [`HttpTransport`], applies the retry policy and classifies
//! failures into [`Error`](crate::Error).
//!
//! # Example
//!
//! ```no_run
//! use crowdtangle_rs::{ClientConfig, CrowdtangleClient, ReqwestTransport};
//!
//! # async fn example() -> crowdtangle_rs::Result<()> {
//! let config = ClientConfig::default();
//! let client = CrowdtangleClient::with_token(
//!     "dashboard-token",
//!     ReqwestTransport::new(&config)?,
//!     config,
//! )?;
//!
//! let lists = client.lists().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod transport;

pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use http::CrowdtangleClient;
pub use paginated::{effective_page_size, PaginatedStream, DEFAULT_MAX_RECORDS, MAX_PAGE_SIZE};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub(crate) use http::ClientInner;
