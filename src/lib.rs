//! # crowdtangle-rs
//!
//! An async Rust client for the CrowdTangle API: dashboard lists, the
//! accounts in them, and post search.
//!
//! ## Features
//!
//! - **Authentication**: API token sent on every request through a pluggable
//!   [`TokenProvider`](auth::TokenProvider)
//! - **Pagination**: Paged endpoints are followed automatically up to a
//!   record limit, or streamed lazily
//! - **Typed errors**: Structured 400/409 API errors are separated from
//!   transport failures and other statuses
//! - **Bounded retries**: Rate limiting and server errors are retried with
//!   exponential backoff
//! - **Pluggable transport**: `reqwest` by default, any
//!   [`HttpTransport`](client::HttpTransport) for tests or proxies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crowdtangle_rs::{ClientConfig, CrowdtangleClient, PostId, QueryParams, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> crowdtangle_rs::Result<()> {
//!     let config = ClientConfig::default();
//!     let transport = ReqwestTransport::new(&config)?;
//!     let client = CrowdtangleClient::with_token("dashboard-token", transport, config)?;
//!
//!     // Lists on the dashboard
//!     let lists = client.lists().list().await?;
//!     println!("Found {} lists", lists.len());
//!
//!     // Up to 500 posts mentioning "rust"
//!     let posts = client
//!         .posts()
//!         .list(QueryParams::new().with("searchTerm", "rust"), 500)
//!         .await?;
//!     println!("Found {} posts", posts.len());
//!
//!     // A single post
//!     if let Some(post) = client.posts().get(&PostId::new("123_456")).await? {
//!         println!("{:?}", post.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling API errors
//!
//! ```rust,no_run
//! use crowdtangle_rs::{CrowdtangleClient, Error, QueryParams};
//!
//! # async fn example(client: CrowdtangleClient) {
//! match client.posts().list(QueryParams::new().with("sortBy", "bogus"), 100).await {
//!     Ok(posts) => println!("{} posts", posts.len()),
//!     Err(Error::BadRequest { code, message, .. }) => {
//!         eprintln!("rejected ({:?}): {}", code, message);
//!     }
//!     Err(other) => eprintln!("request failed: {}", other),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{ListId, PostId, QueryParams};
pub use client::{
    ClientConfig, CrowdtangleClient, HttpTransport, ReqwestTransport, RetryConfig,
    DEFAULT_MAX_RECORDS, MAX_PAGE_SIZE,
};
pub use auth::{InMemoryTokenProvider, TokenProvider};

/// Prelude module for convenient imports.
///
/// ```rust
/// use crowdtangle_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Identifiers and parameters
        ListId, PostId, QueryParams,
        // Enums
        ListType, Platform, AccountType, SortBy, SearchField,
        // Records
        List, Account, Post,
    };
    pub use crate::api::{AccountsQuery, ListsService, PostsQuery, PostsService};
    pub use crate::auth::{InMemoryTokenProvider, TokenProvider};
    pub use crate::client::{
        ClientConfig, CrowdtangleClient, HttpTransport, PaginatedStream, ReqwestTransport,
        RetryConfig, DEFAULT_MAX_RECORDS, MAX_PAGE_SIZE,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_is_opaque() {
        let post = PostId::new("1234567890_987654321");
        assert_eq!(post.as_str(), "1234567890_987654321");
        assert_eq!(post.to_string(), "1234567890_987654321");
    }

    #[test]
    fn test_default_origin() {
        assert_eq!(ClientConfig::default().base_url, "https://api.crowdtangle.com/");
    }

    #[test]
    fn test_page_limits() {
        assert_eq!(MAX_PAGE_SIZE, 100);
        assert_eq!(DEFAULT_MAX_RECORDS, 1000);
    }
}
