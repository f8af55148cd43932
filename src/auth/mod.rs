//! Token providers for the CrowdTangle API.
//!
//! Every request carries the dashboard's API token in the `x-api-token`
//! header. The client asks its [`TokenProvider`] for the token once per
//! logical request, so any source that can hand out a token on demand
//! (a fixed string, a secret store, a rotating credential) can back it.
//!
//! ```
//! use crowdtangle_rs::auth::{InMemoryTokenProvider, TokenProvider};
//! use secrecy::ExposeSecret;
//!
//! let provider = InMemoryTokenProvider::new("dashboard-token");
//! assert_eq!(provider.token().expose_secret(), "dashboard-token");
//! ```

mod token;

pub use token::{InMemoryTokenProvider, TokenProvider};

/// Header carrying the API token. The value is the raw token, without a scheme.
pub const TOKEN_HEADER: &str = "x-api-token";
