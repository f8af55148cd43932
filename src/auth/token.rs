//! Token provider trait and the in-memory implementation.

use secrecy::SecretString;

/// Supplies the API token attached to outgoing requests.
///
/// Implementations are called once per request and must be cheap. They are
/// shared across tasks, so they must also be safe to call concurrently.
pub trait TokenProvider: Send + Sync {
    /// Return the current token.
    fn token(&self) -> SecretString;
}

/// A provider holding a fixed token for its whole lifetime.
#[derive(Clone)]
pub struct InMemoryTokenProvider {
    token: SecretString,
}

impl InMemoryTokenProvider {
    /// Create a provider for the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl TokenProvider for InMemoryTokenProvider {
    fn token(&self) -> SecretString {
        self.token.clone()
    }
}

impl std::fmt::Debug for InMemoryTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTokenProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_returns_token_unchanged() {
        let provider = InMemoryTokenProvider::new("abc123");
        assert_eq!(provider.token().expose_secret(), "abc123");
        assert_eq!(provider.token().expose_secret(), "abc123");
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug_str = format!("{:?}", InMemoryTokenProvider::new("super-secret-token"));

        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }
}
