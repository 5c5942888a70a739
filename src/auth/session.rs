//! Session state: the bearer token store.

use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The authenticated-or-not state of a client.
///
/// A session starts empty and gains a bearer token on successful login.
/// There is no token refresh or expiry tracking: the service signals
/// expiry only as an unauthorized response to a later resource call, at
/// which point the caller re-authenticates.
///
/// # Thread safety
///
/// The token lives behind an `RwLock` so a shared client can keep reading
/// while a login writes. Requests read the stored token fresh on every
/// call, so a completed login is visible to all subsequent requests
/// immediately.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    access_token: Option<SecretString>,
}

impl Session {
    /// Create an unauthenticated session.
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner { access_token: None })),
        }
    }

    /// Whether a login has completed on this session.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.access_token.is_some()
    }

    /// The current bearer token, if any.
    pub(crate) async fn access_token(&self) -> Option<SecretString> {
        self.inner.read().await.access_token.clone()
    }

    /// Store the bearer token from a successful login.
    pub(crate) async fn set_access_token(&self, token: impl Into<String>) {
        self.inner.write().await.access_token = Some(SecretString::from(token.into()));
    }

    #[cfg(test)]
    pub(crate) async fn token_for_test(&self) -> Option<String> {
        use secrecy::ExposeSecret;
        self.access_token()
            .await
            .map(|t| t.expose_secret().to_string())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated().await);
        assert!(session.access_token().await.is_none());
    }

    #[tokio::test]
    async fn test_token_visible_after_login() {
        let session = Session::new();
        session.set_access_token("tok-123").await;
        assert!(session.is_authenticated().await);
        assert_eq!(session.token_for_test().await.as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn test_debug_redacts_token() {
        let session = Session::new();
        session.set_access_token("super-secret-token").await;

        let debug_str = format!("{:?}", session);
        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }
}
