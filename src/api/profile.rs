//! Profile service: the person and user resources.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Person, User};
use crate::Result;

/// Service for the authenticated user's profile records.
pub struct ProfileService {
    inner: Arc<ClientInner>,
}

impl ProfileService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the account holder's personal profile.
    pub async fn person(&self) -> Result<Person> {
        self.inner.get("person").await
    }

    /// Get the authenticated user record.
    pub async fn me(&self) -> Result<User> {
        self.inner.get("me").await
    }
}
