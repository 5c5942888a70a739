//! Securities service: lookup and symbol search.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Security, SecurityId};
use crate::Result;

/// Service for security lookups.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: wstrade_rs::WsTradeClient) -> wstrade_rs::Result<()> {
/// if let Some(id) = client.securities().id_for_symbol("AAPL").await? {
///     let security = client.securities().get(&id).await?;
///     println!("{}: {:?}", id, security.quoted_amount());
/// }
/// # Ok(())
/// # }
/// ```
pub struct SecuritiesService {
    inner: Arc<ClientInner>,
}

impl SecuritiesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a security by id, including its current quote.
    pub async fn get(&self, id: &SecurityId) -> Result<Security> {
        self.inner.get(&format!("securities/{}", id)).await
    }

    /// Search securities by ticker symbol.
    ///
    /// The match is server-side and may return multiple listings for the
    /// same ticker on different exchanges.
    pub async fn search(&self, symbol: &str) -> Result<Vec<Security>> {
        let response: SearchResponse = self
            .inner
            .get(&format!("securities?query={}", urlencoding::encode(symbol)))
            .await?;
        Ok(response.results)
    }

    /// Resolve a ticker symbol to a security id.
    ///
    /// Returns `Some` only when the search yields exactly one match.
    /// Zero matches and ambiguous matches both yield `None`; callers that
    /// need to tell them apart should use [`search`](Self::search) and
    /// inspect the results.
    pub async fn id_for_symbol(&self, symbol: &str) -> Result<Option<SecurityId>> {
        let response: SearchResponse = self
            .inner
            .get(&format!("securities?query={}", urlencoding::encode(symbol)))
            .await?;

        let total = response
            .total_count
            .unwrap_or(response.results.len() as u64);
        if total == 1 {
            Ok(response.results.into_iter().next().map(|s| s.id))
        } else {
            Ok(None)
        }
    }
}

#[derive(serde::Deserialize)]
struct SearchResponse {
    results: Vec<Security>,
    #[serde(default)]
    total_count: Option<u64>,
}
