//! Accounts service: account listing, lookup, history, positions, and
//! activities.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{Account, AccountHistory, AccountId, Activity, HistoryPeriod, Position};
use crate::{Error, Result};

/// Service for account-scoped operations.
///
/// # Example
///
/// ```no_run
/// use wstrade_rs::models::HistoryPeriod;
///
/// # async fn example(client: wstrade_rs::WsTradeClient) -> wstrade_rs::Result<()> {
/// let accounts = client.accounts().list().await?;
/// for account in &accounts {
///     let history = client
///         .accounts()
///         .history(&account.id, HistoryPeriod::Month)
///         .await?;
///     println!("{}: {} snapshots", account.id, history.results.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all Trade accounts for the authenticated user.
    pub async fn list(&self) -> Result<Vec<Account>> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<Account>,
        }
        let response: Response = self.inner.get("account/list").await?;
        Ok(response.results)
    }

    /// List just the account ids.
    pub async fn ids(&self) -> Result<Vec<AccountId>> {
        Ok(self.list().await?.into_iter().map(|a| a.id).collect())
    }

    /// Get a single account by id.
    ///
    /// The service has no per-account endpoint, so this fetches the full
    /// list and scans for the first exact match. Fails with
    /// [`Error::AccountNotFound`] when no account carries the id.
    pub async fn get(&self, id: &AccountId) -> Result<Account> {
        self.list()
            .await?
            .into_iter()
            .find(|account| &account.id == id)
            .ok_or_else(|| Error::AccountNotFound(id.to_string()))
    }

    /// Get the value history of an account over a period.
    ///
    /// The service reports an unknown account id inside a `200` body
    /// rather than via the status code; that shape is mapped to
    /// [`Error::AccountNotFound`] instead of being returned as data.
    pub async fn history(&self, id: &AccountId, period: HistoryPeriod) -> Result<AccountHistory> {
        let path = format!(
            "account/history/{}?account_id={}",
            period,
            urlencoding::encode(id.as_str())
        );
        let body: Value = self.inner.get(&path).await?;

        if body.get("error").and_then(Value::as_str) == Some("Record not found") {
            return Err(Error::AccountNotFound(id.to_string()));
        }

        Ok(serde_json::from_value(body)?)
    }

    /// List the positions held in an account.
    pub async fn positions(&self, id: &AccountId) -> Result<Vec<Position>> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<Position>,
        }
        let path = format!(
            "account/positions?account_id={}",
            urlencoding::encode(id.as_str())
        );
        let response: Response = self.inner.get(&path).await?;
        Ok(response.results)
    }

    /// List recent account activities (orders, deposits, dividends, ...)
    /// across all accounts.
    pub async fn activities(&self) -> Result<Vec<Activity>> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<Activity>,
        }
        let response: Response = self.inner.get("account/activities").await?;
        Ok(response.results)
    }
}
