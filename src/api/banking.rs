//! Banking service: linked bank accounts, deposits, and FX rates.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{BankAccount, Deposit};
use crate::Result;

/// Service for funding-related resources.
pub struct BankingService {
    inner: Arc<ClientInner>,
}

impl BankingService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List bank accounts linked for funding.
    pub async fn bank_accounts(&self) -> Result<Vec<BankAccount>> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<BankAccount>,
        }
        let response: Response = self.inner.get("bank-accounts").await?;
        Ok(response.results)
    }

    /// List deposits into Trade accounts.
    pub async fn deposits(&self) -> Result<Vec<Deposit>> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<Deposit>,
        }
        let response: Response = self.inner.get("deposits").await?;
        Ok(response.results)
    }

    /// Get the current foreign exchange rates.
    ///
    /// The rate document's schema is owned by the service and passed
    /// through as decoded JSON.
    pub async fn forex(&self) -> Result<Value> {
        self.inner.get("forex").await
    }
}
