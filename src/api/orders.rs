//! Orders service: order listing and placement.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::client::ClientInner;
use crate::models::{AccountId, Order, OrderRequest, OrderType, Security, SecurityId};
use crate::{Error, Result};

/// Service for order operations.
///
/// Market orders are composed from a live quote: the service requires a
/// limit price on every order, so the current quoted price is fetched and
/// used as the limit. Without a quote, [`Error::QuoteUnavailable`] is
/// raised before anything is submitted.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: wstrade_rs::WsTradeClient) -> wstrade_rs::Result<()> {
/// let order = client
///     .orders()
///     .market_buy(&"tfsa-abc123".into(), &"sec-s-1".into(), 10)
///     .await?;
/// println!("placed {}: {:?}", order.id, order.status);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List orders, newest first.
    ///
    /// With a symbol, the decoded list is filtered client-side to entries
    /// whose symbol matches exactly (case-sensitive, no partial match).
    /// Both paths return a bare list.
    pub async fn list(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<Order>,
        }
        let response: Response = self.inner.get("orders").await?;

        match symbol {
            Some(symbol) => Ok(response
                .results
                .into_iter()
                .filter(|order| order.symbol.as_ref().map(|s| s.as_str()) == Some(symbol))
                .collect()),
            None => Ok(response.results),
        }
    }

    /// Submit an order.
    pub async fn place(&self, order: &OrderRequest) -> Result<Order> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Order,
        }
        let response: Response = self.inner.post("orders", order).await?;
        Ok(response.results)
    }

    /// Place a market buy, pegged to the current quoted price.
    pub async fn market_buy(
        &self,
        account_id: &AccountId,
        security_id: &SecurityId,
        quantity: u32,
    ) -> Result<Order> {
        let quoted = self.quoted_price(security_id).await?;
        self.place(&OrderRequest::market(
            account_id.clone(),
            security_id.clone(),
            OrderType::BuyQuantity,
            quantity,
            quoted,
        ))
        .await
    }

    /// Place a market sell, pegged to the current quoted price.
    pub async fn market_sell(
        &self,
        account_id: &AccountId,
        security_id: &SecurityId,
        quantity: u32,
    ) -> Result<Order> {
        let quoted = self.quoted_price(security_id).await?;
        self.place(&OrderRequest::market(
            account_id.clone(),
            security_id.clone(),
            OrderType::SellQuantity,
            quantity,
            quoted,
        ))
        .await
    }

    /// Place a limit buy at the given price.
    pub async fn limit_buy(
        &self,
        account_id: &AccountId,
        security_id: &SecurityId,
        quantity: u32,
        limit_price: Decimal,
    ) -> Result<Order> {
        self.place(&OrderRequest::limit(
            account_id.clone(),
            security_id.clone(),
            OrderType::BuyQuantity,
            quantity,
            limit_price,
        ))
        .await
    }

    /// Place a limit sell at the given price.
    pub async fn limit_sell(
        &self,
        account_id: &AccountId,
        security_id: &SecurityId,
        quantity: u32,
        limit_price: Decimal,
    ) -> Result<Order> {
        self.place(&OrderRequest::limit(
            account_id.clone(),
            security_id.clone(),
            OrderType::SellQuantity,
            quantity,
            limit_price,
        ))
        .await
    }

    /// Fetch the security and pull out its quoted price.
    async fn quoted_price(&self, security_id: &SecurityId) -> Result<Decimal> {
        let security: Security = self
            .inner
            .get(&format!("securities/{}", security_id))
            .await?;
        security
            .quoted_amount()
            .ok_or_else(|| Error::QuoteUnavailable {
                security_id: security_id.to_string(),
            })
    }
}
