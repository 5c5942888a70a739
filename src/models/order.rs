//! Order models: submitted orders as the service reports them, and the
//! payload for placing new ones.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::Money;
use super::enums::{OrderStatus, OrderSubType, OrderType, TimeInForce};
use super::primitives::{AccountId, OrderId, SecurityId, Symbol};

/// An order as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order id
    pub id: OrderId,
    /// Account the order was placed in
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Security being traded
    #[serde(default)]
    pub security_id: Option<SecurityId>,
    /// Ticker symbol of the security
    #[serde(default)]
    pub symbol: Option<Symbol>,
    /// Ordered quantity
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Quantity filled so far
    #[serde(default)]
    pub filled_quantity: Option<u32>,
    /// Buy or sell
    #[serde(default)]
    pub order_type: Option<OrderType>,
    /// Market or limit
    #[serde(default)]
    pub order_sub_type: Option<OrderSubType>,
    /// Order lifetime
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    /// Current status
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// Limit price the order was accepted with
    #[serde(default)]
    pub limit_price: Option<Money>,
    /// When the order was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the order completed, if it has
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payload for placing an order.
///
/// The service requires a limit price on every order, market orders
/// included; for market orders the client pegs it to the current quote.
/// `time_in_force` is always `day`, the only value the venue accepts.
///
/// # Example
///
/// ```
/// use wstrade_rs::models::{OrderRequest, OrderType};
/// use rust_decimal_macros::dec;
///
/// let order = OrderRequest::limit(
///     "tfsa-abc123".into(),
///     "sec-s-1".into(),
///     OrderType::BuyQuantity,
///     10,
///     dec!(187.50),
/// );
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Account to place the order in
    pub account_id: AccountId,
    /// Security to trade
    pub security_id: SecurityId,
    /// Number of shares
    pub quantity: u32,
    /// Limit price; for market orders, the current quoted price
    pub limit_price: Decimal,
    /// Buy or sell
    pub order_type: OrderType,
    /// Market or limit
    pub order_sub_type: OrderSubType,
    /// Order lifetime
    pub time_in_force: TimeInForce,
}

impl OrderRequest {
    /// Compose a market order. The quoted price must be supplied because
    /// the service requires a limit price even on market orders.
    pub fn market(
        account_id: AccountId,
        security_id: SecurityId,
        order_type: OrderType,
        quantity: u32,
        quoted_price: Decimal,
    ) -> Self {
        Self {
            account_id,
            security_id,
            quantity,
            limit_price: quoted_price,
            order_type,
            order_sub_type: OrderSubType::Market,
            time_in_force: TimeInForce::Day,
        }
    }

    /// Compose a limit order at the given price.
    pub fn limit(
        account_id: AccountId,
        security_id: SecurityId,
        order_type: OrderType,
        quantity: u32,
        limit_price: Decimal,
    ) -> Self {
        Self {
            account_id,
            security_id,
            quantity,
            limit_price,
            order_type,
            order_sub_type: OrderSubType::Limit,
            time_in_force: TimeInForce::Day,
        }
    }
}
