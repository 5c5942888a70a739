//! Enumeration types used across the Trade API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an order, as the service spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Buy a fixed number of shares
    BuyQuantity,
    /// Sell a fixed number of shares
    SellQuantity,
}

impl OrderType {
    /// Returns `true` if this is a buy order.
    pub fn is_buy(&self) -> bool {
        matches!(self, OrderType::BuyQuantity)
    }
}

/// Execution style of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSubType {
    /// Execute at the current market price. The service still requires a
    /// limit price, which the client fills in from the live quote.
    Market,
    /// Execute at the given limit price or better.
    Limit,
}

/// How long an order remains active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    /// Expires at the end of the trading day. The only value the service
    /// accepts for self-directed orders.
    #[default]
    Day,
}

/// Status of a submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Accepted but not yet submitted to market
    New,
    /// Working at the venue
    Submitted,
    /// Fully filled
    Posted,
    /// Cancelled before filling
    Cancelled,
    /// Expired unfilled
    Expired,
    /// Anything the service adds later
    #[serde(other)]
    Unknown,
}

/// Time window for the account history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistoryPeriod {
    /// One day
    Day,
    /// One week
    Week,
    /// One month
    Month,
    /// Three months
    Quarter,
    /// One year
    Year,
    /// Since account opening
    #[default]
    All,
}

impl HistoryPeriod {
    /// The path segment the service expects for this period.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryPeriod::Day => "1d",
            HistoryPeriod::Week => "1w",
            HistoryPeriod::Month => "1m",
            HistoryPeriod::Quarter => "3m",
            HistoryPeriod::Year => "1y",
            HistoryPeriod::All => "all",
        }
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
