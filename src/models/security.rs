//! Security and quote models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{SecurityId, Symbol};

/// Listing details for a security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker symbol
    pub symbol: Symbol,
    /// Company or fund name
    #[serde(default)]
    pub name: Option<String>,
    /// Exchange the security trades on (e.g. `"TSX"`, `"NASDAQ"`)
    #[serde(default)]
    pub primary_exchange: Option<String>,
}

/// A snapshot quote for a security.
///
/// Quotes are delayed for non-subscribed accounts; the service decides
/// what it sends. Fields can be absent outside market hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Last traded price. This is the price market orders are pegged to.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Best bid
    #[serde(default)]
    pub bid: Option<Decimal>,
    /// Best ask
    #[serde(default)]
    pub ask: Option<Decimal>,
    /// Session high
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Session low
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Session open
    #[serde(default)]
    pub open: Option<Decimal>,
    /// Previous session close
    #[serde(default)]
    pub previous_close: Option<Decimal>,
    /// Session volume
    #[serde(default)]
    pub volume: Option<u64>,
}

/// A tradeable security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    /// Unique security id, used when placing orders
    pub id: SecurityId,
    /// Trading currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Trading status (e.g. `"trading"`, `"halted"`)
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the security can currently be bought
    #[serde(default)]
    pub buyable: Option<bool>,
    /// Order sub-types the venue accepts for this security
    #[serde(default)]
    pub allowed_order_subtypes: Option<Vec<String>>,
    /// Listing details
    #[serde(default)]
    pub stock: Option<Stock>,
    /// Latest quote
    #[serde(default)]
    pub quote: Option<Quote>,
}

impl Security {
    /// The ticker symbol, when listing details are present.
    pub fn symbol(&self) -> Option<&Symbol> {
        self.stock.as_ref().map(|s| &s.symbol)
    }

    /// The quoted price, when a quote with an amount is present.
    pub fn quoted_amount(&self) -> Option<Decimal> {
        self.quote.as_ref().and_then(|q| q.amount)
    }
}
