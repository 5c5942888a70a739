//! Account, position, history, and activity models.
//!
//! These entities are owned by the service; the crate types the fields it
//! relies on and leaves the rest optional, so schema additions on the
//! server side do not break deserialization. The only field the client
//! itself depends on is `id`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{AccountId, SecurityId, Symbol};
use super::security::{Quote, Stock};

/// A monetary amount with its currency, as the service reports balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount
    pub amount: Decimal,
    /// ISO currency code (e.g. `"CAD"`)
    #[serde(default)]
    pub currency: Option<String>,
}

/// A Trade account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account id, used for all account-scoped lookups
    pub id: AccountId,
    /// Account number at the custodian
    #[serde(default)]
    pub custodian_account_number: Option<String>,
    /// Registered account type (e.g. `"ca_tfsa"`)
    #[serde(default)]
    pub account_type: Option<String>,
    /// Base currency of the account
    #[serde(default)]
    pub base_currency: Option<String>,
    /// Account status (e.g. `"open"`)
    #[serde(default)]
    pub status: Option<String>,
    /// Current buying power
    #[serde(default)]
    pub buying_power: Option<Money>,
    /// Current cash balance
    #[serde(default)]
    pub current_balance: Option<Money>,
    /// Net lifetime deposits
    #[serde(default)]
    pub net_deposits: Option<Money>,
    /// Cash available to withdraw
    #[serde(default)]
    pub available_to_withdraw: Option<Money>,
    /// Earnings withdrawn to date
    #[serde(default)]
    pub withdrawn_earnings: Option<Money>,
    /// When the account was opened
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    /// When the account was closed, if it was
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One snapshot in an account's value history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Total account value on that date
    #[serde(default)]
    pub value: Option<Money>,
    /// Equity portion of the value
    #[serde(default)]
    pub equity_value: Option<Money>,
    /// Net deposits up to that date
    #[serde(default)]
    pub net_deposits: Option<Money>,
    /// Earnings withdrawn up to that date
    #[serde(default)]
    pub withdrawn_earnings: Option<Money>,
}

/// Historical value series for one account over a requested period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountHistory {
    /// Daily snapshots, oldest first
    #[serde(default)]
    pub results: Vec<HistoryEntry>,
    /// First date covered by the series
    #[serde(default)]
    pub start: Option<NaiveDate>,
}

/// A holding in an account: a security plus the owned quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Id of the held security
    pub id: SecurityId,
    /// Account holding the position
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Shares held
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Shares not tied up in open orders
    #[serde(default)]
    pub sellable_quantity: Option<Decimal>,
    /// Cost basis
    #[serde(default)]
    pub book_value: Option<Money>,
    /// Current market value
    #[serde(default)]
    pub market_value: Option<Money>,
    /// Listing details of the security
    #[serde(default)]
    pub stock: Option<Stock>,
    /// Latest quote for the security
    #[serde(default)]
    pub quote: Option<Quote>,
    /// Trading currency
    #[serde(default)]
    pub currency: Option<String>,
}

/// One entry in the account activity feed.
///
/// Activities are heterogeneous (orders, deposits, dividends, ...); the
/// `object` field names the concrete kind and kind-specific fields are
/// simply absent for other kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity id
    pub id: String,
    /// Kind of activity (e.g. `"order"`, `"deposit"`, `"dividend"`)
    #[serde(default)]
    pub object: Option<String>,
    /// Account the activity belongs to
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Security involved, for trading activities
    #[serde(default)]
    pub security_id: Option<SecurityId>,
    /// Symbol involved, for trading activities
    #[serde(default)]
    pub symbol: Option<Symbol>,
    /// Monetary value of the activity
    #[serde(default)]
    pub market_value: Option<Money>,
    /// When the activity occurred
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_account() {
        let json = r#"{
            "id": "tfsa-abc123",
            "custodian_account_number": "HJ31766",
            "account_type": "ca_tfsa",
            "base_currency": "CAD",
            "status": "open",
            "buying_power": { "amount": "250.75", "currency": "CAD" },
            "current_balance": { "amount": 1000, "currency": "CAD" }
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, AccountId::new("tfsa-abc123"));
        assert_eq!(account.account_type.as_deref(), Some("ca_tfsa"));
        assert_eq!(account.buying_power.unwrap().amount, dec!(250.75));
        assert_eq!(account.current_balance.unwrap().amount, dec!(1000));
        assert!(account.deleted_at.is_none());
    }

    #[test]
    fn test_deserialize_minimal_account() {
        // The service only guarantees an id; everything else is optional.
        let account: Account = serde_json::from_str(r#"{"id": "rrsp-xyz"}"#).unwrap();
        assert_eq!(account.id.as_str(), "rrsp-xyz");
        assert!(account.buying_power.is_none());
    }

    #[test]
    fn test_deserialize_history() {
        let json = r#"{
            "results": [
                { "date": "2024-03-01", "value": { "amount": "105.50", "currency": "CAD" } },
                { "date": "2024-03-02", "value": { "amount": "107.25", "currency": "CAD" } }
            ],
            "start": "2024-03-01"
        }"#;

        let history: AccountHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.results.len(), 2);
        assert_eq!(
            history.results[1].value.as_ref().unwrap().amount,
            dec!(107.25)
        );
    }
}
