//! Bank account and deposit models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Money;

/// A bank account linked for funding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique bank account id
    pub id: String,
    /// Kind of record (`"bank_account"`)
    #[serde(default)]
    pub object: Option<String>,
    /// Display name of the account
    #[serde(default)]
    pub account_name: Option<String>,
    /// Masked account number
    #[serde(default)]
    pub account_number: Option<String>,
    /// Institution the account is held at
    #[serde(default)]
    pub institution_name: Option<String>,
    /// Verification state (e.g. `"verified"`)
    #[serde(default)]
    pub verification_status: Option<String>,
    /// When the account was linked
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A deposit (funds transfer) into a Trade account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposit {
    /// Unique transfer id
    pub id: String,
    /// Source bank account
    #[serde(default)]
    pub bank_account_id: Option<String>,
    /// Destination Trade account
    #[serde(default)]
    pub account_id: Option<String>,
    /// Transfer state (e.g. `"pending"`, `"accepted"`)
    #[serde(default)]
    pub status: Option<String>,
    /// Transferred amount
    #[serde(default)]
    pub value: Option<Money>,
    /// When the transfer was initiated
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
