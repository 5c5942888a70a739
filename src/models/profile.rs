//! Person and user profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The account holder's personal profile, from the `person` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Citizenship country codes
    #[serde(default)]
    pub citizenships: Option<Vec<String>>,
    /// When the profile was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The authenticated user record, from the `me` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Login email
    #[serde(default)]
    pub email: Option<String>,
    /// Canonical user id shared across Wealthsimple products
    #[serde(default)]
    pub canonical_id: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
}
