//! Data models for the Wealthsimple Trade API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Newtype ids and [`Symbol`]
//! - [`enums`] - Order and history enumerations
//! - [`account`] - Accounts, positions, history, activities
//! - [`order`] - Orders and the order-placement payload
//! - [`security`] - Securities and quotes
//! - [`banking`] - Bank accounts and deposits
//! - [`profile`] - Person and user records

pub mod account;
pub mod banking;
pub mod enums;
pub mod order;
pub mod primitives;
pub mod profile;
pub mod security;

pub use account::{Account, AccountHistory, Activity, HistoryEntry, Money, Position};
pub use banking::{BankAccount, Deposit};
pub use enums::{HistoryPeriod, OrderStatus, OrderSubType, OrderType, TimeInForce};
pub use order::{Order, OrderRequest};
pub use primitives::{AccountId, OrderId, SecurityId, Symbol};
pub use profile::{Person, User};
pub use security::{Quote, Security, Stock};
