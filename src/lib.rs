//! # wstrade-rs
//!
//! A typed async Rust client for the Wealthsimple Trade API.
//!
//! This crate wraps the Trade service's private REST API: session
//! authentication with an optional two-factor handshake, account and
//! position listing, account history, order listing and placement, and
//! security, profile, and banking lookups.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use wstrade_rs::WsTradeClient;
//!
//! #[tokio::main]
//! async fn main() -> wstrade_rs::Result<()> {
//!     let client = WsTradeClient::connect(
//!         std::env::var("WSTRADE_EMAIL").expect("WSTRADE_EMAIL required"),
//!         std::env::var("WSTRADE_PASSWORD").expect("WSTRADE_PASSWORD required"),
//!     )
//!     .await?;
//!
//!     for account in client.accounts().list().await? {
//!         println!("{}: {:?}", account.id, account.current_balance);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Two-factor authentication
//!
//! Accounts with two-factor enabled get challenged at login. Either
//! configure a provider and let [`WsTradeClient::login`] drive the
//! exchange:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wstrade_rs::{ClientConfig, Credentials, WsTradeClient};
//!
//! # async fn example() -> wstrade_rs::Result<()> {
//! let client = WsTradeClient::with_two_factor(
//!     ClientConfig::default(),
//!     Arc::new(|| {
//!         // prompt the user, read an authenticator app, ...
//!         "123456".to_string()
//!     }),
//! )?;
//! client
//!     .login(&Credentials::new("user@example.com", "hunter2"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! or run the two steps yourself:
//!
//! ```rust,no_run
//! use wstrade_rs::{ClientConfig, Credentials, LoginFlow, WsTradeClient};
//!
//! # async fn example(read_code: impl Fn() -> String) -> wstrade_rs::Result<()> {
//! let client = WsTradeClient::new(ClientConfig::default())?;
//! let credentials = Credentials::new("user@example.com", "hunter2");
//!
//! match client.begin_login(&credentials).await? {
//!     LoginFlow::Complete => {}
//!     LoginFlow::ChallengeRequired(challenge) => {
//!         client.complete_login(challenge, &read_code()).await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Placing orders
//!
//! The venue requires a limit price on every order, so market orders are
//! pegged to the live quote; a security without an obtainable quote
//! cannot be market-ordered.
//!
//! ```rust,no_run
//! use rust_decimal_macros::dec;
//!
//! # async fn example(client: wstrade_rs::WsTradeClient) -> wstrade_rs::Result<()> {
//! let accounts = client.accounts().ids().await?;
//! let security = client
//!     .securities()
//!     .id_for_symbol("AAPL")
//!     .await?
//!     .expect("unambiguous AAPL listing");
//!
//! client.orders().market_buy(&accounts[0], &security, 10).await?;
//! client
//!     .orders()
//!     .limit_sell(&accounts[0], &security, 10, dec!(250.00))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Sessions never refresh themselves: when the token expires, resource
//! calls start failing with an unauthorized [`Error::Api`] and the caller
//! logs in again.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, LoginFlow, Session, TwoFactorChallenge, TwoFactorProvider};
pub use client::{ClientConfig, WsTradeClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{AccountId, OrderId, SecurityId, Symbol};

/// Prelude module for convenient imports.
///
/// ```rust
/// use wstrade_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{Credentials, LoginFlow, Session, TwoFactorProvider};
    pub use crate::client::{ClientConfig, WsTradeClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Account, AccountHistory, AccountId, Activity, BankAccount, Deposit, HistoryPeriod,
        Money, Order, OrderId, OrderRequest, OrderStatus, OrderSubType, OrderType, Person,
        Position, Quote, Security, SecurityId, Stock, Symbol, TimeInForce, User,
    };
}
