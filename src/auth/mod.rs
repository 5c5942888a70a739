//! Authentication and session management.
//!
//! Logging in is a two-step protocol:
//!
//! 1. [`WsTradeClient::begin_login`] submits the credentials. Accounts
//!    without two-factor authentication are done here.
//! 2. If the service answers with a challenge, finish with
//!    [`WsTradeClient::complete_login`] and a one-time code.
//!
//! For the common case there is also [`WsTradeClient::login`], which runs
//! both steps and pulls the one-time code from a [`TwoFactorProvider`]
//! configured at client construction. A challenged login on a client with
//! no provider fails with
//! [`Error::MissingTwoFactorHandler`](crate::Error::MissingTwoFactorHandler)
//! without issuing a second request.
//!
//! ```no_run
//! use wstrade_rs::{Credentials, WsTradeClient};
//!
//! # async fn example() -> wstrade_rs::Result<()> {
//! let client = WsTradeClient::new(Default::default())?;
//! client
//!     .login(&Credentials::new("user@example.com", "hunter2"))
//!     .await?;
//! assert!(client.is_authenticated().await);
//! # Ok(())
//! # }
//! ```
//!
//! [`WsTradeClient::begin_login`]: crate::WsTradeClient::begin_login
//! [`WsTradeClient::complete_login`]: crate::WsTradeClient::complete_login
//! [`WsTradeClient::login`]: crate::WsTradeClient::login

mod login;
mod session;

pub use login::{Credentials, LoginFlow, TwoFactorChallenge, TwoFactorProvider};
pub use session::Session;

pub(crate) use login::{begin, complete};
