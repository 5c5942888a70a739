//! Error types for the Wealthsimple Trade API client.
//!
//! Every fallible operation in this crate returns [`Result`], and every
//! failure mode is a variant of [`Error`]. Nothing is retried or recovered
//! internally; errors surface to the immediate caller.

use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Wealthsimple Trade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Wealthsimple Trade API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying HTTP request failed (connection, TLS, timeout).
    ///
    /// Transport failures are never swallowed; they propagate as this
    /// variant.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL construction failed.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The API returned a non-success status for a resource call.
    #[error("API error: status={status}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Decoded response body, for inspection
        body: Value,
    },

    /// The request dispatcher was given a verb other than GET or POST.
    #[error("invalid request method: {0}")]
    InvalidMethod(Method),

    /// Login was attempted without both an email and a password.
    #[error("missing login credentials")]
    MissingCredentials,

    /// The login request was rejected as unauthorized.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// The account requires two-factor authentication but no
    /// [`TwoFactorProvider`](crate::auth::TwoFactorProvider) was configured.
    #[error("account requires two-factor authentication but no provider is configured")]
    MissingTwoFactorHandler,

    /// A login response that should have completed authentication was
    /// malformed (e.g. the access-token header was absent).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// An account id or history record lookup found no match.
    #[error("{0} does not correspond to any account")]
    AccountNotFound(String),

    /// A market order could not be composed because the security carried no
    /// quoted price.
    #[error("no quote available for security {security_id}")]
    QuoteUnavailable {
        /// The security the quote was requested for
        security_id: String,
    },
}

impl Error {
    /// Returns `true` if this error came from the authentication flow.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::MissingCredentials
                | Error::InvalidCredentials
                | Error::MissingTwoFactorHandler
                | Error::Authentication(_)
        )
    }

    /// Returns `true` if this error is an unauthorized API response,
    /// which signals that the session token has expired and the caller
    /// must re-authenticate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Extract the service's error message from an API error body, if one
    /// is present.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => body.get("error").and_then(Value::as_str),
            _ => None,
        }
    }
}
