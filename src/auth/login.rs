//! The login handshake.
//!
//! Authentication is a two-step protocol. [`begin`] submits the
//! credentials; if the service answers with a two-factor challenge header
//! the caller receives a [`TwoFactorChallenge`] and finishes with
//! [`complete`], which resubmits the credentials with the one-time code
//! appended. Both steps evaluate the final response the same way: an
//! unauthorized status is invalid credentials, and a success must carry
//! the access-token header, which is stored into the [`Session`].
//!
//! [`Session`]: super::Session

use reqwest::{Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::client::Requestor;
use crate::{Error, Result};

/// Response header whose presence signals a two-factor challenge.
pub(crate) const OTP_CHALLENGE_HEADER: &str = "x-wealthsimple-otp";

/// Response header carrying the bearer token on successful login.
pub(crate) const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

const LOGIN_PATH: &str = "auth/login";

/// Login credentials. Ephemeral: used during the login exchange only and
/// not retained by the client.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The login email.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.expose_secret().is_empty() {
            return Err(Error::MissingCredentials);
        }
        Ok(())
    }

    fn login_body(&self, otp: Option<&str>) -> Value {
        let mut body = json!({
            "email": self.email,
            "password": self.password.expose_secret(),
        });
        if let Some(code) = otp {
            body["otp"] = Value::from(code);
        }
        body
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Source of one-time codes for accounts with two-factor authentication.
///
/// Supplied at client construction. Invoked synchronously when the
/// service challenges a login, e.g. by prompting the user or reading an
/// authenticator app's current code.
///
/// Any `Fn() -> String` closure qualifies:
///
/// ```
/// use wstrade_rs::auth::TwoFactorProvider;
///
/// let provider = || "123456".to_string();
/// let _: &dyn TwoFactorProvider = &provider;
/// ```
pub trait TwoFactorProvider: Send + Sync {
    /// Produce the current one-time code.
    fn one_time_code(&self) -> String;
}

impl<F> TwoFactorProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn one_time_code(&self) -> String {
        self()
    }
}

/// A pending two-factor challenge issued by [`begin`].
///
/// Retains the submitted credentials so the second request can resubmit
/// them with the one-time code appended, which is how the service expects
/// the handshake to finish.
pub struct TwoFactorChallenge {
    credentials: Credentials,
}

impl std::fmt::Debug for TwoFactorChallenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwoFactorChallenge")
            .field("email", &self.credentials.email)
            .finish()
    }
}

/// Outcome of [`begin`]: either the session is authenticated, or the
/// service demands a one-time code.
#[derive(Debug)]
pub enum LoginFlow {
    /// Authentication completed; the session now carries the token.
    Complete,
    /// A one-time code is required to finish the login.
    ChallengeRequired(TwoFactorChallenge),
}

/// First step of the handshake: submit the credentials.
///
/// Returns a challenge without touching the session when the service
/// demands a one-time code. No second request is issued here.
pub(crate) async fn begin(requestor: &Requestor, credentials: &Credentials) -> Result<LoginFlow> {
    credentials.validate()?;

    let response = requestor
        .dispatch(Method::POST, LOGIN_PATH, Some(&credentials.login_body(None)))
        .await?;

    if response.headers().contains_key(OTP_CHALLENGE_HEADER) {
        tracing::debug!("login challenged for a one-time code");
        return Ok(LoginFlow::ChallengeRequired(TwoFactorChallenge {
            credentials: credentials.clone(),
        }));
    }

    finish(requestor, response).await?;
    Ok(LoginFlow::Complete)
}

/// Second step: resubmit the credentials with the one-time code.
pub(crate) async fn complete(
    requestor: &Requestor,
    challenge: TwoFactorChallenge,
    code: &str,
) -> Result<()> {
    let body = challenge.credentials.login_body(Some(code));
    let response = requestor.dispatch(Method::POST, LOGIN_PATH, Some(&body)).await?;
    finish(requestor, response).await
}

/// Evaluate a login response and store the token on success.
async fn finish(requestor: &Requestor, response: Response) -> Result<()> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::InvalidCredentials);
    }
    if !status.is_success() {
        let body = response.json::<Value>().await.unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            body,
        });
    }

    let token = response
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            Error::Authentication(format!(
                "login response did not carry an {} header",
                ACCESS_TOKEN_HEADER
            ))
        })?
        .to_string();

    requestor.session().set_access_token(token).await;
    tracing::debug!("login complete, session authenticated");
    Ok(())
}
