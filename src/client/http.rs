//! The main client type.

use std::sync::Arc;

use crate::api::{
    AccountsService, BankingService, OrdersService, ProfileService, SecuritiesService,
};
use crate::auth::{self, Credentials, LoginFlow, Session, TwoFactorChallenge, TwoFactorProvider};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::requestor::Requestor;

/// The main client for the Wealthsimple Trade API.
///
/// The client owns the authentication lifecycle and exposes one service
/// per resource family. Cloning is cheap; clones share the session, so a
/// login through one clone is visible to all of them.
///
/// # Example
///
/// ```no_run
/// use wstrade_rs::{Credentials, WsTradeClient};
///
/// #[tokio::main]
/// async fn main() -> wstrade_rs::Result<()> {
///     let client = WsTradeClient::connect("user@example.com", "hunter2").await?;
///
///     for account in client.accounts().list().await? {
///         println!("{}: {:?}", account.id, account.current_balance);
///     }
///     Ok(())
/// }
/// ```
pub struct WsTradeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) requestor: Requestor,
    pub(crate) two_factor: Option<Arc<dyn TwoFactorProvider>>,
}

impl WsTradeClient {
    /// Create an unauthenticated client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create an unauthenticated client with a two-factor provider for
    /// [`login`](Self::login) to consult when the service issues a
    /// challenge.
    pub fn with_two_factor(
        config: ClientConfig,
        provider: Arc<dyn TwoFactorProvider>,
    ) -> Result<Self> {
        Self::build(config, Some(provider))
    }

    /// Create a client with the default configuration and log in.
    ///
    /// Fails with [`Error::MissingTwoFactorHandler`] for accounts that
    /// require two-factor authentication; construct with
    /// [`with_two_factor`](Self::with_two_factor) for those.
    pub async fn connect(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let client = Self::new(ClientConfig::default())?;
        client.login(&Credentials::new(email, password)).await?;
        Ok(client)
    }

    fn build(config: ClientConfig, two_factor: Option<Arc<dyn TwoFactorProvider>>) -> Result<Self> {
        let session = Session::new();
        let requestor = Requestor::new(&config, session)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                requestor,
                two_factor,
            }),
        })
    }

    /// Log in, resolving a two-factor challenge through the configured
    /// provider.
    ///
    /// With no provider configured, a challenged login fails with
    /// [`Error::MissingTwoFactorHandler`] and no second request is made.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        match self.begin_login(credentials).await? {
            LoginFlow::Complete => Ok(()),
            LoginFlow::ChallengeRequired(challenge) => {
                let provider = self
                    .inner
                    .two_factor
                    .as_ref()
                    .ok_or(Error::MissingTwoFactorHandler)?;
                let code = provider.one_time_code();
                self.complete_login(challenge, &code).await
            }
        }
    }

    /// First step of the explicit login protocol: submit credentials and
    /// either finish, or receive a [`TwoFactorChallenge`] to complete.
    pub async fn begin_login(&self, credentials: &Credentials) -> Result<LoginFlow> {
        auth::begin(&self.inner.requestor, credentials).await
    }

    /// Second step: finish a challenged login with a one-time code.
    pub async fn complete_login(
        &self,
        challenge: TwoFactorChallenge,
        code: &str,
    ) -> Result<()> {
        auth::complete(&self.inner.requestor, challenge, code).await
    }

    /// Whether this client's session holds a bearer token.
    pub async fn is_authenticated(&self) -> bool {
        self.session().is_authenticated().await
    }

    /// The session shared by this client and its clones.
    pub fn session(&self) -> &Session {
        self.inner.requestor.session()
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the securities service.
    pub fn securities(&self) -> SecuritiesService {
        SecuritiesService::new(self.inner.clone())
    }

    /// Get the profile service.
    pub fn profile(&self) -> ProfileService {
        ProfileService::new(self.inner.clone())
    }

    /// Get the banking service.
    pub fn banking(&self) -> BankingService {
        BankingService::new(self.inner.clone())
    }
}

impl ClientInner {
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.requestor.get(path).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        self.requestor.post(path, body).await
    }
}

impl Clone for WsTradeClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for WsTradeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsTradeClient")
            .field("requestor", &self.inner.requestor)
            .field("two_factor", &self.inner.two_factor.is_some())
            .finish()
    }
}
