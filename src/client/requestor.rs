//! The request dispatcher.
//!
//! [`Requestor`] owns the HTTP connection context: the `reqwest` client,
//! the parsed base URL, and a handle to the [`Session`] whose bearer
//! token it attaches to authenticated requests.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::Session;
use crate::client::ClientConfig;
use crate::{Error, Result};

pub(crate) struct Requestor {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl Requestor {
    pub(crate) fn new(config: &ClientConfig, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    /// Issue a single request and return the raw response.
    ///
    /// Only GET and POST are supported; anything else fails with
    /// [`Error::InvalidMethod`] before any network activity. POST
    /// serializes `body` as JSON. GET ignores `body` and attaches the
    /// session's bearer token, read fresh from the session on every call.
    /// Transport failures propagate as [`Error::Http`]; no retries.
    pub(crate) async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, path, "dispatching request");

        if method == Method::GET {
            let mut request = self.http.get(url);
            if let Some(token) = self.session.access_token().await {
                request = request.header(AUTHORIZATION, token.expose_secret());
            }
            Ok(request.send().await?)
        } else if method == Method::POST {
            let mut request = self.http.post(url);
            if let Some(body) = body {
                request = request.json(body);
            }
            Ok(request.send().await?)
        } else {
            Err(Error::InvalidMethod(method))
        }
    }

    /// GET `path` and decode the success body as `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.dispatch(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    /// POST `body` to `path` and decode the success body as `T`.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// Map non-success statuses to [`Error::Api`] and decode the rest.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.json::<Value>().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl std::fmt::Debug for Requestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requestor")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
