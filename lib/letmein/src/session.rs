//! Session lifecycle endpoints.
//!
//! Sign-in, session introspection, refresh, and sign-out. These
//! endpoints report failures through the plain-detail error path
//! ([`letmein_core::Error::Detail`]) rather than status classification.

use letmein_core::{HttpClient, Method, Request, Result};

use crate::config::AuthConfig;
use crate::detail::ensure_status;
use crate::entities::{Data, SessionToken, User};
use crate::transport::HyperTransport;

/// Client for the session endpoints.
#[derive(Debug, Clone)]
pub struct SessionApi<C = HyperTransport> {
    config: AuthConfig,
    client: C,
}

impl SessionApi<HyperTransport> {
    /// Create a session client with the default transport.
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(config, HyperTransport::new())
    }
}

impl<C: HttpClient> SessionApi<C> {
    /// Create a session client over a custom transport.
    pub fn with_client(config: AuthConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Sign a user in and return the session token.
    ///
    /// POST `/sessions` with the application token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String> {
        let request = Request::builder(Method::Post, self.config.endpoint("/sessions")?)
            .header("app-token", self.config.app_token.as_str())
            .body_field("email", email)
            .body_field("password", password)
            .build();

        let response = self.client.execute(request).await?;
        let token: Data<SessionToken> = ensure_status(response, 200)?.json()?;
        Ok(token.data.token)
    }

    /// Whether the session token is currently valid.
    ///
    /// GET `/sessions/signed_in`; any non-200 status means "not signed
    /// in", never an error.
    pub async fn signed_in(&self, session_token: &str) -> Result<bool> {
        let request = Request::builder(
            Method::Get,
            self.config.endpoint("/sessions/signed_in")?,
        )
        .bearer_auth(session_token)
        .build();

        let response = self.client.execute(request).await?;
        Ok(response.status() == 200)
    }

    /// The user owning the session.
    ///
    /// GET `/sessions`.
    pub async fn current_user(&self, session_token: &str) -> Result<User> {
        let request = Request::builder(Method::Get, self.config.endpoint("/sessions")?)
            .bearer_auth(session_token)
            .build();

        let response = self.client.execute(request).await?;
        let user: Data<User> = ensure_status(response, 200)?.json()?;
        Ok(user.data)
    }

    /// Terminate the session.
    ///
    /// DELETE `/sessions`.
    pub async fn sign_out(&self, session_token: &str) -> Result<()> {
        let request = Request::builder(Method::Delete, self.config.endpoint("/sessions")?)
            .bearer_auth(session_token)
            .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?;
        Ok(())
    }

    /// Exchange the session token for a fresh one.
    ///
    /// PUT `/sessions`.
    pub async fn refresh(&self, session_token: &str) -> Result<String> {
        let request = Request::builder(Method::Put, self.config.endpoint("/sessions")?)
            .bearer_auth(session_token)
            .build();

        let response = self.client.execute(request).await?;
        let token: Data<SessionToken> = ensure_status(response, 200)?.json()?;
        Ok(token.data.token)
    }
}
