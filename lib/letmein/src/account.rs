//! Account lifecycle endpoints.
//!
//! Unlock, confirmation, and password recovery. Like the session
//! endpoints these report failures through the plain-detail error path.

use letmein_core::{HttpClient, Method, Request, Result};

use crate::config::AuthConfig;
use crate::detail::ensure_status;
use crate::transport::HyperTransport;

/// Client for the account endpoints.
#[derive(Debug, Clone)]
pub struct AccountApi<C = HyperTransport> {
    config: AuthConfig,
    client: C,
}

impl AccountApi<HyperTransport> {
    /// Create an account client with the default transport.
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(config, HyperTransport::new())
    }
}

impl<C: HttpClient> AccountApi<C> {
    /// Create an account client over a custom transport.
    pub fn with_client(config: AuthConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Unlock an account with the token from the unlock e-mail.
    ///
    /// PUT `/accounts/unlock`; the service acknowledges with 202.
    pub async fn unlock(&self, unlock_token: &str) -> Result<()> {
        let request = Request::builder(Method::Put, self.config.endpoint("/accounts/unlock")?)
            .body_field("token", unlock_token)
            .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 202)?;
        Ok(())
    }

    /// Confirm a freshly registered account.
    ///
    /// PUT `/accounts/confirm`; the service acknowledges with 202.
    pub async fn confirm(&self, confirmation_token: &str) -> Result<()> {
        let request = Request::builder(Method::Put, self.config.endpoint("/accounts/confirm")?)
            .body_field("token", confirmation_token)
            .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 202)?;
        Ok(())
    }

    /// Ask the service to start password recovery for an e-mail.
    ///
    /// POST `/accounts/password/recover` with the application token.
    pub async fn request_password_recovery(&self, email: &str) -> Result<()> {
        let request = Request::builder(
            Method::Post,
            self.config.endpoint("/accounts/password/recover")?,
        )
        .header("app-token", self.config.app_token.as_str())
        .body_field("email", email)
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?;
        Ok(())
    }

    /// Set a new password with the token from the recovery e-mail.
    ///
    /// PUT `/accounts/password/recover`.
    pub async fn recover_password(
        &self,
        recovery_token: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<()> {
        let request = Request::builder(
            Method::Put,
            self.config.endpoint("/accounts/password/recover")?,
        )
        .body_field("token", recovery_token)
        .body_field("password", password)
        .body_field("password_confirmation", password_confirmation)
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?;
        Ok(())
    }
}
