//! Application CRUD, app users, and app tokens.
//!
//! Applications are scoped under their owning organization:
//! `/rest/admin/organizations/{org}/apps/...`.

use letmein_core::{HttpClient, Method, Request, Result};

use crate::admin::ensure_status;
use crate::config::AdminConfig;
use crate::entities::{App, AppToken, AppUser, Data, Paginated};
use crate::transport::HyperTransport;

/// Client for the organization-scoped application endpoints.
#[derive(Debug, Clone)]
pub struct AppsApi<C = HyperTransport> {
    config: AdminConfig,
    client: C,
}

impl AppsApi<HyperTransport> {
    /// Create an apps client with the default transport.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self::with_client(config, HyperTransport::new())
    }
}

impl<C: HttpClient> AppsApi<C> {
    /// Create an apps client over a custom transport.
    pub fn with_client(config: AdminConfig, client: C) -> Self {
        Self { config, client }
    }

    fn apps_path(organization_id: &str) -> String {
        format!("/organizations/{organization_id}/apps")
    }

    /// Register an application under an organization.
    pub async fn create(
        &self,
        organization_id: &str,
        name: &str,
        description: &str,
    ) -> Result<App> {
        let request = Request::builder(
            Method::Post,
            self.config.endpoint(&Self::apps_path(organization_id))?,
        )
        .bearer_auth(&self.config.session_token)
        .body_field("name", name)
        .body_field("description", description)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<App> = ensure_status(response, 201)?.json()?;
        Ok(data.data)
    }

    /// Fetch an application by id.
    pub async fn find(&self, organization_id: &str, id: &str) -> Result<App> {
        let request = Request::builder(
            Method::Get,
            self.config
                .endpoint(&format!("{}/{id}", Self::apps_path(organization_id)))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<App> = ensure_status(response, 200)?.json()?;
        Ok(data.data)
    }

    /// Replace an application's attributes.
    pub async fn update(&self, organization_id: &str, app: &App) -> Result<App> {
        let request = Request::builder(
            Method::Put,
            self.config
                .endpoint(&format!("{}/{}", Self::apps_path(organization_id), app.id))?,
        )
        .bearer_auth(&self.config.session_token)
        .body_field("name", &app.name)
        .body_field("description", &app.description)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<App> = ensure_status(response, 200)?.json()?;
        Ok(data.data)
    }

    /// Delete an application.
    pub async fn delete(&self, organization_id: &str, id: &str) -> Result<()> {
        let request = Request::builder(
            Method::Delete,
            self.config
                .endpoint(&format!("{}/{id}", Self::apps_path(organization_id)))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 204)?;
        Ok(())
    }

    /// List an organization's applications, one page at a time.
    pub async fn list(
        &self,
        organization_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<App>> {
        let request = Request::builder(
            Method::Get,
            self.config.endpoint(&Self::apps_path(organization_id))?,
        )
        .bearer_auth(&self.config.session_token)
        .query("page", &page.to_string())
        .query("per_page", &per_page.to_string())
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?.json()
    }

    /// List the users attached to an application.
    pub async fn users(
        &self,
        organization_id: &str,
        app_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<AppUser>> {
        let request = Request::builder(
            Method::Get,
            self.config
                .endpoint(&format!("{}/{app_id}/users", Self::apps_path(organization_id)))?,
        )
        .bearer_auth(&self.config.session_token)
        .query("page", &page.to_string())
        .query("per_page", &per_page.to_string())
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?.json()
    }

    /// Attach a user to an application by e-mail.
    pub async fn add_user(
        &self,
        organization_id: &str,
        app_id: &str,
        email: &str,
    ) -> Result<AppUser> {
        let request = Request::builder(
            Method::Post,
            self.config
                .endpoint(&format!("{}/{app_id}/users", Self::apps_path(organization_id)))?,
        )
        .bearer_auth(&self.config.session_token)
        .body_field("email", email)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<AppUser> = ensure_status(response, 201)?.json()?;
        Ok(data.data)
    }

    /// Detach a user from an application.
    pub async fn remove_user(
        &self,
        organization_id: &str,
        app_id: &str,
        app_user_id: &str,
    ) -> Result<()> {
        let request = Request::builder(
            Method::Delete,
            self.config.endpoint(&format!(
                "{}/{app_id}/users/{app_user_id}",
                Self::apps_path(organization_id)
            ))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 204)?;
        Ok(())
    }

    /// Issue a new token for an application.
    ///
    /// The token secret is only present in this response; subsequent
    /// reads return the token resource without it.
    pub async fn create_token(&self, organization_id: &str, app_id: &str) -> Result<AppToken> {
        let request = Request::builder(
            Method::Post,
            self.config.endpoint(&format!(
                "{}/{app_id}/tokens",
                Self::apps_path(organization_id)
            ))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<AppToken> = ensure_status(response, 201)?.json()?;
        Ok(data.data)
    }

    /// List an application's tokens.
    pub async fn list_tokens(
        &self,
        organization_id: &str,
        app_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<AppToken>> {
        let request = Request::builder(
            Method::Get,
            self.config.endpoint(&format!(
                "{}/{app_id}/tokens",
                Self::apps_path(organization_id)
            ))?,
        )
        .bearer_auth(&self.config.session_token)
        .query("page", &page.to_string())
        .query("per_page", &per_page.to_string())
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?.json()
    }

    /// Fetch a token resource by id.
    pub async fn find_token(
        &self,
        organization_id: &str,
        app_id: &str,
        id: &str,
    ) -> Result<AppToken> {
        let request = Request::builder(
            Method::Get,
            self.config.endpoint(&format!(
                "{}/{app_id}/tokens/{id}",
                Self::apps_path(organization_id)
            ))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<AppToken> = ensure_status(response, 200)?.json()?;
        Ok(data.data)
    }

    /// Revoke a token.
    pub async fn revoke_token(
        &self,
        organization_id: &str,
        app_id: &str,
        id: &str,
    ) -> Result<()> {
        let request = Request::builder(
            Method::Delete,
            self.config.endpoint(&format!(
                "{}/{app_id}/tokens/{id}",
                Self::apps_path(organization_id)
            ))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 204)?;
        Ok(())
    }
}
