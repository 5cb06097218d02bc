//! Organization CRUD and admin-user membership.

use letmein_core::{HttpClient, Method, Request, Result};

use crate::admin::ensure_status;
use crate::config::AdminConfig;
use crate::entities::{AdminUser, Data, Organization, Paginated};
use crate::transport::HyperTransport;

/// Client for `/rest/admin/organizations`.
#[derive(Debug, Clone)]
pub struct OrganizationsApi<C = HyperTransport> {
    config: AdminConfig,
    client: C,
}

impl OrganizationsApi<HyperTransport> {
    /// Create an organizations client with the default transport.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self::with_client(config, HyperTransport::new())
    }
}

impl<C: HttpClient> OrganizationsApi<C> {
    /// Create an organizations client over a custom transport.
    pub fn with_client(config: AdminConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Create an organization.
    pub async fn create(&self, name: &str, description: &str) -> Result<Organization> {
        let request = Request::builder(Method::Post, self.config.endpoint("/organizations")?)
            .bearer_auth(&self.config.session_token)
            .body_field("name", name)
            .body_field("description", description)
            .build();

        let response = self.client.execute(request).await?;
        let data: Data<Organization> = ensure_status(response, 201)?.json()?;
        Ok(data.data)
    }

    /// Fetch an organization by id.
    pub async fn find(&self, id: &str) -> Result<Organization> {
        let request = Request::builder(
            Method::Get,
            self.config.endpoint(&format!("/organizations/{id}"))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<Organization> = ensure_status(response, 200)?.json()?;
        Ok(data.data)
    }

    /// Replace an organization's attributes.
    pub async fn update(&self, organization: &Organization) -> Result<Organization> {
        let request = Request::builder(
            Method::Put,
            self.config
                .endpoint(&format!("/organizations/{}", organization.id))?,
        )
        .bearer_auth(&self.config.session_token)
        .body_field("name", &organization.name)
        .body_field("description", &organization.description)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<Organization> = ensure_status(response, 200)?.json()?;
        Ok(data.data)
    }

    /// Delete an organization.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let request = Request::builder(
            Method::Delete,
            self.config.endpoint(&format!("/organizations/{id}"))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 204)?;
        Ok(())
    }

    /// List organizations, one page at a time.
    pub async fn list(&self, page: u32, per_page: u32) -> Result<Paginated<Organization>> {
        let request = Request::builder(Method::Get, self.config.endpoint("/organizations")?)
            .bearer_auth(&self.config.session_token)
            .query("page", &page.to_string())
            .query("per_page", &per_page.to_string())
            .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?.json()
    }

    /// List the administrative users of an organization.
    pub async fn list_admin_users(
        &self,
        organization_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<AdminUser>> {
        let request = Request::builder(
            Method::Get,
            self.config
                .endpoint(&format!("/organizations/{organization_id}/admin_users"))?,
        )
        .bearer_auth(&self.config.session_token)
        .query("page", &page.to_string())
        .query("per_page", &per_page.to_string())
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 200)?.json()
    }

    /// Attach an administrative user to an organization by e-mail.
    pub async fn add_admin_user(&self, organization_id: &str, email: &str) -> Result<AdminUser> {
        let request = Request::builder(
            Method::Post,
            self.config
                .endpoint(&format!("/organizations/{organization_id}/admin_users"))?,
        )
        .bearer_auth(&self.config.session_token)
        .body_field("email", email)
        .build();

        let response = self.client.execute(request).await?;
        let data: Data<AdminUser> = ensure_status(response, 201)?.json()?;
        Ok(data.data)
    }

    /// Detach an administrative user from an organization.
    pub async fn remove_admin_user(
        &self,
        organization_id: &str,
        admin_user_id: &str,
    ) -> Result<()> {
        let request = Request::builder(
            Method::Delete,
            self.config.endpoint(&format!(
                "/organizations/{organization_id}/admin_users/{admin_user_id}"
            ))?,
        )
        .bearer_auth(&self.config.session_token)
        .build();

        let response = self.client.execute(request).await?;
        ensure_status(response, 204)?;
        Ok(())
    }
}
