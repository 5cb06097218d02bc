//! Client and service configuration types.

use std::time::Duration;

use letmein_core::Result;

/// Configuration for the HTTP transport.
///
/// One timeout policy applies to every endpoint. The service's
/// endpoints are all short-lived request/response calls, so there is no
/// per-endpoint override.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout duration.
    pub timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl TransportConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }
}

/// Builder for [`TransportConfig`].
#[derive(Debug, Clone, Default)]
pub struct TransportConfigBuilder {
    timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl TransportConfigBuilder {
    /// Set the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> TransportConfig {
        let defaults = TransportConfig::default();
        TransportConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
        }
    }
}

/// Which flavor of the Letmein service an application talks to.
///
/// Admin services get an `/admin` segment in every endpoint path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceKind {
    /// Regular end-user service.
    #[default]
    Regular,
    /// Administrative service.
    Admin,
}

impl ServiceKind {
    /// Normalize a free-form service type string.
    ///
    /// Only a case-insensitive `"admin"` selects the admin service;
    /// everything else is the regular service.
    #[must_use]
    pub fn parse(service_type: &str) -> Self {
        if service_type.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::Regular
        }
    }

    /// Path segment contributed by the service kind.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Regular => "",
            Self::Admin => "/admin",
        }
    }
}

/// Configuration for session and account endpoints.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Which service flavor to address.
    pub service: ServiceKind,
    /// Base URL of the Letmein service, without the `/rest` prefix.
    pub base_url: String,
    /// Application token sent on unauthenticated calls.
    pub app_token: String,
}

impl AuthConfig {
    /// Create a config from a free-form service type string.
    #[must_use]
    pub fn new(service_type: &str, base_url: &str, app_token: &str) -> Self {
        Self {
            service: ServiceKind::parse(service_type),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_token: app_token.to_string(),
        }
    }

    /// Full endpoint URL for a path under the REST root.
    pub(crate) fn endpoint(&self, path: &str) -> Result<url::Url> {
        let url = format!(
            "{}/rest{}{path}",
            self.base_url,
            self.service.path_segment()
        );
        Ok(url.parse()?)
    }
}

/// Configuration for administrative resource endpoints.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the Letmein service, without the `/rest/admin` prefix.
    pub base_url: String,
    /// Session token of an administrative user.
    pub session_token: String,
}

impl AdminConfig {
    /// Create an admin config.
    #[must_use]
    pub fn new(base_url: &str, session_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token: session_token.to_string(),
        }
    }

    /// Full endpoint URL for a path under the admin REST root.
    pub(crate) fn endpoint(&self, path: &str) -> Result<url::Url> {
        let url = format!("{}/rest/admin{path}", self.base_url);
        Ok(url.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transport_config() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.pool_idle_per_host, 32);
    }

    #[test]
    fn builder_overrides() {
        let config = TransportConfig::builder()
            .timeout(Duration::from_secs(30))
            .pool_idle_per_host(8)
            .build();

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.pool_idle_per_host, 8);
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(90));
    }

    #[test]
    fn service_kind_normalization() {
        assert_eq!(ServiceKind::parse("admin"), ServiceKind::Admin);
        assert_eq!(ServiceKind::parse("ADMIN"), ServiceKind::Admin);
        assert_eq!(ServiceKind::parse("Admin"), ServiceKind::Admin);
        assert_eq!(ServiceKind::parse("regular"), ServiceKind::Regular);
        assert_eq!(ServiceKind::parse(""), ServiceKind::Regular);
        assert_eq!(ServiceKind::parse("anything"), ServiceKind::Regular);
    }

    #[test]
    fn auth_endpoint_regular() {
        let config = AuthConfig::new("", "https://id.example.com/", "tok");
        let url = config.endpoint("/sessions").expect("url");
        assert_eq!(url.as_str(), "https://id.example.com/rest/sessions");
    }

    #[test]
    fn auth_endpoint_admin() {
        let config = AuthConfig::new("admin", "https://id.example.com", "tok");
        let url = config.endpoint("/sessions/signed_in").expect("url");
        assert_eq!(
            url.as_str(),
            "https://id.example.com/rest/admin/sessions/signed_in"
        );
    }

    #[test]
    fn admin_endpoint() {
        let config = AdminConfig::new("https://id.example.com", "tok");
        let url = config.endpoint("/organizations/42").expect("url");
        assert_eq!(
            url.as_str(),
            "https://id.example.com/rest/admin/organizations/42"
        );
    }
}
