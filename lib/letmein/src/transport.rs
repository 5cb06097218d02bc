//! HTTP transport implementation using hyper-util.

use std::collections::HashMap;
use std::time::Instant;

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use letmein_core::escape::escape_header_value;
use letmein_core::{Error, HttpClient, Request, Response, Result};
use tracing::debug;

use crate::config::TransportConfig;
use crate::connector::https_connector;

/// Pooled HTTP transport for the Letmein endpoints.
///
/// Cheap to clone; clones share the underlying connection pool. Every
/// request gets `content-type: application/json` and the fixed
/// per-request timeout from [`TransportConfig`]. No retries and no
/// redirect-policy override.
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: TransportConfig,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with custom configuration.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        let connector = https_connector();

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self { inner, config }
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Build a hyper request from a core request.
    ///
    /// The body map is serialized here, so an empty map still goes out
    /// as `{}`. Header values pass through [`escape_header_value`]
    /// before being set; the service expects them escaped the same way
    /// as body fields.
    fn build_http_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut http_request = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str())
            .body(Full::new(body.to_bytes()))
            .map_err(|e| Error::invalid_request(e.to_string()))?;

        let header_map = http_request.headers_mut();
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::invalid_request(format!("header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(&escape_header_value(value))
                .map_err(|e| Error::invalid_request(format!("header value for {name}: {e}")))?;
            header_map.insert(name, value);
        }

        Ok(http_request)
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for HyperTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let method = request.method();
        let url = request.url().clone();
        let http_request = Self::build_http_request(request)?;

        let start = Instant::now();
        let response = tokio::time::timeout(self.config.timeout, self.inner.request(http_request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        debug!(
            %method,
            %url,
            status,
            elapsed = ?start.elapsed(),
            "request executed"
        );

        Ok(Response::new(status, response_headers, body))
    }
}
