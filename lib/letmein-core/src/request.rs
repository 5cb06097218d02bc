//! HTTP request building.
//!
//! Use [`Request::builder`] to assemble method, URL, headers, and the
//! flat body map before handing the request to a transport.
//!
//! # Example
//!
//! ```
//! use letmein_core::{Method, Request};
//!
//! let url = "https://letmein.example.com/rest/admin/organizations"
//!     .parse()
//!     .unwrap();
//! let request = Request::builder(Method::Post, url)
//!     .bearer_auth("session-token")
//!     .body_field("name", "My Organization")
//!     .build();
//! ```
//!
//! A request is built once, executed once, and never reused. The
//! builder is consumed by [`RequestBuilder::build`], so there is no
//! shared mutable state to protect: accumulation happens on an owned
//! value.

use std::collections::HashMap;

use crate::{BodyMap, Method};

/// An HTTP request with method, URL, headers, and a flat body map.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: BodyMap,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body map.
    #[must_use]
    pub const fn body(&self) -> &BodyMap {
        &self.body
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, BodyMap) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: BodyMap,
}

impl RequestBuilder {
    /// Creates a new builder with no headers and an empty body map.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: BodyMap::new(),
        }
    }

    /// Sets a header. Last write wins; the key is taken as-is, casing
    /// included.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the `Authorization: Bearer <token>` header.
    #[must_use]
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Inserts or overwrites a body field. Values are strings only;
    /// pre-stringify anything numeric or boolean.
    #[must_use]
    pub fn body_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.body.insert(key, value);
        self
    }

    /// Appends a query parameter to the URL.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> url::Url {
        format!("https://letmein.example.com{path}")
            .parse()
            .expect("valid URL")
    }

    #[test]
    fn builder_starts_empty() {
        let request = Request::builder(Method::Get, url("/rest/sessions")).build();
        assert_eq!(request.method(), Method::Get);
        assert!(request.headers().is_empty());
        assert!(request.body().is_empty());
    }

    #[test]
    fn builder_accumulates_headers_and_body() {
        let request = Request::builder(Method::Post, url("/rest/admin/organizations"))
            .header("Authorization", "Bearer tok")
            .body_field("name", r#"O'Brien "Inc""#)
            .build();

        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        assert_eq!(request.body().render(), r#"{"name": "O'Brien \"Inc\""}"#);
    }

    #[test]
    fn header_last_write_wins() {
        let request = Request::builder(Method::Get, url("/"))
            .header("app-token", "first")
            .header("app-token", "second")
            .build();
        assert_eq!(request.header("app-token"), Some("second"));
    }

    #[test]
    fn bearer_auth_sets_authorization() {
        let request = Request::builder(Method::Get, url("/rest/sessions"))
            .bearer_auth("abc123")
            .build();
        assert_eq!(request.header("Authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn query_appends_pairs() {
        let request = Request::builder(Method::Get, url("/rest/admin/organizations"))
            .query("page", "2")
            .query("per_page", "25")
            .build();
        assert_eq!(
            request.url().as_str(),
            "https://letmein.example.com/rest/admin/organizations?page=2&per_page=25"
        );
    }
}
