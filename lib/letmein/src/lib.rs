//! Client SDK for the Letmein authentication and identity service.
//!
//! Every endpoint rides one pipeline: a [`Request`] assembled with the
//! builder, executed by the pooled [`HyperTransport`], and checked
//! against the single success status that endpoint expects. Failures
//! come back as [`Error`] values: status-classified for the admin
//! resources, plain-detail messages for session and account calls, and
//! transport variants when the request never completed.
//!
//! # Example
//!
//! ```ignore
//! use letmein::{AuthConfig, SessionApi};
//!
//! let config = AuthConfig::new("regular", "https://id.example.com", "app-token");
//! let sessions = SessionApi::new(config);
//!
//! let token = sessions.sign_in("user@example.com", "secret").await?;
//! let user = sessions.current_user(&token).await?;
//! println!("signed in as {}", user.name);
//! ```

mod account;
pub mod admin;
mod config;
mod connector;
mod detail;
pub mod entities;
mod session;
mod transport;

pub use account::AccountApi;
pub use config::{AdminConfig, AuthConfig, ServiceKind, TransportConfig, TransportConfigBuilder};
pub use session::SessionApi;
pub use transport::HyperTransport;

// Re-export core types
pub use letmein_core::{
    BodyMap, Error, ErrorKind, HttpClient, Method, Request, RequestBuilder, Response, Result,
    from_json,
};

// Re-export http types for status codes and headers
pub use letmein_core::{StatusCode, header};
