//! Core types for the Letmein service client.
//!
//! This crate provides the foundational types used by the `letmein`
//! SDK crate:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - request assembly with the
//!   flat string body map
//! - [`BodyMap`] - the body map and its manual JSON rendering
//! - [`Response`] - raw status/headers/body response
//! - [`Error`], [`ErrorKind`], and [`Result`] - error handling and
//!   status-code classification
//! - [`HttpClient`] - the transport trait seam
//! - [`escape`] - quote escaping shared with the wire format

mod body;
mod client;
mod error;
pub mod escape;
mod method;
mod request;
mod response;

pub use body::{BodyMap, from_json};
pub use client::HttpClient;
pub use error::{Error, ErrorKind, Result};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
