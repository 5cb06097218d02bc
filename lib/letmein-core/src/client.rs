//! HTTP client trait.
//!
//! [`HttpClient`] is the seam between the pure request/response types
//! and the actual network transport. The resource APIs in the runtime
//! crate are generic over it, which is also how tests swap in a
//! transport pointed at a local mock server.

use std::future::Future;

use crate::{Request, Response, Result};

/// Executes built requests over the wire.
///
/// Implementations must be safe for concurrent use: independent calls
/// may run in parallel from multiple callers with no coordination
/// beyond the underlying pooled connection state.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures: request
    /// construction, connection or TLS problems, timeouts, or a failed
    /// body read. A non-2xx HTTP status is an `Ok` response, never an
    /// error.
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}
