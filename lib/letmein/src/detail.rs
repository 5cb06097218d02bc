//! Status check for the plain-detail error path.

use letmein_core::{Error, Response, Result};

/// Pass the response through when it has the expected status, otherwise
/// extract the `errors.detail` message from the body.
pub(crate) fn ensure_status(response: Response, expected: u16) -> Result<Response> {
    if response.status() == expected {
        Ok(response)
    } else {
        Err(Error::from_detail_body(response.status(), response.body()))
    }
}
