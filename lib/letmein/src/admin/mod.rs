//! Administrative resource APIs.
//!
//! These endpoints report failures through status classification
//! ([`letmein_core::ErrorKind`]): callers branch on the kind with a
//! plain equality or pattern check, and the raw body stays attached for
//! diagnostics.

mod apps;
mod organizations;

pub use apps::AppsApi;
pub use organizations::OrganizationsApi;

use letmein_core::{Error, Response, Result};

/// Pass the response through when it has the expected status, otherwise
/// classify the status code and keep the raw body.
pub(crate) fn ensure_status(response: Response, expected: u16) -> Result<Response> {
    if response.status() == expected {
        Ok(response)
    } else {
        let status = response.status();
        Err(Error::classified(status, response.into_body()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use letmein_core::ErrorKind;
    use std::collections::HashMap;

    #[test]
    fn passes_expected_status_through() {
        let response = Response::new(201, HashMap::new(), Bytes::from("created"));
        assert!(ensure_status(response, 201).is_ok());
    }

    #[test]
    fn classifies_unexpected_status() {
        let body = Bytes::from(r#"{"errors": {"name": ["can't be blank"]}}"#);
        let response = Response::new(422, HashMap::new(), body.clone());
        let err = ensure_status(response, 201).expect_err("unexpected status");
        assert_eq!(err.kind(), Some(ErrorKind::UnprocessableEntity));
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.body(), Some(&body));
    }
}
