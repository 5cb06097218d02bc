//! Quote escaping for wire values.
//!
//! The Letmein service receives body fields and header values with
//! embedded double quotes prefixed by a backslash. Nothing else is
//! escaped: backslashes, control characters, and non-ASCII pass through
//! untouched. That is a documented limitation of the wire format, not a
//! feature of this crate.
//!
//! Body and header escaping are separate functions even though they
//! currently do the same thing, so the header rules can diverge without
//! touching body serialization.

/// Escape a body field value: `"` becomes `\"`.
#[must_use]
pub fn escape_body_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Escape a header value before it is set on the outgoing request.
///
/// Same transformation as [`escape_body_value`]. The service expects
/// header values quote-escaped like body fields.
#[must_use]
pub fn escape_header_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_double_quotes() {
        assert_eq!(escape_body_value(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn leaves_other_characters_alone() {
        assert_eq!(escape_body_value("O'Brien & Söhne\\n"), "O'Brien & Söhne\\n");
        assert_eq!(escape_body_value(""), "");
    }

    #[test]
    fn header_escape_matches_body_escape() {
        let value = r#"Bearer "tok""#;
        assert_eq!(escape_header_value(value), escape_body_value(value));
    }
}
