//! Data types returned by the Letmein service.

use serde::Deserialize;

/// Wrapper for the service's `{"data": ...}` success envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Data<T> {
    /// The wrapped payload.
    pub data: T,
}

/// A page of resources with its pagination descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    /// Resources on this page.
    pub data: Vec<T>,
    /// Pagination descriptor.
    pub pagination: Pagination,
}

/// Pagination descriptor attached to list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    /// Total number of resources.
    pub count: u64,
    /// First page number.
    pub first: u32,
    /// Last page number.
    pub last: u32,
    /// Next page number, if any.
    pub next: Option<u32>,
    /// Previous page number, if any.
    pub prev: Option<u32>,
    /// Current page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Page link series as rendered by the service.
    pub serie: Vec<String>,
}

/// An end user of an application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Resource id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Whether the account is active.
    pub active: bool,
    /// Preferred language.
    pub language: String,
    /// Preferred timezone.
    pub timezone: String,
}

/// An organization managed through the admin service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Organization {
    /// Resource id.
    pub id: String,
    /// Organization name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// An application registered under an organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct App {
    /// Resource id.
    pub id: String,
    /// Application name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// Name and e-mail of a member referenced by a membership resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
}

/// An administrative user attached to an organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminUser {
    /// Membership id.
    pub id: String,
    /// The member's identity.
    pub user: Member,
}

/// A user attached to an application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppUser {
    /// Membership id.
    pub id: String,
    /// The member's identity.
    pub user: Member,
}

/// An access token issued for an application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppToken {
    /// Resource id.
    pub id: String,
    /// Owning application id.
    pub app_id: String,
    /// Token secret; only present right after creation.
    pub token: Option<String>,
    /// Revocation timestamp, if revoked.
    pub revoked_at: Option<String>,
    /// Who revoked the token, if revoked.
    pub revoked_by: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Session token envelope returned by sign-in and refresh.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SessionToken {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_envelope_deserializes() {
        let body = r#"{"data": {"id": "1", "name": "Org", "description": "Desc"}}"#;
        let data: Data<Organization> = serde_json::from_str(body).expect("deserialize");
        assert_eq!(data.data.id, "1");
        assert_eq!(data.data.name, "Org");
    }

    #[test]
    fn paginated_envelope_deserializes() {
        let body = r#"{
            "data": [{"id": "1", "name": "Org", "description": ""}],
            "pagination": {
                "count": 1, "first": 1, "last": 1,
                "next": null, "prev": null,
                "page": 1, "per_page": 25, "serie": ["1"]
            }
        }"#;
        let page: Paginated<Organization> = serde_json::from_str(body).expect("deserialize");
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.count, 1);
        assert_eq!(page.pagination.next, None);
    }

    #[test]
    fn user_deserializes() {
        let body = r#"{
            "id": "u1", "name": "Alice", "email": "alice@example.com",
            "active": true, "language": "en", "timezone": "UTC"
        }"#;
        let user: User = serde_json::from_str(body).expect("deserialize");
        assert!(user.active);
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn app_token_optional_fields() {
        let body = r#"{
            "id": "t1", "app_id": "a1", "token": null,
            "revoked_at": "2024-01-01T00:00:00Z", "revoked_by": "admin",
            "created_at": "2023-01-01T00:00:00Z"
        }"#;
        let token: AppToken = serde_json::from_str(body).expect("deserialize");
        assert!(token.token.is_none());
        assert_eq!(token.revoked_by.as_deref(), Some("admin"));
    }
}
