use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::users::repo::User;

/// Request body for user creation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Public part of the user returned to the client.
/// The password digest never appears here.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// Upper bound on a single page; larger requests are clamped.
pub const MAX_PAGE_SIZE: i64 = 500;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn response_serializes_without_digest() {
        let user = User {
            id: 1,
            email: "a@example.com".into(),
            full_name: "A".into(),
            hashed_password: "$argon2id$v=19$secret-digest".into(),
            created_at: datetime!(2024-02-10 10:00 UTC),
            updated_at: None,
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("a@example.com"));
        assert!(json.contains(r#""updated_at":null"#));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("hashed_password"));
    }

    #[test]
    fn response_uses_rfc3339_timestamps() {
        let user = User {
            id: 7,
            email: "b@example.com".into(),
            full_name: "B".into(),
            hashed_password: "digest".into(),
            created_at: datetime!(2024-02-10 10:00 UTC),
            updated_at: Some(datetime!(2024-03-01 12:30 UTC)),
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("2024-02-10T10:00:00Z"));
        assert!(json.contains("2024-03-01T12:30:00Z"));
    }

    #[test]
    fn pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn pagination_accepts_explicit_values() {
        let p: Pagination = serde_json::from_str(r#"{"skip": 20, "limit": 5}"#).unwrap();
        assert_eq!(p.skip, 20);
        assert_eq!(p.limit, 5);
    }
}
