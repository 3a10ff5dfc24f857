use sqlx::{FromRow, PgConnection, PgPool};
use time::OffsetDateTime;

use crate::error::AppError;

/// User record in the database.
/// Deliberately not `Serialize`: the digest must never leave the process.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl User {
    /// Insert a new user. The store assigns `id` and `created_at`;
    /// the unique constraint on `email` turns a duplicate into `DuplicateEmail`
    /// atomically, with no read-then-write race.
    pub async fn insert(
        conn: &mut PgConnection,
        email: &str,
        full_name: &str,
        hashed_password: &str,
    ) -> Result<User, AppError> {
        let res = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, full_name, hashed_password)
            VALUES ($1, $2, $3)
            RETURNING id, email, full_name, hashed_password, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(full_name)
        .bind(hashed_password)
        .fetch_one(conn)
        .await;

        match res {
            Ok(user) => Ok(user),
            Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
                Err(AppError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find a user by id.
    pub async fn fetch_by_id(db: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, hashed_password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// List users in insertion (id) order. Stable across repeated calls
    /// against an unchanged data set; `limit = 0` yields an empty page.
    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, hashed_password, created_at, updated_at
            FROM users
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(db)
        .await
    }
}
