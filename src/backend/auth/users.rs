/**
 * User Model and Database Operations
 * 
 * This module is the interface to the credential store: a persistent
 * mapping from email to a salted password hash, backed by the `users`
 * table in PostgreSQL.
 * 
 * Identities are created by the seed binary only. The HTTP surface
 * performs a single read (find by email) during login, plus a find-by-id
 * for the current-user endpoint.
 * 
 * # Email Normalization
 * 
 * Emails are lowercased both at write time and at lookup, so matching is
 * case-insensitive by construction rather than left to store collation.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User struct representing an identity in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID); the stable reference carried in session tokens
    pub id: uuid::Uuid,
    /// User email address (unique, stored lowercase)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Get user by email
/// 
/// This is the one read the authentication flow performs. The input email
/// is normalized the same way as at write time.
/// 
/// # Returns
/// 
/// User or None if not found
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn find_user_by_id(
    pool: &PgPool,
    id: uuid::Uuid,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Create a new user
/// 
/// Used only by the seed binary and test fixtures. The unique index on
/// `email` enforces at most one identity per address.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(normalize_email(email))
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Create a user, or replace the password hash if the email already exists
/// 
/// Re-running the seed with the same email updates the credential instead
/// of failing, which makes seeding idempotent.
pub async fn upsert_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email)
        DO UPDATE SET password_hash = EXCLUDED.password_hash, updated_at = EXCLUDED.updated_at
        RETURNING id, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(normalize_email(email))
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases() {
        assert_eq!(normalize_email("Admin@Example.COM"), "admin@example.com");
    }

    #[test]
    fn test_normalize_email_trims() {
        assert_eq!(normalize_email("  a@b.com "), "a@b.com");
    }
}
