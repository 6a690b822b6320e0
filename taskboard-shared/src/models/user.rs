/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing
/// user accounts. Users own tasks transitively through the `links` table;
/// there is no direct foreign key from tasks to users.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     user_id BIGSERIAL PRIMARY KEY,
///     username TEXT NOT NULL UNIQUE,
///     password_hash TEXT NOT NULL,
///     email TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{User, CreateUser};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     username: "alice".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     email: "alice@example.com".to_string(),
/// }).await?;
///
/// let found = User::find_by_username(&pool, "alice").await?;
/// # Ok(())
/// # }
/// ```

use crate::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User model representing a user account
///
/// The password hash is an opaque string; hashing and verification are the
/// responsibility of an external credential service, never of this layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (generated by the database)
    pub user_id: i64,

    /// Username, unique across all users
    pub username: String,

    /// Opaque password hash
    pub password_hash: String,

    /// Email address
    pub email: String,

    /// When the account was created; set at insert, immutable
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Username (must be unique)
    pub username: String,

    /// Opaque password hash (never a plaintext password)
    pub password_hash: String,

    /// Email address
    pub email: String,
}

/// Input for updating an existing user
///
/// Updates replace all mutable fields; `user_id` and `created_at` are
/// immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New username
    pub username: String,

    /// New password hash
    pub password_hash: String,

    /// New email address
    pub email: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the username already exists
    /// (unique constraint violation) or the store is unreachable.
    pub async fn create(pool: &PgPool, data: CreateUser) -> RepositoryResult<Self> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, email)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, password_hash, email, created_at
            "#,
        )
        .bind(data.username)
        .bind(data.password_hash)
        .bind(data.email)
        .fetch_one(pool)
        .await
        .map_err(RepositoryError::database("user"))?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// Returns the user if found, None otherwise.
    pub async fn find_by_id(pool: &PgPool, user_id: i64) -> RepositoryResult<Option<Self>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, password_hash, email, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("user"))?;

        Ok(user)
    }

    /// Finds a user by username
    ///
    /// Returns the user if found, None otherwise.
    pub async fn find_by_username(pool: &PgPool, username: &str) -> RepositoryResult<Option<Self>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, password_hash, email, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("user"))?;

        Ok(user)
    }

    /// Updates an existing user
    ///
    /// Replaces username, password_hash and email. Returns the updated user
    /// if found, None if no user exists with the given id.
    pub async fn update(
        pool: &PgPool,
        user_id: i64,
        data: UpdateUser,
    ) -> RepositoryResult<Option<Self>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, password_hash = $3, email = $4
            WHERE user_id = $1
            RETURNING user_id, username, password_hash, email, created_at
            "#,
        )
        .bind(user_id)
        .bind(data.username)
        .bind(data.password_hash)
        .bind(data.email)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("user"))?;

        Ok(user)
    }

    /// Deletes a user by ID
    ///
    /// Returns the deleted row if the user existed, None otherwise. Links
    /// referencing the user are not cascaded; dangling link rows are an
    /// accepted consequence of deletion.
    pub async fn delete(pool: &PgPool, user_id: i64) -> RepositoryResult<Option<Self>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE user_id = $1
            RETURNING user_id, username, password_hash, email, created_at
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("user"))?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            username: "alice".to_string(),
            password_hash: "h1".to_string(),
            email: "a@x.com".to_string(),
        };

        assert_eq!(create_user.username, "alice");
        assert_eq!(create_user.password_hash, "h1");
    }

    #[test]
    fn test_user_serializes_created_at_with_timezone() {
        let user = User {
            user_id: 1,
            username: "alice".to_string(),
            password_hash: "h1".to_string(),
            email: "a@x.com".to_string(),
            created_at: "2024-10-11T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["created_at"], "2024-10-11T12:00:00Z");
    }

    // Integration tests for database operations are in tests/repository_tests.rs
}
