/// Link model and database operations
///
/// This module provides the TaskLink model: the many-to-many association
/// between tasks and users that defines task ownership. Uniqueness of the
/// (task_id, user_id) pair is deliberately not enforced by a database
/// constraint; the ownership guard checks it before every insert (see
/// [`crate::ownership::ensure_unique_link`]).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE links (
///     task_id BIGINT NOT NULL,
///     user_id BIGINT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::link::{TaskLink, CreateTaskLink};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let link = TaskLink::create(&pool, CreateTaskLink {
///     task_id: 7,
///     user_id: 42,
/// }).await?;
/// # Ok(())
/// # }
/// ```

use crate::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Link model tying one task to one user
///
/// Links are never updated; there is no delete endpoint, so tasks can
/// dangle after their owner is removed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskLink {
    /// Task side of the association
    pub task_id: i64,

    /// User side of the association
    pub user_id: i64,

    /// When the link was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskLink {
    /// Task to attach
    pub task_id: i64,

    /// Owning user
    pub user_id: i64,
}

impl TaskLink {
    /// Creates a new link (attaches a task to a user)
    ///
    /// This is a plain insert. Callers enforce pair uniqueness via
    /// [`crate::ownership::ensure_unique_link`] first; the table carries
    /// no unique constraint of its own.
    pub async fn create(pool: &PgPool, data: CreateTaskLink) -> RepositoryResult<Self> {
        let link = sqlx::query_as::<_, TaskLink>(
            r#"
            INSERT INTO links (task_id, user_id)
            VALUES ($1, $2)
            RETURNING task_id, user_id, created_at
            "#,
        )
        .bind(data.task_id)
        .bind(data.user_id)
        .fetch_one(pool)
        .await
        .map_err(RepositoryError::database("link"))?;

        Ok(link)
    }

    /// Finds a specific link by task and user
    ///
    /// Returns the link if found, None otherwise.
    pub async fn find(
        pool: &PgPool,
        task_id: i64,
        user_id: i64,
    ) -> RepositoryResult<Option<Self>> {
        let link = sqlx::query_as::<_, TaskLink>(
            r#"
            SELECT task_id, user_id, created_at
            FROM links
            WHERE task_id = $1 AND user_id = $2
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("link"))?;

        Ok(link)
    }

    /// Checks whether a link exists for the (task, user) pair
    pub async fn exists(pool: &PgPool, task_id: i64, user_id: i64) -> RepositoryResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM links
                WHERE task_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(RepositoryError::database("link"))?;

        Ok(exists)
    }

    /// Lists the user ids linked to a task
    ///
    /// Ordered by link creation. An unlinked task yields an empty vector.
    pub async fn owners_of(pool: &PgPool, task_id: i64) -> RepositoryResult<Vec<i64>> {
        let owners: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT user_id
            FROM links
            WHERE task_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(task_id)
        .fetch_all(pool)
        .await
        .map_err(RepositoryError::database("link"))?;

        Ok(owners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_link_deserializes() {
        let data: CreateTaskLink =
            serde_json::from_str(r#"{"task_id": 7, "user_id": 42}"#).unwrap();
        assert_eq!(data.task_id, 7);
        assert_eq!(data.user_id, 42);
    }

    // Integration tests for database operations are in tests/repository_tests.rs
}
