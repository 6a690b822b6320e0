/// Task model and database operations
///
/// This module provides the Task model and CRUD operations. A task carries
/// no owner column; ownership is derived by joining against the `links`
/// table (see [`crate::ownership`]). Priority and status are opaque
/// strings, not enumerated state machines.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     task_id BIGSERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     due_date DATE NOT NULL,
///     priority TEXT NOT NULL,
///     status TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{Task, CreateTask};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use chrono::NaiveDate;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// // Create a task and link it to its owner in one transaction
/// let task = Task::create_owned(&pool, CreateTask {
///     title: "Write report".to_string(),
///     description: "Quarterly summary".to_string(),
///     due_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
///     priority: "high".to_string(),
///     status: "todo".to_string(),
/// }, 42).await?;
///
/// let mine = Task::list_by_user(&pool, 42).await?;
/// # Ok(())
/// # }
/// ```

use crate::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (generated by the database)
    pub task_id: i64,

    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Calendar due date, serialized as `YYYY-MM-DD`
    ///
    /// Validated not-in-past at creation; not re-checked on update.
    pub due_date: NaiveDate,

    /// Priority, an opaque string (e.g. "low", "high")
    pub priority: String,

    /// Status, an opaque string (e.g. "todo", "done"); no transition graph
    /// is enforced
    pub status: String,

    /// When the task was created; set at insert, immutable
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Calendar due date
    pub due_date: NaiveDate,

    /// Priority string
    pub priority: String,

    /// Status string
    pub status: String,
}

/// Input for updating an existing task
///
/// Updates replace all mutable fields; `task_id` and `created_at` are
/// immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New description
    pub description: String,

    /// New due date (not re-validated against the current date)
    pub due_date: NaiveDate,

    /// New priority string
    pub priority: String,

    /// New status string
    pub status: String,
}

impl Task {
    /// Creates a new task in the database
    ///
    /// The task is independent of any user until linked.
    pub async fn create(pool: &PgPool, data: CreateTask) -> RepositoryResult<Self> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, due_date, priority, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING task_id, title, description, due_date, priority, status, created_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.due_date)
        .bind(data.priority)
        .bind(data.status)
        .fetch_one(pool)
        .await
        .map_err(RepositoryError::database("task"))?;

        Ok(task)
    }

    /// Creates a task and links it to its owner in a single transaction
    ///
    /// Inserts the task row and the owning link row atomically; a failure
    /// on either statement rolls back both, so no orphaned task can be
    /// left behind by a crash between the two inserts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either insert fails. The
    /// caller is responsible for verifying that `user_id` refers to an
    /// existing user.
    pub async fn create_owned(
        pool: &PgPool,
        data: CreateTask,
        user_id: i64,
    ) -> RepositoryResult<Self> {
        let mut tx = pool
            .begin()
            .await
            .map_err(RepositoryError::database("task"))?;

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, due_date, priority, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING task_id, title, description, due_date, priority, status, created_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.due_date)
        .bind(data.priority)
        .bind(data.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::database("task"))?;

        sqlx::query(
            r#"
            INSERT INTO links (task_id, user_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(task.task_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::database("link"))?;

        tx.commit()
            .await
            .map_err(RepositoryError::database("task"))?;

        Ok(task)
    }

    /// Finds a task by ID
    ///
    /// Returns the task if found, None otherwise.
    pub async fn find_by_id(pool: &PgPool, task_id: i64) -> RepositoryResult<Option<Self>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, title, description, due_date, priority, status, created_at
            FROM tasks
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("task"))?;

        Ok(task)
    }

    /// Lists all tasks linked to a user
    ///
    /// Joins tasks against the links table filtered by `user_id`, ordered
    /// by insertion. A user with no links yields an empty vector, not an
    /// error.
    pub async fn list_by_user(pool: &PgPool, user_id: i64) -> RepositoryResult<Vec<Self>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.task_id, t.title, t.description, t.due_date, t.priority,
                   t.status, t.created_at
            FROM tasks t
            INNER JOIN links l ON t.task_id = l.task_id
            WHERE l.user_id = $1
            ORDER BY t.task_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(RepositoryError::database("task"))?;

        Ok(tasks)
    }

    /// Updates an existing task
    ///
    /// Replaces all mutable fields. Returns the updated task if found,
    /// None if no task exists with the given id. Ownership is checked by
    /// the caller via [`crate::ownership::ensure_task_owner`] before this
    /// runs.
    pub async fn update(
        pool: &PgPool,
        task_id: i64,
        data: UpdateTask,
    ) -> RepositoryResult<Option<Self>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, due_date = $4, priority = $5, status = $6
            WHERE task_id = $1
            RETURNING task_id, title, description, due_date, priority, status, created_at
            "#,
        )
        .bind(task_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.due_date)
        .bind(data.priority)
        .bind(data.status)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("task"))?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// Returns the deleted row if the task existed, None otherwise. Link
    /// rows referencing the task are not removed automatically.
    pub async fn delete(pool: &PgPool, task_id: i64) -> RepositoryResult<Option<Self>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            DELETE FROM tasks
            WHERE task_id = $1
            RETURNING task_id, title, description, due_date, priority, status, created_at
            "#,
        )
        .bind(task_id)
        .fetch_optional(pool)
        .await
        .map_err(RepositoryError::database("task"))?;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_due_date_as_iso_date() {
        let task = Task {
            task_id: 1,
            title: "T1".to_string(),
            description: "d".to_string(),
            due_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            priority: "low".to_string(),
            status: "todo".to_string(),
            created_at: "2024-10-11T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["due_date"], "2099-01-01");
        assert_eq!(json["created_at"], "2024-10-11T12:00:00Z");
    }

    #[test]
    fn test_create_task_deserializes_date_string() {
        let data: CreateTask = serde_json::from_str(
            r#"{
                "title": "T1",
                "description": "d",
                "due_date": "2099-01-01",
                "priority": "low",
                "status": "todo"
            }"#,
        )
        .unwrap();

        assert_eq!(data.due_date, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
    }

    // Integration tests for database operations are in tests/repository_tests.rs
}
