/// Repository error type
///
/// This module defines the single error type produced by the repository
/// layer (`models`) and the ownership/integrity guard (`ownership`). Raw
/// sqlx errors never cross the repository boundary; every store failure is
/// wrapped as `RepositoryError::Database` carrying the name of the entity
/// whose query failed.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::error::RepositoryError;
/// use taskboard_shared::models::user::User;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), RepositoryError> {
/// let user = User::find_by_id(&pool, 42)
///     .await?
///     .ok_or(RepositoryError::NotFound { entity: "user" })?;
/// # Ok(())
/// # }
/// ```

use thiserror::Error;

/// Repository result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors produced by the repository layer and the ownership guard
///
/// The API server maps these onto HTTP status codes:
/// `Validation` → 400, `NotAuthorized` → 403, `NotFound` → 404,
/// `DuplicateLink` → 409, `Database` → 500.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Malformed or out-of-range input (e.g. a past due date)
    #[error("invalid {field}: {message}")]
    Validation {
        /// Field that failed validation
        field: &'static str,

        /// Human-readable cause
        message: String,
    },

    /// The referenced entity does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Entity name ("user", "task", "link")
        entity: &'static str,
    },

    /// The requesting user is not the linked owner of the task
    #[error("user {user_id} is not an owner of task {task_id}")]
    NotAuthorized {
        /// Task being mutated
        task_id: i64,

        /// User attempting the mutation
        user_id: i64,
    },

    /// A link row for this (task, user) pair already exists
    #[error("task {task_id} is already linked to user {user_id}")]
    DuplicateLink {
        /// Task side of the pair
        task_id: i64,

        /// User side of the pair
        user_id: i64,
    },

    /// Any other store-layer failure (constraint violation, connectivity
    /// loss, malformed parameter)
    #[error("{entity} query failed: {source}")]
    Database {
        /// Entity whose query failed
        entity: &'static str,

        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },
}

impl RepositoryError {
    /// Returns a closure wrapping an sqlx error with the given entity name,
    /// for use with `map_err` at repository call sites.
    pub fn database(entity: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| RepositoryError::Database { entity, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RepositoryError::NotFound { entity: "task" };
        assert_eq!(err.to_string(), "task not found");
    }

    #[test]
    fn test_duplicate_link_display() {
        let err = RepositoryError::DuplicateLink {
            task_id: 7,
            user_id: 3,
        };
        assert_eq!(err.to_string(), "task 7 is already linked to user 3");
    }

    #[test]
    fn test_not_authorized_display() {
        let err = RepositoryError::NotAuthorized {
            task_id: 1,
            user_id: 2,
        };
        assert_eq!(err.to_string(), "user 2 is not an owner of task 1");
    }

    #[test]
    fn test_database_wraps_entity_name() {
        let err = RepositoryError::database("user")(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("user query failed"));
    }
}
