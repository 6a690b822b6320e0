/// Ownership and integrity checks
///
/// Two invariants live here rather than in the database schema:
///
/// 1. **Link uniqueness**: at most one `links` row per (task_id, user_id)
///    pair, checked with a query before every insert.
/// 2. **Task ownership on mutation**: a task may only be updated by a user
///    the links table names as its owner. Ownership is always derived by
///    querying the join, never cached on the task row.
///
/// Due-date validation also lives here: a task's due date must parse as an
/// ISO calendar date and must not lie in the past at creation time. It is
/// evaluated once per insertion and not re-checked on update.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::ownership::{ensure_task_owner, ensure_unique_link};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), taskboard_shared::error::RepositoryError> {
/// // Fails with DuplicateLink if the pair already exists
/// ensure_unique_link(&pool, 7, 42).await?;
///
/// // Fails with NotFound or NotAuthorized unless user 42 owns task 7
/// ensure_task_owner(&pool, 7, 42).await?;
/// # Ok(())
/// # }
/// ```

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::link::TaskLink;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use tracing::debug;

/// Ensures no link exists yet for the (task, user) pair
///
/// # Errors
///
/// Returns `RepositoryError::DuplicateLink` if a row for the pair already
/// exists. The check-then-insert is not atomic; a concurrent insert between
/// the two statements can still produce a duplicate, which is the accepted
/// behavior of this layer.
pub async fn ensure_unique_link(
    pool: &PgPool,
    task_id: i64,
    user_id: i64,
) -> RepositoryResult<()> {
    if TaskLink::exists(pool, task_id, user_id).await? {
        debug!(task_id, user_id, "Duplicate link rejected");
        return Err(RepositoryError::DuplicateLink { task_id, user_id });
    }
    Ok(())
}

/// Ensures the requesting user is a linked owner of the task
///
/// Queries the links table for the task's owners:
/// - no link rows → `RepositoryError::NotFound` (the task has no owner on
///   record, so there is nothing the requester may mutate)
/// - rows exist but none match `user_id` → `RepositoryError::NotAuthorized`
///
/// # Errors
///
/// `NotFound`, `NotAuthorized`, or `Database` on a store failure.
pub async fn ensure_task_owner(
    pool: &PgPool,
    task_id: i64,
    user_id: i64,
) -> RepositoryResult<()> {
    let owners = TaskLink::owners_of(pool, task_id).await?;

    if owners.is_empty() {
        return Err(RepositoryError::NotFound { entity: "task" });
    }

    if !owners.contains(&user_id) {
        debug!(task_id, user_id, "Ownership check failed");
        return Err(RepositoryError::NotAuthorized { task_id, user_id });
    }

    Ok(())
}

/// Parses and validates a task due date
///
/// Accepts an ISO `YYYY-MM-DD` string. The parsed date must not be strictly
/// earlier than the current date at evaluation time.
///
/// # Errors
///
/// Returns `RepositoryError::Validation` on unparseable input or a past
/// date.
pub fn validate_due_date(raw: &str) -> RepositoryResult<NaiveDate> {
    parse_due_date(raw, Utc::now().date_naive())
}

/// Validation against an explicit "today", separated out for testability
fn parse_due_date(raw: &str, today: NaiveDate) -> RepositoryResult<NaiveDate> {
    let due_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        RepositoryError::Validation {
            field: "due_date",
            message: format!("expected YYYY-MM-DD, got {raw:?} ({e})"),
        }
    })?;

    if due_date < today {
        return Err(RepositoryError::Validation {
            field: "due_date",
            message: format!("due date {due_date} is in the past"),
        });
    }

    Ok(due_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 11).unwrap()
    }

    #[test]
    fn test_future_due_date_is_accepted() {
        let date = parse_due_date("2099-01-01", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
    }

    #[test]
    fn test_today_is_accepted() {
        let date = parse_due_date("2024-10-11", today()).unwrap();
        assert_eq!(date, today());
    }

    #[test]
    fn test_past_due_date_is_rejected() {
        let err = parse_due_date("2000-01-01", today()).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Validation { field: "due_date", .. }
        ));
    }

    #[test]
    fn test_garbage_due_date_is_rejected() {
        for raw in ["not-a-date", "2024-13-01", "01/02/2024", ""] {
            let err = parse_due_date(raw, today()).unwrap_err();
            assert!(
                matches!(err, RepositoryError::Validation { field: "due_date", .. }),
                "expected validation error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_validate_due_date_uses_current_date() {
        // Far future always passes regardless of the actual clock
        assert!(validate_due_date("2099-12-31").is_ok());
        // Far past always fails
        assert!(validate_due_date("1999-01-01").is_err());
    }

    // Integration tests for the pool-backed checks are in tests/repository_tests.rs
}
