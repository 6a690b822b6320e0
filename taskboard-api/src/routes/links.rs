/// Link endpoints
///
/// Explicit task-to-user linking. Creation checks that both sides of the
/// pair exist and that no link row for the pair exists yet (best-effort;
/// the checks and the insert are separate statements).
///
/// # Endpoints
///
/// - `POST /links` - Link a task to a user
/// - `GET /links/tasks-by-user/{user_id}` - List tasks linked to a user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::link::{CreateTaskLink, TaskLink};
use taskboard_shared::models::task::Task;
use taskboard_shared::models::user::User;
use taskboard_shared::ownership::ensure_unique_link;
use tracing::debug;

/// Link creation request body
#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    /// Task to attach
    pub task_id: i64,

    /// Owning user
    pub user_id: i64,
}

/// Link a task to a user
///
/// # Endpoint
///
/// ```text
/// POST /links
/// Content-Type: application/json
///
/// {
///   "task_id": 7,
///   "user_id": 42
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Task or user does not exist
/// - `409 Conflict`: The pair is already linked
/// - `500 Internal Server Error`: Store failure
pub async fn create_link(
    State(state): State<AppState>,
    Json(req): Json<LinkRequest>,
) -> ApiResult<Json<TaskLink>> {
    // Both sides must exist before linking
    Task::find_by_id(&state.db, req.task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Task with ID {} not found", req.task_id)))?;

    User::find_by_id(&state.db, req.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User with ID {} not found", req.user_id)))?;

    ensure_unique_link(&state.db, req.task_id, req.user_id).await?;

    let link = TaskLink::create(
        &state.db,
        CreateTaskLink {
            task_id: req.task_id,
            user_id: req.user_id,
        },
    )
    .await?;

    debug!(task_id = req.task_id, user_id = req.user_id, "Link created");
    Ok(Json(link))
}

/// List tasks linked to a user
///
/// Same join as `GET /tasks/fetch/{user_id}`; an unlinked user yields an
/// empty list.
pub async fn tasks_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_user(&state.db, user_id).await?;
    Ok(Json(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_request_deserializes() {
        let req: LinkRequest = serde_json::from_str(r#"{"task_id": 7, "user_id": 42}"#).unwrap();
        assert_eq!(req.task_id, 7);
        assert_eq!(req.user_id, 42);
    }
}
