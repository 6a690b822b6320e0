/// Task endpoints
///
/// Task creation links the new task to its owner inside one transaction;
/// task updates are permitted only for the linked owner, verified against
/// the links table on every call.
///
/// # Endpoints
///
/// - `POST /tasks/create` - Create a task owned by `user_id`
/// - `GET /tasks/fetch/{user_id}` - List a user's tasks
/// - `PUT /tasks/update/{task_id}` - Update a task (ownership-checked)
/// - `DELETE /tasks/delete/{task_id}` - Delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::validate_request,
};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskboard_shared::models::task::{CreateTask, Task, UpdateTask};
use taskboard_shared::ownership::{ensure_task_owner, validate_due_date};
use tracing::debug;
use validator::Validate;

/// Create/update task request body
///
/// `due_date` is accepted as a raw string so the handler controls parsing
/// and error mapping instead of the JSON deserializer.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskRequest {
    /// Task title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Task description
    pub description: String,

    /// Due date as `YYYY-MM-DD`
    pub due_date: String,

    /// Priority string
    #[validate(length(min = 1, message = "Priority must not be empty"))]
    pub priority: String,

    /// Status string
    #[validate(length(min = 1, message = "Status must not be empty"))]
    pub status: String,

    /// Acting user: the owner on create, the requester on update
    pub user_id: i64,
}

/// Deletion confirmation body
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    /// Human-readable confirmation
    pub detail: String,
}

/// Create a new task linked to its owner
///
/// The due date must parse as `YYYY-MM-DD` and must not be in the past.
/// The task row and the owning link row are inserted in one transaction,
/// so a failure on either leaves nothing behind.
///
/// # Endpoint
///
/// ```text
/// POST /tasks/create
/// Content-Type: application/json
///
/// {
///   "title": "T1",
///   "description": "first task",
///   "due_date": "2099-01-01",
///   "priority": "low",
///   "status": "todo",
///   "user_id": 42
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed (including past/unparseable due date)
/// - `500 Internal Server Error`: Store failure
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<TaskRequest>,
) -> ApiResult<Json<Task>> {
    validate_request(&req)?;

    // Not-in-past check applies at creation only
    let due_date = validate_due_date(&req.due_date)?;

    debug!(user_id = req.user_id, title = %req.title, "Creating task");

    let task = Task::create_owned(
        &state.db,
        CreateTask {
            title: req.title,
            description: req.description,
            due_date,
            priority: req.priority,
            status: req.status,
        },
        req.user_id,
    )
    .await?;

    Ok(Json(task))
}

/// List a user's tasks
///
/// Returns `200` with a possibly-empty list; a user with no links is not
/// an error.
pub async fn fetch_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_user(&state.db, user_id).await?;
    debug!(user_id, count = tasks.len(), "Fetched tasks");
    Ok(Json(tasks))
}

/// Update a task, ownership-checked
///
/// The acting `user_id` in the body must match a linked owner of the task.
/// The due date is parsed but not re-checked against the current date.
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `403 Forbidden`: Acting user is not a linked owner
/// - `404 Not Found`: Task has no link row, or vanished before the update
/// - `500 Internal Server Error`: Store failure
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(req): Json<TaskRequest>,
) -> ApiResult<Json<Task>> {
    validate_request(&req)?;

    let due_date = NaiveDate::parse_from_str(&req.due_date, "%Y-%m-%d")
        .map_err(|e| ApiError::BadRequest(format!("Invalid due_date: {e}")))?;

    ensure_task_owner(&state.db, task_id, req.user_id).await?;

    let task = Task::update(
        &state.db,
        task_id,
        UpdateTask {
            title: req.title,
            description: req.description,
            due_date,
            priority: req.priority,
            status: req.status,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Task with ID {task_id} not found")))?;

    debug!(task_id, "Task updated");
    Ok(Json(task))
}

/// Delete a task
///
/// Returns a confirmation body. Link rows referencing the task are not
/// removed.
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
/// - `500 Internal Server Error`: Store failure
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<ConfirmationResponse>> {
    Task::delete(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Task with ID {task_id} not found")))?;

    debug!(task_id, "Task deleted");
    Ok(Json(ConfirmationResponse {
        detail: "Task deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> TaskRequest {
        TaskRequest {
            title: "T1".to_string(),
            description: "d".to_string(),
            due_date: "2099-01-01".to_string(),
            priority: "low".to_string(),
            status: "todo".to_string(),
            user_id: 1,
        }
    }

    #[test]
    fn test_task_request_validation() {
        assert!(sample_request().validate().is_ok());

        let mut req = sample_request();
        req.title = String::new();
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.status = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_task_request_deserializes() {
        let req: TaskRequest = serde_json::from_str(
            r#"{
                "title": "T1",
                "description": "d",
                "due_date": "2099-01-01",
                "priority": "low",
                "status": "todo",
                "user_id": 42
            }"#,
        )
        .unwrap();
        assert_eq!(req.user_id, 42);
        assert_eq!(req.due_date, "2099-01-01");
    }
}
