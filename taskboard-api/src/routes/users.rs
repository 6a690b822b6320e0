/// User endpoints
///
/// CRUD surface over user accounts. The password hash arrives as an opaque
/// string from the client; this layer never hashes or compares credentials.
///
/// # Endpoints
///
/// - `POST /users` - Create user
/// - `GET /users/{username}` - Fetch user by username (200 + record or null)
/// - `PUT /users/{id}` - Update user
/// - `DELETE /users/{id}` - Delete user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::validate_request,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::user::{CreateUser, UpdateUser, User};
use tracing::debug;
use validator::Validate;

/// Create/update user request body
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    /// Username (must be unique)
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    /// Opaque password hash
    #[validate(length(min = 1, message = "Password hash must not be empty"))]
    pub password_hash: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password_hash": "$argon2id$...",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `500 Internal Server Error`: Store failure (including duplicate username)
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> ApiResult<Json<User>> {
    validate_request(&req)?;

    debug!(username = %req.username, "Creating user");

    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            password_hash: req.password_hash,
            email: req.email,
        },
    )
    .await?;

    Ok(Json(user))
}

/// Fetch a user by username
///
/// Returns `200` with the user record, or `200` with `null` when no user
/// has that username.
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Option<User>>> {
    let user = User::find_by_username(&state.db, &username).await?;
    Ok(Json(user))
}

/// Update a user
///
/// Replaces username, password hash and email.
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Store failure
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UserRequest>,
) -> ApiResult<Json<User>> {
    validate_request(&req)?;

    let user = User::update(
        &state.db,
        user_id,
        UpdateUser {
            username: req.username,
            password_hash: req.password_hash,
            email: req.email,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("User with ID {user_id} not found")))?;

    Ok(Json(user))
}

/// Delete a user
///
/// Returns the deleted record. Links owned by the user are not cascaded.
///
/// # Errors
///
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Store failure
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::delete(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User with ID {user_id} not found")))?;

    debug!(user_id, "User deleted");
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_request_validation() {
        let req = UserRequest {
            username: "alice".to_string(),
            password_hash: "h1".to_string(),
            email: "a@x.com".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = UserRequest {
            username: String::new(),
            password_hash: "h1".to_string(),
            email: "a@x.com".to_string(),
        };
        assert!(req.validate().is_err());

        let req = UserRequest {
            username: "alice".to_string(),
            password_hash: "h1".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
