/// User CRUD endpoints
///
/// # Endpoints
///
/// - `POST /users` - Create user
/// - `GET /users` - List users
/// - `GET /users/:id` - Get user by id
/// - `PUT /users/:id` - Update user (full-field overwrite)
/// - `DELETE /users/:id` - Delete user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use shopcore_shared::models::user::{CreateUser, UpdateUser, User};
use validator::Validate;

/// Create/update user request body
///
/// There is no `id` field: identity is always store-generated on create and
/// immutable on update.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    /// Display name
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: String,

    /// Email address (must be unique)
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    /// Mailing address
    #[validate(length(max = 100, message = "Address must be at most 100 characters"))]
    pub address: String,
}

/// Delete confirmation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message including the deleted id
    pub message: String,
}

/// Create user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "address": "123 Main St"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `409 Conflict`: Email already exists
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    req.validate().map_err(ApiError::from_validation)?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            address: req.address,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List users
///
/// Returns all users, unfiltered and unpaginated.
///
/// # Endpoint
///
/// ```text
/// GET /users
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Get user by id
///
/// # Endpoint
///
/// ```text
/// GET /users/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with the given id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Update user by id
///
/// Overwrites name, email and address; the id never changes.
///
/// # Endpoint
///
/// ```text
/// PUT /users/:id
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `404 Not Found`: No user with the given id
/// - `409 Conflict`: Email already belongs to another user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UserRequest>,
) -> ApiResult<Json<User>> {
    req.validate().map_err(ApiError::from_validation)?;

    let user = User::update(
        &state.db,
        id,
        UpdateUser {
            name: req.name,
            email: req.email,
            address: req.address,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete user by id
///
/// Removes the user; owned orders and their product links go with it via
/// the store's cascade constraints.
///
/// # Endpoint
///
/// ```text
/// DELETE /users/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with the given id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = User::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: format!("Successfully deleted user {}", id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_request_valid() {
        let req = UserRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            address: "123 Main St".to_string(),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_user_request_rejects_long_name() {
        let req = UserRequest {
            name: "x".repeat(31),
            email: "jane@example.com".to_string(),
            address: "123 Main St".to_string(),
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_user_request_rejects_bad_email() {
        let req = UserRequest {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            address: "123 Main St".to_string(),
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
