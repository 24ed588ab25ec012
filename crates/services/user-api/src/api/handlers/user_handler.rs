//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, OptionExt};
use domain::{NewUser, User};

use crate::api::extractors::{AppJson, AppPath};
use crate::api::responses::{MessageResponse, USER_ADDED_MESSAGE};
use crate::api::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(add_user))
        .route("/:id", get(get_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>),
        (status = 500, description = "Internal Server Error", body = crate::api::responses::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User added successfully", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = crate::api::responses::ErrorResponse),
        (status = 500, description = "Internal Server Error", body = crate::api::responses::ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewUser>,
) -> AppResult<Json<MessageResponse>> {
    state.users.add_user(payload).await?;
    Ok(Json(MessageResponse::new(USER_ADDED_MESSAGE)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 400, description = "Malformed user ID", body = crate::api::responses::ErrorResponse),
        (status = 404, description = "User not found", body = crate::api::responses::ErrorResponse),
        (status = 500, description = "Internal Server Error", body = crate::api::responses::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<User>> {
    let user = state.users.get_user_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(user))
}
