//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use common::{AppError, AppResult};
use domain::Credentials;

use crate::api::extractors::AppJson;
use crate::api::responses::LoginResponse;
use crate::api::AppState;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Check an email/password pair
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 200, description = "Authentication successful", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = crate::api::responses::ErrorResponse),
        (status = 401, description = "Authentication failed", body = crate::api::responses::ErrorResponse),
        (status = 500, description = "Internal Server Error", body = crate::api::responses::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(credentials): AppJson<Credentials>,
) -> AppResult<Json<LoginResponse>> {
    match state
        .users
        .authenticate_user(&credentials.email, &credentials.password)
        .await?
    {
        Some(user) => Ok(Json(LoginResponse::new(user))),
        None => {
            tracing::debug!("Login rejected");
            Err(AppError::AuthenticationFailed)
        }
    }
}
