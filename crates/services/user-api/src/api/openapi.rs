//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::responses::{ErrorResponse, LoginResponse, MessageResponse};
use domain::{Credentials, NewUser, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::add_user,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::auth_handler::login,
    ),
    components(
        schemas(
            User,
            NewUser,
            Credentials,
            MessageResponse,
            LoginResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "User listing and registration"),
        (name = "Authentication", description = "Email/password login"),
    )
)]
pub struct ApiDoc;
