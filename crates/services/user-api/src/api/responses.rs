//! Success response bodies.

use serde::Serialize;
use utoipa::ToSchema;

use domain::User;

/// Body returned after a user is registered
pub const USER_ADDED_MESSAGE: &str = "User added successfully";

/// Body returned after a successful login
pub const AUTHENTICATED_MESSAGE: &str = "Authentication successful";

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User added successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful login: a message plus the authenticated user.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Authentication successful")]
    pub message: String,
    pub user: User,
}

impl LoginResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: AUTHENTICATED_MESSAGE.to_string(),
            user,
        }
    }
}

/// Generic error body, documented for OpenAPI only.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Internal Server Error")]
    pub error: String,
}
