//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User as seen outside the store.
///
/// There is deliberately no password field: the digest lives only on the
/// repository's row type and cannot be serialized from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// Email address, used as the login key
    #[cfg_attr(feature = "openapi", schema(example = "a@x.com"))]
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Registration data transfer object
#[derive(Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewUser {
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "a@x.com"))]
    pub email: String,
    /// Plaintext password, hashed before it is stored
    #[cfg_attr(feature = "openapi", schema(example = "secret"))]
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login data transfer object
#[derive(Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Credentials {
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "a@x.com"))]
    pub email: String,
    /// Plaintext password
    #[cfg_attr(feature = "openapi", schema(example = "secret"))]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
