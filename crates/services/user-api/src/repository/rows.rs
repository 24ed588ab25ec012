//! Row shapes read back from the `users` table.

use sea_orm::FromQueryResult;

use domain::{Password, User};

/// Public columns of a user row.
#[derive(Debug, Clone, FromQueryResult)]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// User row including the stored digest. Never leaves the repository.
#[derive(Clone, FromQueryResult)]
pub(crate) struct CredentialRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CredentialRow {
    /// Split into the public user and the stored digest.
    pub fn into_parts(self) -> (User, Password) {
        let user = User {
            id: self.id,
            name: self.name,
            email: self.email,
        };
        (user, Password::from_hash(self.password))
    }
}
