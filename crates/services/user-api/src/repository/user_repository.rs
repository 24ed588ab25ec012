//! User repository backed by the `users` table.

use async_trait::async_trait;
use sea_orm::FromQueryResult;

use super::rows::{CredentialRow, UserRow};
use crate::infra::Store;
use common::{AppError, AppResult};
use domain::{NewUser, Password, User};

#[cfg(test)]
use mockall::automock;

const SELECT_ALL_USERS: &str = "SELECT id, name, email FROM users ORDER BY id";
const SELECT_USER_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = ?";
const SELECT_CREDENTIALS_BY_EMAIL: &str =
    "SELECT id, name, email, password FROM users WHERE email = ? ORDER BY id LIMIT 1";
const INSERT_USER: &str = "INSERT INTO users (name, email, password) VALUES (?, ?, ?)";

/// User repository trait for dependency injection.
///
/// Nothing outside an implementation of this trait touches the `users`
/// table. Returned users never carry the password digest.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, ordered by id
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Find a user by primary key
    async fn get_user_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Hash the password and insert a new user, returning the assigned id.
    ///
    /// Email uniqueness is not checked.
    async fn add_user(&self, new_user: NewUser) -> AppResult<i64>;

    /// Check an email/password pair.
    ///
    /// Unknown email and wrong password both yield `Ok(None)`; errors are
    /// reserved for store or hashing failures.
    async fn authenticate_user(&self, email: &str, password: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository over a [`Store`].
pub struct UserStore {
    store: Store,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = self.store.query_all(SELECT_ALL_USERS, []).await?;

        rows.iter()
            .map(|row| UserRow::from_query_result(row, "").map(User::from))
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::from)
    }

    async fn get_user_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let row = self.store.query_one(SELECT_USER_BY_ID, [id.into()]).await?;

        row.map(|row| UserRow::from_query_result(&row, "").map(User::from))
            .transpose()
            .map_err(AppError::from)
    }

    async fn add_user(&self, new_user: NewUser) -> AppResult<i64> {
        let NewUser {
            name,
            email,
            password,
        } = new_user;

        let digest = hash_password(password).await?;

        let result = self
            .store
            .execute(
                INSERT_USER,
                [name.into(), email.into(), digest.into_string().into()],
            )
            .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("inserted row id out of range"))?;
        tracing::info!(user_id = id, "User added");

        Ok(id)
    }

    async fn authenticate_user(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let Some(row) = self
            .store
            .query_one(SELECT_CREDENTIALS_BY_EMAIL, [email.into()])
            .await?
        else {
            return Ok(None);
        };

        let (user, digest) = CredentialRow::from_query_result(&row, "")?.into_parts();

        if verify_password(digest, password.to_string()).await? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

/// Hash on the blocking pool; argon2 would otherwise stall the executor.
async fn hash_password(plain_text: String) -> AppResult<Password> {
    let digest = tokio::task::spawn_blocking(move || Password::new(&plain_text))
        .await
        .map_err(|e| AppError::hash(format!("hashing task failed: {}", e)))??;

    Ok(digest)
}

async fn verify_password(digest: Password, plain_text: String) -> AppResult<bool> {
    let matches = tokio::task::spawn_blocking(move || digest.verify(&plain_text))
        .await
        .map_err(|e| AppError::hash(format!("verification task failed: {}", e)))??;

    Ok(matches)
}
