//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Store;
use crate::repository::UserRepository;

/// Application state shared across handlers.
///
/// Handlers hold no state of their own; everything they need arrives here.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub store: Store,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UserRepository>, store: Store) -> Self {
        Self { users, store }
    }
}
