//! Repository layer for data access.

mod rows;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use user_repository::MockUserRepository;
