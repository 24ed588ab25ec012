//! User API Library
//!
//! A small user-management HTTP service: list users, register a user and
//! check an email/password pair. The layers, leaf to root:
//!
//! - **infra**: [`Store`](infra::Store), the single relational store handle
//! - **repository**: [`UserRepository`](repository::UserRepository), the only
//!   code that knows about the `users` table; owns password hashing
//! - **api**: axum handlers, extractors and routes

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::UserApiConfig;
use crate::infra::Store;
use crate::repository::UserStore;

/// Connect to the store and make sure the `users` table exists.
pub async fn open_store(config: &UserApiConfig) -> Result<Store, sea_orm::DbErr> {
    let store = Store::connect(&config.database).await?;
    store.ensure_schema().await?;
    Ok(store)
}

/// Wire the repository and router over an open store.
pub fn build_app(store: Store) -> axum::Router {
    let users = Arc::new(UserStore::new(store.clone()));
    create_router(AppState::new(users, store))
}

/// Run the HTTP server with the given configuration.
pub async fn serve(config: UserApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(&config).await?;
    let app = build_app(store);

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("{} listening on {}", config.server.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Provision the `users` table and exit (for CLI commands).
pub async fn init_db(config: UserApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    open_store(&config).await?;
    info!("users table is ready");
    Ok(())
}
