//! Users API routes
//!
//! Wires the users domain (CRUD + login) to HTTP routes.

use axum::Router;
use axum_helpers::TokenIssuer;
use domain_users::{handlers, MongoUserRepository, UserService};
use mongodb::Database;

use crate::state::AppState;

fn service(state: &AppState) -> UserService<MongoUserRepository> {
    let repository = MongoUserRepository::new(state.db.clone());
    let tokens = TokenIssuer::new(&state.config.jwt);
    UserService::new(repository, tokens)
}

/// Create users CRUD router
pub fn router(state: &AppState) -> Router {
    handlers::router(service(state))
}

/// Create the login router (`POST /user/login`)
pub fn login_router(state: &AppState) -> Router {
    handlers::login_router(service(state))
}

/// Create the unique index on `users.email`
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoUserRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create user indexes: {}", e))
}
