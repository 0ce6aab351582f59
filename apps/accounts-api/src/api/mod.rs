//! API routes module
//!
//! Defines all HTTP routes for the Accounts API. Routes are nested under
//! `/api` by `axum_helpers::create_router`, and the collections live
//! under a `/v1` version prefix.

pub mod health;
pub mod user_categories;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/v1/users", users::router(state))
        .nest("/v1/user", users::login_router(state))
        .nest("/v1/userCategories", user_categories::router(state))
        .merge(health::router(state.clone()))
}
