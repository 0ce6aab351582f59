//! User categories API routes
//!
//! Wires the user categories domain to HTTP routes.

use axum::Router;
use domain_user_categories::{handlers, MongoUserCategoryRepository, UserCategoryService};
use mongodb::Database;

use crate::state::AppState;

/// Create user categories router
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserCategoryRepository::new(state.db.clone());
    let service = UserCategoryService::new(repository);
    handlers::router(service)
}

/// Create the unique index on `userCategories.name`
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoUserCategoryRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create user category indexes: {}", e))
}
