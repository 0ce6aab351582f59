//! User Categories Domain
//!
//! CRUD for user categories (e.g. "admin", "placement attendee" roles),
//! backed by MongoDB. Follows the same layering as the users domain:
//! handlers → service → repository → models.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserCategoryError, UserCategoryResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateUserCategory, ListQuery, SortOrder, UpdateUserCategory, UserCategory,
    UserCategoryResponse,
};
pub use mongodb::MongoUserCategoryRepository;
pub use repository::UserCategoryRepository;
pub use service::UserCategoryService;
