use axum_helpers::AppError;
use thiserror::Error;

pub type UserCategoryResult<T> = Result<T, UserCategoryError>;

/// Errors produced by the user categories domain.
#[derive(Debug, Error)]
pub enum UserCategoryError {
    #[error("User category not found: {0}")]
    NotFound(String),

    #[error("A user category named '{0}' already exists")]
    DuplicateName(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for UserCategoryError {
    fn from(err: mongodb::error::Error) -> Self {
        UserCategoryError::Database(err.to_string())
    }
}

impl From<UserCategoryError> for AppError {
    fn from(err: UserCategoryError) -> Self {
        match err {
            UserCategoryError::NotFound(id) => {
                AppError::NotFound(format!("User category not found: {id}"))
            }
            UserCategoryError::DuplicateName(name) => {
                AppError::Conflict(format!("A user category named '{name}' already exists"))
            }
            UserCategoryError::Validation(message) => AppError::BadRequest(message),
            UserCategoryError::Database(detail) => AppError::InternalServerError(detail),
        }
    }
}
