use axum_helpers::AppError;
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

/// Errors produced by the users domain.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("{0}")]
    Validation(String),

    /// Login failure. The inner reason ("invalid email", "invalid
    /// password") is logged but never sent to the client.
    #[error("authentication failed: {0}")]
    Authentication(&'static str),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User not found: {id}")),
            UserError::DuplicateEmail(email) => {
                AppError::Conflict(format!("A user with email '{email}' already exists"))
            }
            UserError::Validation(message) => AppError::BadRequest(message),
            UserError::Authentication(reason) => {
                tracing::info!("Login rejected: {reason}");
                AppError::BadRequest(
                    "Login failed, did you enter the correct email and password?".to_string(),
                )
            }
            UserError::PasswordHash(detail) => AppError::InternalServerError(detail),
            UserError::Token(detail) => AppError::InternalServerError(detail),
            UserError::Database(detail) => AppError::InternalServerError(detail),
        }
    }
}
