use crate::error::UserResult;
use crate::models::{ListQuery, User};
use async_trait::async_trait;
use uuid::Uuid;

/// Data access contract for users.
///
/// Implementations must surface a duplicate email as
/// `UserError::DuplicateEmail` so the service layer never needs a
/// check-then-insert race.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `DuplicateEmail` when the email is
    /// already taken.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Find a user by id.
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Find a user by (normalized) email.
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List all users, sorted per the query.
    async fn list(&self, query: ListQuery) -> UserResult<Vec<User>>;

    /// Replace the stored document for `user.id` with `user`. Fails with
    /// `DuplicateEmail` when an email change collides with another user.
    async fn replace(&self, user: User) -> UserResult<User>;

    /// Delete a user by id, returning the number of deleted documents
    /// (0 or 1).
    async fn delete(&self, id: Uuid) -> UserResult<u64>;
}
