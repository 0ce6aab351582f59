use crate::error::UserCategoryResult;
use crate::models::{ListQuery, UserCategory};
use async_trait::async_trait;
use uuid::Uuid;

/// Data access contract for user categories.
///
/// Implementations must surface a duplicate name as
/// `UserCategoryError::DuplicateName`; uniqueness is enforced by the
/// storage index, not by a pre-check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCategoryRepository: Send + Sync {
    /// Insert a new category. Fails with `DuplicateName` when the name is
    /// already taken.
    async fn create(&self, category: UserCategory) -> UserCategoryResult<UserCategory>;

    /// Find a category by id.
    async fn get_by_id(&self, id: Uuid) -> UserCategoryResult<Option<UserCategory>>;

    /// List all categories, sorted per the query.
    async fn list(&self, query: ListQuery) -> UserCategoryResult<Vec<UserCategory>>;

    /// Replace the stored document for `category.id`. Fails with
    /// `DuplicateName` when a rename collides with another category.
    async fn replace(&self, category: UserCategory) -> UserCategoryResult<UserCategory>;

    /// Delete a category by id, returning the number of deleted documents
    /// (0 or 1).
    async fn delete(&self, id: Uuid) -> UserCategoryResult<u64>;
}
