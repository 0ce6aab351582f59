use crate::error::{UserCategoryError, UserCategoryResult};
use crate::models::{
    CreateUserCategory, ListQuery, UpdateUserCategory, UserCategory, UserCategoryResponse,
};
use crate::repository::UserCategoryRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Business logic for user categories.
pub struct UserCategoryService<R: UserCategoryRepository> {
    repository: Arc<R>,
}

impl<R: UserCategoryRepository> Clone for UserCategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserCategoryRepository> UserCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(
        &self,
        input: CreateUserCategory,
    ) -> UserCategoryResult<UserCategoryResponse> {
        if input.name.trim().is_empty() {
            return Err(UserCategoryError::Validation("name is required".to_string()));
        }
        let Some(admin) = input.admin else {
            return Err(UserCategoryError::Validation("admin is required".to_string()));
        };
        let Some(placement_attendee) = input.placement_attendee else {
            return Err(UserCategoryError::Validation(
                "placementAttendee is required".to_string(),
            ));
        };

        let category = UserCategory::new(input.name, admin, placement_attendee);
        let created = self.repository.create(category).await?;

        tracing::info!(category_id = %created.id, "Created user category");
        Ok(created.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_categories(
        &self,
        query: ListQuery,
    ) -> UserCategoryResult<Vec<UserCategoryResponse>> {
        let categories = self.repository.list(query).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Fetch a category by id. `Ok(None)` for an absent or malformed id.
    #[tracing::instrument(skip(self))]
    pub async fn get_category(&self, id: &str) -> UserCategoryResult<Option<UserCategoryResponse>> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let category = self.repository.get_by_id(uuid).await?;
        Ok(category.map(Into::into))
    }

    /// Apply a partial update. `Ok(None)` for an absent or malformed id.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_category(
        &self,
        id: &str,
        input: UpdateUserCategory,
    ) -> UserCategoryResult<Option<UserCategoryResponse>> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(UserCategoryError::Validation(
                    "name cannot be empty".to_string(),
                ));
            }
        }

        let Some(mut category) = self.repository.get_by_id(uuid).await? else {
            return Ok(None);
        };

        category.apply_update(input);
        let updated = self.repository.replace(category).await?;

        tracing::info!(category_id = %updated.id, "Updated user category");
        Ok(Some(updated.into()))
    }

    /// Delete a category, returning how many documents were removed. A
    /// malformed id deletes nothing.
    #[tracing::instrument(skip(self))]
    pub async fn delete_category(&self, id: &str) -> UserCategoryResult<u64> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(0);
        };

        let deleted = self.repository.delete(uuid).await?;
        if deleted > 0 {
            tracing::info!(category_id = %uuid, "Deleted user category");
        }
        Ok(deleted)
    }
}
