use crate::error::{UserError, UserResult};
use crate::models::{ListQuery, User};
use crate::repository::UserRepository;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use uuid::Uuid;

const COLLECTION_NAME: &str = "users";

/// MongoDB-backed user repository.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    /// Use an explicit collection, mainly for tests against a scratch
    /// database.
    pub fn with_collection(collection: Collection<User>) -> Self {
        Self { collection }
    }

    /// Create the unique index on `email`.
    ///
    /// This index is the single arbiter of email uniqueness; inserts and
    /// replaces that collide fail with a duplicate key error which is
    /// mapped to `UserError::DuplicateEmail`.
    pub async fn create_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        tracing::debug!("Created unique index on users.email");
        Ok(())
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    fn build_sort(query: &ListQuery) -> Document {
        let mut sort = Document::new();
        sort.insert(query.sort_by.as_str(), query.sort_order.to_mongo());
        sort
    }
}

/// True when the error is a duplicate key violation (code 11000).
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: User) -> UserResult<User> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(err) if is_duplicate_key(&err) => Err(UserError::DuplicateEmail(user.email)),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let user = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let user = self.collection.find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, query: ListQuery) -> UserResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(Self::build_sort(&query))
            .await?;
        let users = cursor.try_collect().await?;
        Ok(users)
    }

    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    async fn replace(&self, user: User) -> UserResult<User> {
        match self
            .collection
            .replace_one(Self::id_filter(user.id), &user)
            .await
        {
            Ok(_) => Ok(user),
            Err(err) if is_duplicate_key(&err) => Err(UserError::DuplicateEmail(user.email)),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<u64> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;

    #[test]
    fn test_build_sort_defaults_to_created_at_descending() {
        let sort = MongoUserRepository::build_sort(&ListQuery::default());
        assert_eq!(sort, doc! { "createdAt": -1 });
    }

    #[test]
    fn test_build_sort_honors_query() {
        let query = ListQuery {
            sort_by: "email".to_string(),
            sort_order: SortOrder::Ascending,
        };
        assert_eq!(MongoUserRepository::build_sort(&query), doc! { "email": 1 });
    }

    #[test]
    fn test_id_filter_uses_underscore_id() {
        let id = Uuid::now_v7();
        let filter = MongoUserRepository::id_filter(id);
        assert!(filter.contains_key("_id"));
        assert_ne!(filter.get("_id"), Some(&Bson::Null));
    }
}
