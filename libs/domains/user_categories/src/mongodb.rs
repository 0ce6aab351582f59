use crate::error::{UserCategoryError, UserCategoryResult};
use crate::models::{ListQuery, UserCategory};
use crate::repository::UserCategoryRepository;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use uuid::Uuid;

const COLLECTION_NAME: &str = "userCategories";

/// MongoDB-backed user category repository.
#[derive(Clone)]
pub struct MongoUserCategoryRepository {
    collection: Collection<UserCategory>,
}

impl MongoUserCategoryRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    /// Use an explicit collection, mainly for tests against a scratch
    /// database.
    pub fn with_collection(collection: Collection<UserCategory>) -> Self {
        Self { collection }
    }

    /// Create the unique index on `name`.
    pub async fn create_indexes(&self) -> UserCategoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        tracing::debug!("Created unique index on userCategories.name");
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
impl UserCategoryRepository for MongoUserCategoryRepository {
    #[tracing::instrument(skip(self, category), fields(category_id = %category.id))]
    async fn create(&self, category: UserCategory) -> UserCategoryResult<UserCategory> {
        match self.collection.insert_one(&category).await {
            Ok(_) => Ok(category),
            Err(err) if is_duplicate_key(&err) => {
                Err(UserCategoryError::DuplicateName(category.name))
            }
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserCategoryResult<Option<UserCategory>> {
        let category = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(category)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, query: ListQuery) -> UserCategoryResult<Vec<UserCategory>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(Self::build_sort(&query))
            .await?;
        let categories = cursor.try_collect().await?;
        Ok(categories)
    }

    #[tracing::instrument(skip(self, category), fields(category_id = %category.id))]
    async fn replace(&self, category: UserCategory) -> UserCategoryResult<UserCategory> {
        match self
            .collection
            .replace_one(Self::id_filter(category.id), &category)
            .await
        {
            Ok(_) => Ok(category),
            Err(err) if is_duplicate_key(&err) => {
                Err(UserCategoryError::DuplicateName(category.name))
            }
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserCategoryResult<u64> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count)
    }
}
