use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// User category entity as stored in MongoDB.
///
/// Categories classify accounts; the two flags grant coarse-grained
/// capabilities to every member of the category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCategory {
    /// Unique identifier (UUID v7 for time-ordered generation)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Enforced unique by a database index
    pub name: String,
    pub admin: bool,
    pub placement_attendee: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserCategory {
    pub fn new(name: String, admin: bool, placement_attendee: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.trim().to_string(),
            admin,
            placement_attendee,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, replacing only the provided fields and
    /// refreshing `updated_at`.
    pub fn apply_update(&mut self, update: UpdateUserCategory) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(admin) = update.admin {
            self.admin = admin;
        }
        if let Some(placement_attendee) = update.placement_attendee {
            self.placement_attendee = placement_attendee;
        }
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a category. All three fields are required; a
/// create that omits a flag is rejected, not defaulted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserCategory {
    #[serde(default)]
    pub name: String,
    pub admin: Option<bool>,
    pub placement_attendee: Option<bool>,
}

/// Payload for partially updating a category. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserCategory {
    pub name: Option<String>,
    pub admin: Option<bool>,
    pub placement_attendee: Option<bool>,
}

/// Category representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub admin: bool,
    pub placement_attendee: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserCategory> for UserCategoryResponse {
    fn from(category: UserCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            admin: category.admin,
            placement_attendee: category.placement_attendee,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "asc")]
    Ascending,
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// MongoDB sort direction: 1 ascending, -1 descending.
    pub fn to_mongo(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Query parameters for the list endpoint. `sort_by` names any stored
/// field in its wire spelling (e.g. `createdAt`, `name`).
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort_by: "createdAt".to_string(),
            sort_order: SortOrder::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_defaults() {
        let category = UserCategory::new("  staff ".to_string(), false, false);
        assert_eq!(category.name, "staff");
        assert!(!category.admin);
        assert!(!category.placement_attendee);
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn test_apply_update_partial() {
        let mut category = UserCategory::new("staff".to_string(), false, true);
        let before = category.updated_at;

        category.apply_update(UpdateUserCategory {
            admin: Some(true),
            ..Default::default()
        });

        assert_eq!(category.name, "staff");
        assert!(category.admin);
        assert!(category.placement_attendee);
        assert!(category.updated_at > before);
    }

    #[test]
    fn test_serializes_with_camel_case_and_underscore_id() {
        let category = UserCategory::new("staff".to_string(), true, false);
        let value = serde_json::to_value(&category).unwrap();
        assert!(value.get("_id").is_some());
        assert_eq!(value["placementAttendee"], false);
        assert_eq!(value["admin"], true);
    }

    #[test]
    fn test_create_payload_omitted_flags_are_none() {
        let input: CreateUserCategory = serde_json::from_str(r#"{"name":"staff"}"#).unwrap();
        assert!(input.admin.is_none());
        assert!(input.placement_attendee.is_none());

        let input: CreateUserCategory =
            serde_json::from_str(r#"{"name":"staff","admin":true,"placementAttendee":false}"#)
                .unwrap();
        assert_eq!(input.admin, Some(true));
        assert_eq!(input.placement_attendee, Some(false));
    }
}
