use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// User entity as stored in MongoDB.
///
/// The password is never stored in clear text: `password_hash` holds an
/// Argon2 PHC string, or `None` for accounts created without a password
/// (those accounts cannot log in).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUID v7 for time-ordered generation)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    /// Stored lowercased; enforced unique by a database index
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id and current timestamps.
    ///
    /// The email is trimmed and lowercased so that lookups and the unique
    /// index are case-insensitive in practice.
    pub fn new(name: String, email: String, password_hash: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.trim().to_string(),
            email: normalize_email(&email),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, replacing only the provided fields.
    ///
    /// `new_password_hash` is the already-hashed replacement password, if
    /// one was supplied. `updated_at` is always refreshed.
    pub fn apply_update(&mut self, update: UpdateUser, new_password_hash: Option<String>) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = normalize_email(&email);
        }
        if let Some(hash) = new_password_hash {
            self.password_hash = Some(hash);
        }
        self.updated_at = Utc::now();
    }
}

/// Lowercase and trim an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    /// Optional; when absent or empty the account has no credentials
    #[serde(default)]
    pub password: Option<String>,
}

/// Payload for partially updating a user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    /// When provided and non-empty, the password is re-hashed
    pub password: Option<String>,
}

/// User representation returned by the API. Never includes the password
/// hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Credential login payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response carrying a signed session token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
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

/// Query parameters for list endpoints.
///
/// `sort_by` names any stored field (wire names, e.g. `createdAt`,
/// `email`); unknown fields simply produce an unsorted-looking result
/// rather than an error, matching MongoDB semantics.
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
    fn test_new_user_normalizes_email() {
        let user = User::new(
            "Ada".to_string(),
            "  Ada@Example.COM ".to_string(),
            None,
        );
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.password_hash.is_none());
    }

    #[test]
    fn test_apply_update_partial() {
        let mut user = User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            Some("$argon2id$old".to_string()),
        );
        let before = user.updated_at;

        user.apply_update(
            UpdateUser {
                name: Some("Ada Lovelace".to_string()),
                ..Default::default()
            },
            None,
        );

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password_hash.as_deref(), Some("$argon2id$old"));
        assert!(user.updated_at > before);
    }

    #[test]
    fn test_apply_update_replaces_password_hash() {
        let mut user = User::new("Ada".to_string(), "ada@example.com".to_string(), None);
        user.apply_update(UpdateUser::default(), Some("$argon2id$new".to_string()));
        assert_eq!(user.password_hash.as_deref(), Some("$argon2id$new"));
    }

    #[test]
    fn test_user_serializes_with_camel_case_and_underscore_id() {
        let user = User::new("Ada".to_string(), "ada@example.com".to_string(), None);
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("passwordHash").is_none());
    }

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            Some("$argon2id$secret".to_string()),
        );
        let response: UserResponse = user.into();
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.sort_by, "createdAt");
        assert_eq!(query.sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_sort_order_aliases() {
        let query: ListQuery =
            serde_json::from_str(r#"{"sortBy":"email","sortOrder":"asc"}"#).unwrap();
        assert_eq!(query.sort_order, SortOrder::Ascending);

        let query: ListQuery = serde_json::from_str(r#"{"sortOrder":"descending"}"#).unwrap();
        assert_eq!(query.sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_create_user_validates_email_format() {
        let input = CreateUser {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: None,
        };
        assert!(input.validate().is_err());

        let input = CreateUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: None,
        };
        assert!(input.validate().is_ok());
    }
}
