use crate::error::{UserError, UserResult};
use crate::models::{
    normalize_email, CreateUser, ListQuery, LoginRequest, LoginResponse, UpdateUser, User,
    UserResponse,
};
use crate::repository::UserRepository;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum_helpers::TokenIssuer;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Business logic for user accounts: validation, password hashing, and
/// credential login.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    tokens: TokenIssuer,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            tokens: self.tokens.clone(),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, tokens: TokenIssuer) -> Self {
        Self {
            repository: Arc::new(repository),
            tokens,
        }
    }

    #[tracing::instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        validate_create(&input)?;

        let password_hash = match input.password.as_deref() {
            Some(password) if !password.is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        let user = User::new(input.name, input.email, password_hash);
        let created = self.repository.create(user).await?;

        tracing::info!(user_id = %created.id, "Created user");
        Ok(created.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self, query: ListQuery) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list(query).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Fetch a user by id. `Ok(None)` for an absent or malformed id.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<Option<UserResponse>> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let user = self.repository.get_by_id(uuid).await?;
        Ok(user.map(Into::into))
    }

    /// Apply a partial update. `Ok(None)` for an absent or malformed id.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_user(
        &self,
        id: &str,
        input: UpdateUser,
    ) -> UserResult<Option<UserResponse>> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let Some(mut user) = self.repository.get_by_id(uuid).await? else {
            return Ok(None);
        };

        // An empty password means "leave the credentials alone"
        let new_password_hash = match input.password.as_deref() {
            Some(password) if !password.is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        user.apply_update(input, new_password_hash);
        let updated = self.repository.replace(user).await?;

        tracing::info!(user_id = %updated.id, "Updated user");
        Ok(Some(updated.into()))
    }

    /// Delete a user, returning how many documents were removed. A
    /// malformed id deletes nothing.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<u64> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(0);
        };

        let deleted = self.repository.delete(uuid).await?;
        if deleted > 0 {
            tracing::info!(user_id = %uuid, "Deleted user");
        }
        Ok(deleted)
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown email, missing credentials, and wrong password all surface
    /// as the same generic `Authentication` error to the caller.
    #[tracing::instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginRequest) -> UserResult<LoginResponse> {
        let email = normalize_email(&input.email);

        let user = self
            .repository
            .get_by_email(&email)
            .await?
            .ok_or(UserError::Authentication("invalid email"))?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(UserError::Authentication("invalid password"))?;

        if !verify_password(&input.password, hash)? {
            return Err(UserError::Authentication("invalid password"));
        }

        let token = self
            .tokens
            .issue(&user.id.to_string())
            .map_err(|e| UserError::Token(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse { token })
    }
}

fn validate_create(input: &CreateUser) -> UserResult<()> {
    if input.name.trim().is_empty() {
        return Err(UserError::Validation("name is required".to_string()));
    }
    if input.email.trim().is_empty() {
        return Err(UserError::Validation("email is required".to_string()));
    }
    input
        .validate()
        .map_err(|e| UserError::Validation(e.to_string()))
}

/// Hash a password into an Argon2 PHC string.
fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch; an unparseable stored hash is an
/// internal error, not a login failure.
fn verify_password(password: &str, stored_hash: &str) -> UserResult<bool> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use axum_helpers::JwtConfig;
    use mockall::predicate::eq;

    fn tokens() -> TokenIssuer {
        TokenIssuer::new(&JwtConfig::new("users-service-test-secret-32-chars!!!"))
    }

    fn service(repository: MockUserRepository) -> UserService<MockUserRepository> {
        UserService::new(repository, tokens())
    }

    fn stored_user(email: &str, password: Option<&str>) -> User {
        let hash = password.map(|p| hash_password(p).unwrap());
        User::new("Ada".to_string(), email.to_string(), hash)
    }

    #[tokio::test]
    async fn test_create_user_requires_name() {
        let service = service(MockUserRepository::new());
        let result = service
            .create_user(CreateUser {
                name: "".to_string(),
                email: "ada@example.com".to_string(),
                password: None,
            })
            .await;

        match result {
            Err(UserError::Validation(message)) => assert_eq!(message, "name is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_user_requires_email() {
        let service = service(MockUserRepository::new());
        let result = service
            .create_user(CreateUser {
                name: "Ada".to_string(),
                email: "  ".to_string(),
                password: None,
            })
            .await;

        match result {
            Err(UserError::Validation(message)) => assert_eq!(message, "email is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_user_rejects_invalid_email_format() {
        let service = service(MockUserRepository::new());
        let result = service
            .create_user(CreateUser {
                name: "Ada".to_string(),
                email: "not-an-email".to_string(),
                password: None,
            })
            .await;

        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .withf(|user: &User| {
                let hash = user.password_hash.as_deref().expect("hash must be set");
                // Stored value is an Argon2 PHC string, not the plaintext
                hash != "Str0ngPass!" && verify_password("Str0ngPass!", hash).unwrap()
            })
            .returning(|user| Ok(user));

        let service = service(repository);
        let response = service
            .create_user(CreateUser {
                name: "Ada".to_string(),
                email: "Ada@Example.com".to_string(),
                password: Some("Str0ngPass!".to_string()),
            })
            .await
            .unwrap();

        // Email is lowercased and the hash never leaves the service
        assert_eq!(response.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_create_user_empty_password_stores_no_hash() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .withf(|user: &User| user.password_hash.is_none())
            .returning(|user| Ok(user));

        let service = service(repository);
        service
            .create_user(CreateUser {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: Some("".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_user_malformed_id_is_none() {
        // No repository expectation: the call must not reach storage
        let service = service(MockUserRepository::new());
        assert!(service.get_user("not-a-uuid").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_user_absent_is_none() {
        let id = Uuid::now_v7();
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = service(repository);
        assert!(service.get_user(&id.to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_absent_is_none() {
        let mut repository = MockUserRepository::new();
        repository.expect_get_by_id().returning(|_| Ok(None));

        let service = service(repository);
        let result = service
            .update_user(
                &Uuid::now_v7().to_string(),
                UpdateUser {
                    name: Some("Ada".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_keeps_unchanged_fields() {
        let existing = stored_user("ada@example.com", Some("Str0ngPass!"));
        let id = existing.id;
        let old_hash = existing.password_hash.clone();
        let before = existing.updated_at;

        let mut repository = MockUserRepository::new();
        {
            let existing = existing.clone();
            repository
                .expect_get_by_id()
                .with(eq(id))
                .returning(move |_| Ok(Some(existing.clone())));
        }
        repository
            .expect_replace()
            .withf(move |user: &User| {
                user.name == "Ada Lovelace"
                    && user.email == "ada@example.com"
                    && user.password_hash == old_hash
                    && user.updated_at > before
            })
            .returning(|user| Ok(user));

        let service = service(repository);
        let response = service
            .update_user(
                &id.to_string(),
                UpdateUser {
                    name: Some("Ada Lovelace".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("user exists");

        assert_eq!(response.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_update_user_rehashes_new_password() {
        let existing = stored_user("ada@example.com", Some("OldPass!1"));
        let id = existing.id;

        let mut repository = MockUserRepository::new();
        {
            let existing = existing.clone();
            repository
                .expect_get_by_id()
                .returning(move |_| Ok(Some(existing.clone())));
        }
        repository
            .expect_replace()
            .withf(|user: &User| {
                let hash = user.password_hash.as_deref().unwrap();
                verify_password("NewPass!2", hash).unwrap()
            })
            .returning(|user| Ok(user));

        let service = service(repository);
        let updated = service
            .update_user(
                &id.to_string(),
                UpdateUser {
                    password: Some("NewPass!2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.is_some());
    }

    #[tokio::test]
    async fn test_delete_user_malformed_id_deletes_nothing() {
        let service = service(MockUserRepository::new());
        assert_eq!(service.delete_user("nope").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_user_reports_count() {
        let id = Uuid::now_v7();
        let mut repository = MockUserRepository::new();
        repository
            .expect_delete()
            .with(eq(id))
            .returning(|_| Ok(1));

        let service = service(repository);
        assert_eq!(service.delete_user(&id.to_string()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .withf(|email| email == "ghost@example.com")
            .returning(|_| Ok(None));

        let service = service(repository);
        let result = service
            .login(LoginRequest {
                email: "Ghost@Example.com".to_string(),
                password: "whatever".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(UserError::Authentication("invalid email"))
        ));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = stored_user("ada@example.com", Some("Correct1!"));
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(repository);
        let result = service
            .login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "Wrong2!".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(UserError::Authentication("invalid password"))
        ));
    }

    #[tokio::test]
    async fn test_login_passwordless_account_is_rejected() {
        let user = stored_user("ada@example.com", None);
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(repository);
        let result = service
            .login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "anything".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_login_success_issues_token_with_user_id() {
        let user = stored_user("ada@example.com", Some("Correct1!"));
        let user_id = user.id;
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(repository);
        let response = service
            .login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "Correct1!".to_string(),
            })
            .await
            .unwrap();

        let claims = tokens().verify(&response.token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }
}
