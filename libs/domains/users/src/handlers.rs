use crate::error::UserError;
use crate::models::{CreateUser, ListQuery, LoginRequest, LoginResponse, UpdateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};
use axum_helpers::AppError;
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI documentation for the user CRUD endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserResponse, CreateUser, UpdateUser),
        responses(
            InternalServerErrorResponse,
            BadRequestValidationResponse,
            NotFoundResponse,
            ConflictResponse
        )
    ),
    tags((name = "users", description = "User account management"))
)]
pub struct ApiDoc;

/// OpenAPI documentation for the login endpoint.
#[derive(OpenApi)]
#[openapi(
    paths(login),
    components(
        schemas(LoginRequest, LoginResponse),
        responses(InternalServerErrorResponse, BadRequestValidationResponse)
    ),
    tags((name = "auth", description = "Credential login"))
)]
pub struct AuthApiDoc;

/// Routes for `/users`: CRUD over user accounts.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .with_state(Arc::new(service))
}

/// Routes for `/user`: the login endpoint.
pub fn login_router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/login", post(login))
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "",
    params(ListQuery),
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = service.list_users(query).await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<CreateUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    match service.get_user(&id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(UserError::NotFound(id).into()),
    }
}

#[utoipa::path(
    patch,
    path = "/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<UserResponse>, AppError> {
    match service.update_user(&id, input).await? {
        Some(user) => Ok(Json(user)),
        None => Err(UserError::NotFound(id).into()),
    }
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = service.delete_user(&id).await?;
    if deleted == 0 {
        return Err(UserError::NotFound(id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token", body = LoginResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "auth"
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = service.login(input).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortOrder, User};
    use crate::repository::MockUserRepository;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum_helpers::{JwtConfig, TokenIssuer};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(repository: MockUserRepository) -> Router {
        let tokens = TokenIssuer::new(&JwtConfig::new("users-handler-test-secret-32-chars!!"));
        let service = UserService::new(repository, tokens);
        Router::new()
            .nest("/v1/users", router(service.clone()))
            .nest("/v1/user", login_router(service))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_user_returns_201_without_password_hash() {
        let mut repository = MockUserRepository::new();
        repository.expect_create().returning(|user| Ok(user));

        let response = app(repository)
            .oneshot(json_request(
                "POST",
                "/v1/users",
                json!({"name": "Ada", "email": "ada@example.com", "password": "Str0ng!"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["email"], "ada@example.com");
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_create_user_missing_name_is_400() {
        let response = app(MockUserRepository::new())
            .oneshot(json_request(
                "POST",
                "/v1/users",
                json!({"email": "ada@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "name is required");
    }

    #[tokio::test]
    async fn test_list_users_passes_sort_query_through() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_list()
            .withf(|query: &ListQuery| {
                query.sort_by == "updatedAt" && query.sort_order == SortOrder::Ascending
            })
            .returning(|_| Ok(vec![]));

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri("/v1/users?sortBy=updatedAt&sortOrder=ascending")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_user_unknown_id_is_404() {
        let mut repository = MockUserRepository::new();
        repository.expect_get_by_id().returning(|_| Ok(None));

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri(format!("/v1/users/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_user_malformed_id_is_404() {
        // The repository must never be consulted for a malformed id
        let response = app(MockUserRepository::new())
            .oneshot(
                Request::builder()
                    .uri("/v1/users/definitely-not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_user_returns_204_then_404() {
        let id = Uuid::now_v7();

        let mut repository = MockUserRepository::new();
        repository.expect_delete().returning(|_| Ok(1));
        let response = app(repository)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/v1/users/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let mut repository = MockUserRepository::new();
        repository.expect_delete().returning(|_| Ok(0));
        let response = app(repository)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/v1/users/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_409() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .returning(|user| Err(UserError::DuplicateEmail(user.email)));

        let response = app(repository)
            .oneshot(json_request(
                "POST",
                "/v1/users",
                json!({"name": "Ada", "email": "ada@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let user = User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            Some(hash_for_test("Correct1!")),
        );
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let response = app(repository)
            .oneshot(json_request(
                "POST",
                "/v1/user/login",
                json!({"email": "ada@example.com", "password": "Correct1!"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_login_failure_is_generic_400() {
        let mut repository = MockUserRepository::new();
        repository.expect_get_by_email().returning(|_| Ok(None));

        let response = app(repository)
            .oneshot(json_request(
                "POST",
                "/v1/user/login",
                json!({"email": "ghost@example.com", "password": "whatever"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let message = body["message"].as_str().unwrap();
        assert!(!message.contains("invalid email"));
        assert!(!message.contains("invalid password"));
    }

    fn hash_for_test(password: &str) -> String {
        use argon2::password_hash::{rand_core::OsRng, SaltString};
        use argon2::{Argon2, PasswordHasher};

        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }
}
