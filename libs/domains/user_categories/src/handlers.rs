use crate::error::UserCategoryError;
use crate::models::{CreateUserCategory, ListQuery, UpdateUserCategory, UserCategoryResponse};
use crate::repository::UserCategoryRepository;
use crate::service::UserCategoryService;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};
use axum_helpers::AppError;
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI documentation for the user category endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, create_category, get_category, update_category, delete_category),
    components(
        schemas(UserCategoryResponse, CreateUserCategory, UpdateUserCategory),
        responses(
            InternalServerErrorResponse,
            BadRequestValidationResponse,
            NotFoundResponse,
            ConflictResponse
        )
    ),
    tags((name = "user-categories", description = "User category management"))
)]
pub struct ApiDoc;

/// Routes for `/userCategories`: CRUD over categories.
pub fn router<R: UserCategoryRepository + 'static>(service: UserCategoryService<R>) -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).patch(update_category).delete(delete_category),
        )
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "",
    params(ListQuery),
    responses(
        (status = 200, description = "All user categories", body = [UserCategoryResponse]),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "user-categories"
)]
async fn list_categories<R: UserCategoryRepository>(
    State(service): State<Arc<UserCategoryService<R>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<UserCategoryResponse>>, AppError> {
    let categories = service.list_categories(query).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "",
    request_body = CreateUserCategory,
    responses(
        (status = 201, description = "Category created", body = UserCategoryResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "user-categories"
)]
async fn create_category<R: UserCategoryRepository>(
    State(service): State<Arc<UserCategoryService<R>>>,
    Json(input): Json<CreateUserCategory>,
) -> Result<impl IntoResponse, AppError> {
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = UserCategoryResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "user-categories"
)]
async fn get_category<R: UserCategoryRepository>(
    State(service): State<Arc<UserCategoryService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<UserCategoryResponse>, AppError> {
    match service.get_category(&id).await? {
        Some(category) => Ok(Json(category)),
        None => Err(UserCategoryError::NotFound(id).into()),
    }
}

#[utoipa::path(
    patch,
    path = "/{id}",
    params(("id" = String, Path, description = "Category id")),
    request_body = UpdateUserCategory,
    responses(
        (status = 200, description = "Updated category", body = UserCategoryResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "user-categories"
)]
async fn update_category<R: UserCategoryRepository>(
    State(service): State<Arc<UserCategoryService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateUserCategory>,
) -> Result<Json<UserCategoryResponse>, AppError> {
    match service.update_category(&id, input).await? {
        Some(category) => Ok(Json(category)),
        None => Err(UserCategoryError::NotFound(id).into()),
    }
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "user-categories"
)]
async fn delete_category<R: UserCategoryRepository>(
    State(service): State<Arc<UserCategoryService<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = service.delete_category(&id).await?;
    if deleted == 0 {
        return Err(UserCategoryError::NotFound(id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
