//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        version = "0.1.0",
        description = "REST API for managing user accounts and user categories",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/users", api = domain_users::ApiDoc),
        (path = "/api/v1/user", api = domain_users::AuthApiDoc),
        (path = "/api/v1/userCategories", api = domain_user_categories::ApiDoc)
    ),
    tags(
        (name = "users", description = "User account management"),
        (name = "auth", description = "Credential login"),
        (name = "user-categories", description = "User category management")
    )
)]
pub struct ApiDoc;
