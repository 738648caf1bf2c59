//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{NewUser, User, UserByEmail};

/// OpenAPI documentation for the User Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory",
        version = "0.1.0",
        description = "CRUD API for user records with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user_details,
        user_handler::get_user_by_id,
        user_handler::create_user,
    ),
    components(
        schemas(User, NewUser, UserByEmail)
    ),
    tags(
        (name = "Users", description = "User listing, lookup and creation")
    )
)]
pub struct ApiDoc;
