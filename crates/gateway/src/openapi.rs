//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{CreateUser, UpdateUser, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
        )
    ),
    tags(
        (name = "Users", description = "In-memory user records"),
    )
)]
pub struct ApiDoc;
