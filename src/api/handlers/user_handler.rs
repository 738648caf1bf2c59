//! User handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::config::MSG_INVALID_CREDENTIALS;
use crate::domain::{NewUser, User, UserByEmail, UserId};
use crate::errors::{AppError, AppResult};

/// Credentials lookup query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CredentialsQuery {
    /// User email address
    pub email: String,
    /// Plain-text password (an omitted password never matches)
    pub password: Option<String>,
}

/// Lookup by identifier query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// User identifier
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/getDetails", get(get_user_details))
        .route("/getUserById", get(get_user_by_id))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get a user's public profile by email and password
#[utoipa::path(
    get,
    path = "/api/users/getDetails",
    tag = "Users",
    params(CredentialsQuery),
    responses(
        (status = 200, description = "Matching user profile", body = UserByEmail),
        (status = 400, description = "Missing email"),
        (status = 404, description = "Email or password is incorrect")
    )
)]
pub async fn get_user_details(
    State(state): State<AppState>,
    query: Result<Query<CredentialsQuery>, QueryRejection>,
) -> AppResult<Json<UserByEmail>> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;
    let password = query
        .password
        .ok_or_else(|| AppError::not_found(MSG_INVALID_CREDENTIALS))?;

    let details = state
        .user_service
        .get_user_details(&query.email, &password)
        .await?;

    Ok(Json(details))
}

/// Get a user by identifier
#[utoipa::path(
    get,
    path = "/api/users/getUserById",
    tag = "Users",
    params(UserIdQuery),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 204, description = "No user with this identifier"),
        (status = 400, description = "Missing or malformed userId")
    )
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;

    let response = match state.user_service.get_user(query.user_id).await? {
        Some(user) => Json(user).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Malformed JSON body"),
        (status = 409, description = "User with this email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> AppResult<Json<User>> {
    let Json(new_user) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    let user = state.user_service.create_user(new_user).await?;
    Ok(Json(user))
}
