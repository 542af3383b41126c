//! User administration (admin only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::ApiJson;
use crate::{
    auth::CurrentUser,
    error::ApiResult,
    models::{ErrorResponse, RegisterRequest, UpdateUserRequest, UserResponse},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.accounts.list_users(&actor).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Create a user of any role
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 409, description = "Username taken", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.accounts.create_user(&actor, request.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.accounts.get_user(&actor, &id).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .accounts
        .update_user(&actor, &id, request.into())
        .await?;
    Ok(Json(user.into()))
}

/// Delete a user with their enrollments and token
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.accounts.delete_user(&actor, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
