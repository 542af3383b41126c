//! Anonymous account endpoints: registration and token issuance

use axum::{extract::State, http::StatusCode, Json};

use super::ApiJson;
use crate::{
    error::ApiResult,
    models::{ErrorResponse, RegisterRequest, TokenRequest, TokenResponse, UserResponse},
    state::AppState,
};

/// Register a student or teacher account
#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = "accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 403, description = "Admin accounts cannot be self-registered", body = ErrorResponse),
        (status = 409, description = "Username taken", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.accounts.register(request.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Exchange username and password for an API token
#[utoipa::path(
    post,
    path = "/api/v1/token",
    tag = "accounts",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Bad credentials", body = ErrorResponse)
    )
)]
pub async fn obtain_token(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.accounts.obtain_token(request.into()).await?;
    Ok(Json(token.into()))
}
