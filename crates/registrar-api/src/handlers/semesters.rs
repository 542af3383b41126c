//! Semester endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::ApiJson;
use crate::{
    auth::CurrentUser,
    error::ApiResult,
    models::{ErrorResponse, RegistrationStatusResponse, SemesterRequest, SemesterResponse},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/semesters",
    tag = "semesters",
    responses(
        (status = 200, description = "All semesters", body = [SemesterResponse]),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn list_semesters(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
) -> ApiResult<Json<Vec<SemesterResponse>>> {
    let semesters = state.catalog.list_semesters(&actor).await?;
    Ok(Json(semesters.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/semesters",
    tag = "semesters",
    request_body = SemesterRequest,
    responses(
        (status = 201, description = "Semester created", body = SemesterResponse),
        (status = 400, description = "Invalid dates or windows", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn create_semester(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    ApiJson(request): ApiJson<SemesterRequest>,
) -> ApiResult<(StatusCode, Json<SemesterResponse>)> {
    let semester = state.catalog.create_semester(&actor, request.into()).await?;
    Ok((StatusCode::CREATED, Json(semester.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/semesters/{id}",
    tag = "semesters",
    params(("id" = String, Path, description = "Semester id")),
    responses(
        (status = 200, description = "Semester", body = SemesterResponse),
        (status = 404, description = "No such semester", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn get_semester(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<SemesterResponse>> {
    let semester = state.catalog.get_semester(&actor, &id).await?;
    Ok(Json(semester.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/semesters/{id}",
    tag = "semesters",
    params(("id" = String, Path, description = "Semester id")),
    request_body = SemesterRequest,
    responses(
        (status = 200, description = "Semester updated", body = SemesterResponse),
        (status = 404, description = "No such semester", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn update_semester(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<SemesterRequest>,
) -> ApiResult<Json<SemesterResponse>> {
    let semester = state
        .catalog
        .update_semester(&actor, &id, request.into())
        .await?;
    Ok(Json(semester.into()))
}

/// Delete a semester with its courses and their enrollments
#[utoipa::path(
    delete,
    path = "/api/v1/semesters/{id}",
    tag = "semesters",
    params(("id" = String, Path, description = "Semester id")),
    responses(
        (status = 204, description = "Semester deleted"),
        (status = 404, description = "No such semester", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn delete_semester(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.catalog.delete_semester(&actor, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Whether courses in the semester can be added or dropped right now
#[utoipa::path(
    get,
    path = "/api/v1/semesters/{id}/registration-status",
    tag = "semesters",
    params(("id" = String, Path, description = "Semester id")),
    responses(
        (status = 200, description = "Window status", body = RegistrationStatusResponse),
        (status = 404, description = "No such semester", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn registration_status(
    State(state): State<AppState>,
    CurrentUser(_actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<RegistrationStatusResponse>> {
    let status = state.catalog.registration_status(&id).await?;
    Ok(Json(status.into()))
}
