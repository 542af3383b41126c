//! Enrollment endpoints
//!
//! Adds and drops pass through the eligibility gate; a refusal comes back as
//! 400 (or 403 for non-students) with the rejection code as the error type.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::ApiJson;
use crate::{
    auth::CurrentUser,
    error::ApiResult,
    models::{
        EnrollmentRequest, EnrollmentResponse, ErrorResponse, GradesRequest,
        ScheduleEntryResponse,
    },
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/enrollments",
    tag = "enrollments",
    responses(
        (status = 200, description = "All enrollments", body = [EnrollmentResponse])
    ),
    security(("token" = []))
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
    CurrentUser(_actor): CurrentUser,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state.enrollments.list().await?;
    Ok(Json(enrollments.into_iter().map(Into::into).collect()))
}

/// Enroll the caller in a course
#[utoipa::path(
    post,
    path = "/api/v1/enrollments",
    tag = "enrollments",
    request_body = EnrollmentRequest,
    responses(
        (status = 201, description = "Enrolled", body = EnrollmentResponse),
        (status = 400, description = "Registration closed or credit limit exceeded", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse),
        (status = 404, description = "No such course", body = ErrorResponse),
        (status = 409, description = "Already enrolled", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    ApiJson(request): ApiJson<EnrollmentRequest>,
) -> ApiResult<(StatusCode, Json<EnrollmentResponse>)> {
    let enrollment = state.enrollments.enroll(&actor, request.into()).await?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/enrollments/{id}",
    tag = "enrollments",
    params(("id" = String, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment", body = EnrollmentResponse),
        (status = 404, description = "No such enrollment", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    CurrentUser(_actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let enrollment = state.enrollments.get(&id).await?;
    Ok(Json(enrollment.into()))
}

/// Drop one of the caller's enrollments
#[utoipa::path(
    delete,
    path = "/api/v1/enrollments/{id}",
    tag = "enrollments",
    params(("id" = String, Path, description = "Enrollment id")),
    responses(
        (status = 204, description = "Dropped"),
        (status = 400, description = "Registration closed", body = ErrorResponse),
        (status = 403, description = "Not the caller's enrollment", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn drop_enrollment(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.enrollments.drop_enrollment(&actor, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record midterm and/or final grades
#[utoipa::path(
    patch,
    path = "/api/v1/enrollments/{id}",
    tag = "enrollments",
    params(("id" = String, Path, description = "Enrollment id")),
    request_body = GradesRequest,
    responses(
        (status = 200, description = "Grades recorded", body = EnrollmentResponse),
        (status = 400, description = "Grade out of range", body = ErrorResponse),
        (status = 403, description = "Not a teacher or admin", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn record_grades(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<GradesRequest>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let enrollment = state
        .enrollments
        .record_grades(&actor, &id, request.into())
        .await?;
    Ok(Json(enrollment.into()))
}

/// The calling student's schedule
#[utoipa::path(
    get,
    path = "/api/v1/enrollments/my_courses",
    tag = "enrollments",
    responses(
        (status = 200, description = "Schedule", body = [ScheduleEntryResponse]),
        (status = 403, description = "Not a student", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn my_courses(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
) -> ApiResult<Json<Vec<ScheduleEntryResponse>>> {
    let schedule = state.enrollments.my_courses(&actor).await?;
    Ok(Json(schedule.into_iter().map(Into::into).collect()))
}

/// Enrollments in the calling teacher's courses
#[utoipa::path(
    get,
    path = "/api/v1/enrollments/my_students",
    tag = "enrollments",
    responses(
        (status = 200, description = "Roster", body = [EnrollmentResponse]),
        (status = 403, description = "Not a teacher", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn my_students(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let roster = state.enrollments.my_students(&actor).await?;
    Ok(Json(roster.into_iter().map(Into::into).collect()))
}
