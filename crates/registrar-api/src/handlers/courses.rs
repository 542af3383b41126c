//! Course endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::ApiJson;
use crate::{
    auth::CurrentUser,
    error::ApiResult,
    models::{CourseRequest, CourseResponse, ErrorResponse, ListCoursesQuery},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = "courses",
    params(ListCoursesQuery),
    responses(
        (status = 200, description = "Courses", body = [CourseResponse])
    ),
    security(("token" = []))
)]
pub async fn list_courses(
    State(state): State<AppState>,
    CurrentUser(_actor): CurrentUser,
    Query(query): Query<ListCoursesQuery>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = state
        .catalog
        .list_courses(query.semester_id.as_deref())
        .await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses",
    tag = "courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 403, description = "Not a teacher or admin", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn create_course(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    ApiJson(request): ApiJson<CourseRequest>,
) -> ApiResult<(StatusCode, Json<CourseResponse>)> {
    let course = state.catalog.create_course(&actor, request.into()).await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = CourseResponse),
        (status = 404, description = "No such course", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn get_course(
    State(state): State<AppState>,
    CurrentUser(_actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CourseResponse>> {
    let course = state.catalog.get_course(&id).await?;
    Ok(Json(course.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "No such course", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn update_course(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<CourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    let course = state
        .catalog
        .update_course(&actor, &id, request.into())
        .await?;
    Ok(Json(course.into()))
}

/// Delete a course with its enrollments
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "No such course", body = ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn delete_course(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.catalog.delete_course(&actor, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
