//! API route definitions

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    handlers::{accounts, courses, enrollments, health, semesters, users},
    middleware::logging_middleware,
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Accounts
        .route("/api/v1/register", post(accounts::register))
        .route("/api/v1/token", post(accounts::obtain_token))
        // User administration
        .route(
            "/api/v1/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/v1/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Semesters
        .route(
            "/api/v1/semesters",
            get(semesters::list_semesters).post(semesters::create_semester),
        )
        .route(
            "/api/v1/semesters/{id}",
            get(semesters::get_semester)
                .put(semesters::update_semester)
                .delete(semesters::delete_semester),
        )
        .route(
            "/api/v1/semesters/{id}/registration-status",
            get(semesters::registration_status),
        )
        // Courses
        .route(
            "/api/v1/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/api/v1/courses/{id}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        // Enrollments; static segments win over `{id}` in matchit
        .route(
            "/api/v1/enrollments",
            get(enrollments::list_enrollments).post(enrollments::create_enrollment),
        )
        .route(
            "/api/v1/enrollments/my_courses",
            get(enrollments::my_courses),
        )
        .route(
            "/api/v1/enrollments/my_students",
            get(enrollments::my_students),
        )
        .route(
            "/api/v1/enrollments/{id}",
            get(enrollments::get_enrollment)
                .patch(enrollments::record_grades)
                .delete(enrollments::drop_enrollment),
        )
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// Full application router with middleware and state attached
pub fn build_router(state: AppState) -> Router {
    api_routes()
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

struct TokenAuth;

impl Modify for TokenAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "`Token <key>` as issued by /api/v1/token",
                ))),
            );
        }
    }
}

/// OpenAPI description of every endpoint
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        accounts::register,
        accounts::obtain_token,
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::delete_user,
        semesters::list_semesters,
        semesters::create_semester,
        semesters::get_semester,
        semesters::update_semester,
        semesters::delete_semester,
        semesters::registration_status,
        courses::list_courses,
        courses::create_course,
        courses::get_course,
        courses::update_course,
        courses::delete_course,
        enrollments::list_enrollments,
        enrollments::create_enrollment,
        enrollments::get_enrollment,
        enrollments::drop_enrollment,
        enrollments::record_grades,
        enrollments::my_courses,
        enrollments::my_students,
    ),
    components(schemas(
        crate::models::RoleName,
        crate::models::RegisterRequest,
        crate::models::TokenRequest,
        crate::models::TokenResponse,
        crate::models::UpdateUserRequest,
        crate::models::UserResponse,
        crate::models::SemesterRequest,
        crate::models::SemesterResponse,
        crate::models::RegistrationStatusResponse,
        crate::models::CourseRequest,
        crate::models::CourseResponse,
        crate::models::EnrollmentRequest,
        crate::models::GradesRequest,
        crate::models::EnrollmentResponse,
        crate::models::ScheduleEntryResponse,
        crate::models::HealthResponse,
        crate::models::ErrorResponse,
        crate::models::ErrorDetail,
    )),
    modifiers(&TokenAuth),
    info(
        title = "Registrar API",
        version = "1.0.0",
        description = "Course registration with credit-limit and registration-window enforcement"
    )
)]
pub struct ApiDoc;
