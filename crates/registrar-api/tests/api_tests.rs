//! HTTP-level tests driving the router with `oneshot`

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use registrar_api::bootstrap::ensure_admin;
use registrar_api::{build_router, AppState};
use registrar_domain::{Clock, FixedClock, Role};

struct TestApp {
    router: Router,
    clock: Arc<FixedClock>,
    state: AppState,
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn app() -> TestApp {
    let clock = Arc::new(FixedClock::new(at(2024, 8, 10)));
    let dyn_clock: Arc<dyn Clock> = clock.clone();
    let state = AppState::in_memory(dyn_clock, 4);
    TestApp {
        router: build_router(state.clone()),
        clock,
        state,
    }
}

impl TestApp {
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn token(&self, username: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/token",
                None,
                Some(json!({"username": username, "password": "password123"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    async fn register(&self, username: &str, role: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/register",
                None,
                Some(json!({
                    "username": username,
                    "password": "password123",
                    "email": format!("{username}@example.edu"),
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        self.token(username).await
    }

    async fn admin(&self) -> String {
        ensure_admin(&self.state, "admin", "password123").await.unwrap();
        self.token("admin").await
    }

    async fn semester(&self, admin: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/semesters",
                Some(admin),
                Some(json!({
                    "name": "Fall 2024",
                    "start_date": "2024-09-01",
                    "end_date": "2024-12-20",
                    "course_registration_start": "2024-08-01T12:00:00Z",
                    "course_registration_end": "2024-08-15T12:00:00Z",
                    "add_and_drop_start": "2024-08-20T12:00:00Z",
                    "add_and_drop_end": "2024-09-05T12:00:00Z",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }

    async fn course(&self, teacher: &str, semester_id: &str, name: &str, credits: u32) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/courses",
                Some(teacher),
                Some(json!({
                    "name": name,
                    "credits": credits,
                    "semester_id": semester_id,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }

    async fn enroll(&self, student: &str, course_id: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/api/v1/enrollments",
            Some(student),
            Some(json!({"course_id": course_id})),
        )
        .await
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let app = app();
    let (status, body) = app
        .send(Method::GET, "/api-docs/openapi.json", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/enrollments"].is_object());
    assert!(body["paths"]["/api/v1/semesters/{id}/registration-status"].is_object());
}

#[tokio::test]
async fn test_token_response_and_authentication_errors() {
    let app = app();
    app.register("alice", "student").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/token",
            None,
            Some(json!({"username": "alice", "password": "password123"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "student");
    assert_eq!(body["email"], "alice@example.edu");
    assert_eq!(body["token"].as_str().unwrap().len(), 32);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/token",
            None,
            Some(json!({"username": "alice", "password": "wrong-password"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["type"], "authentication_error");

    let (status, body) = app.send(Method::GET, "/api/v1/courses", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["error"]["message"],
        "Authentication credentials were not provided."
    );

    let (status, body) = app
        .send(Method::GET, "/api/v1/courses", Some("not-a-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token.");
}

#[tokio::test]
async fn test_register_rejects_admin_and_duplicate_username() {
    let app = app();
    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/register",
            None,
            Some(json!({"username": "root", "password": "password123", "role": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    app.register("bob", "teacher").await;
    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/register",
            None,
            Some(json!({"username": "bob", "password": "password123", "role": "student"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["type"], "conflict");
}

#[tokio::test]
async fn test_fresh_deployment_bootstraps_first_admin() {
    let app = app();

    // nothing reachable over HTTP can mint an admin
    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/register",
            None,
            Some(json!({"username": "root", "password": "password123", "role": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let created = ensure_admin(&app.state, "registrar", "password123")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(created.role, Role::Admin);

    // restarting with the same flag leaves the existing admin alone
    assert!(ensure_admin(&app.state, "registrar", "password123")
        .await
        .unwrap()
        .is_none());
    assert!(ensure_admin(&app.state, "second", "password123")
        .await
        .unwrap()
        .is_none());

    let admin = app.token("registrar").await;
    let semester_id = app.semester(&admin).await;
    let (status, body) = app
        .send(Method::GET, "/api/v1/users", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let teacher = app.register("prof", "teacher").await;
    let student = app.register("stu", "student").await;
    let course_id = app.course(&teacher, &semester_id, "Algorithms", 4).await;
    let (status, body) = app.enroll(&student, &course_id).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[tokio::test]
async fn test_bootstrap_rejects_short_password() {
    let app = app();
    assert!(ensure_admin(&app.state, "registrar", "short").await.is_err());
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["type"], "bad_request");
}

#[tokio::test]
async fn test_semester_admin_is_restricted_but_status_is_open() {
    let app = app();
    let admin = app.admin().await;
    let student = app.register("stu", "student").await;
    let semester_id = app.semester(&admin).await;

    let (status, _) = app
        .send(Method::GET, "/api/v1/semesters", Some(&student), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/api/v1/semesters/{semester_id}/registration-status");
    let (status, body) = app.send(Method::GET, &uri, Some(&student), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["open"], true);
    assert_eq!(body["within_registration_window"], true);

    app.clock.set(at(2024, 9, 10));
    let (_, body) = app.send(Method::GET, &uri, Some(&student), None).await;
    assert_eq!(body["open"], false);
}

#[tokio::test]
async fn test_user_administration() {
    let app = app();
    let admin = app.admin().await;
    let student = app.register("stu", "student").await;

    let (status, _) = app
        .send(Method::GET, "/api/v1/users", Some(&student), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, created) = app
        .send(
            Method::POST,
            "/api/v1/users",
            Some(&admin),
            Some(json!({"username": "dean", "password": "password123", "role": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "admin");

    let (status, users) = app
        .send(Method::GET, "/api/v1/users", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 3);

    let uri = format!("/api/v1/users/{}", created["id"].as_str().unwrap());
    let (status, updated) = app
        .send(
            Method::PUT,
            &uri,
            Some(&admin),
            Some(json!({"email": "dean@example.edu"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email"], "dean@example.edu");

    let (status, _) = app.send(Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.send(Method::GET, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_enrollment_workflow_and_rejections() {
    let app = app();
    let admin = app.admin().await;
    let teacher = app.register("prof", "teacher").await;
    let student = app.register("stu", "student").await;
    let semester_id = app.semester(&admin).await;

    let algorithms = app.course(&teacher, &semester_id, "Algorithms", 16).await;
    let databases = app.course(&teacher, &semester_id, "Databases", 4).await;
    let seminar = app.course(&teacher, &semester_id, "Seminar", 1).await;

    let (status, enrollment) = app.enroll(&student, &databases).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(enrollment["midterm_grade"].is_null());

    let (status, body) = app.enroll(&student, &databases).await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    // 4 + 16 lands exactly on the cap
    let (status, _) = app.enroll(&student, &algorithms).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.enroll(&student, &seminar).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "credit_limit_exceeded");

    let (status, body) = app.enroll(&teacher, &seminar).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["type"], "not_a_student");

    let (status, schedule) = app
        .send(Method::GET, "/api/v1/enrollments/my_courses", Some(&student), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = schedule
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["course_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Algorithms", "Databases"]);

    let (status, roster) = app
        .send(Method::GET, "/api/v1/enrollments/my_students", Some(&teacher), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster.as_array().unwrap().len(), 2);

    let (status, _) = app
        .send(Method::GET, "/api/v1/enrollments/my_courses", Some(&teacher), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Between the registration and add/drop windows
    app.clock.set(at(2024, 8, 17));
    let (status, body) = app.enroll(&student, &seminar).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "registration_closed");

    let enrollment_uri = format!("/api/v1/enrollments/{}", enrollment["id"].as_str().unwrap());
    let (status, body) = app
        .send(Method::DELETE, &enrollment_uri, Some(&student), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "registration_closed");

    app.clock.set(at(2024, 8, 25));
    let (status, _) = app
        .send(Method::DELETE, &enrollment_uri, Some(&student), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.enroll(&student, &seminar).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_grading_and_drop_ownership() {
    let app = app();
    let admin = app.admin().await;
    let teacher = app.register("prof", "teacher").await;
    let student = app.register("stu", "student").await;
    let other = app.register("other", "student").await;
    let semester_id = app.semester(&admin).await;
    let course_id = app.course(&teacher, &semester_id, "Compilers", 3).await;

    let (_, enrollment) = app.enroll(&student, &course_id).await;
    let uri = format!("/api/v1/enrollments/{}", enrollment["id"].as_str().unwrap());

    let (status, _) = app.send(Method::DELETE, &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            Method::PATCH,
            &uri,
            Some(&student),
            Some(json!({"midterm_grade": 90.0})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, graded) = app
        .send(
            Method::PATCH,
            &uri,
            Some(&teacher),
            Some(json!({"midterm_grade": 88.5})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(graded["midterm_grade"], 88.5);
    assert!(graded["final_grade"].is_null());

    let (status, _) = app
        .send(
            Method::PATCH,
            &uri,
            Some(&teacher),
            Some(json!({"final_grade": 150.0})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_course_listing_filters_by_semester() {
    let app = app();
    let admin = app.admin().await;
    let teacher = app.register("prof", "teacher").await;
    let student = app.register("stu", "student").await;
    let semester_id = app.semester(&admin).await;
    app.course(&teacher, &semester_id, "Networks", 3).await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/courses",
            Some(&student),
            Some(json!({"name": "Hack", "credits": 1, "semester_id": semester_id})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/api/v1/courses?semester_id={semester_id}");
    let (status, courses) = app.send(Method::GET, &uri, Some(&student), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(courses.as_array().unwrap().len(), 1);
    assert_eq!(courses[0]["name"], "Networks");

    let (status, _) = app
        .send(Method::GET, "/api/v1/courses/not-a-uuid", Some(&student), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_demo_seed_is_usable() {
    let app = app();
    let seed = registrar_api::demo::seed_demo(&app.state, app.clock.now())
        .await
        .unwrap();
    assert_eq!(seed.course_ids.len(), 3);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/token",
            None,
            Some(json!({"username": "student", "password": registrar_api::demo::DEMO_PASSWORD})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let student = body["token"].as_str().unwrap().to_string();

    let (status, _) = app.enroll(&student, &seed.course_ids[0]).await;
    assert_eq!(status, StatusCode::CREATED);
}
