//! Demo data for local runs

use chrono::{DateTime, Duration, Utc};
use registrar_application::{
    CourseCommand, ObtainTokenCommand, RegisterUserCommand, SemesterCommand,
};
use registrar_domain::Role;

use crate::state::AppState;

/// Password shared by every seeded account
pub const DEMO_PASSWORD: &str = "registrar-demo";

/// Ids of the seeded records
#[derive(Debug, Clone)]
pub struct DemoSeed {
    /// `admin`
    pub admin_id: String,
    /// `teacher`
    pub teacher_id: String,
    /// `student`
    pub student_id: String,
    /// Semester whose registration window contains `now`
    pub semester_id: String,
    /// Courses offered in that semester
    pub course_ids: Vec<String>,
}

/// Seed an admin, a teacher, a student and a semester open for registration
pub async fn seed_demo(state: &AppState, now: DateTime<Utc>) -> anyhow::Result<DemoSeed> {
    let account = |username: &str, role: Role| RegisterUserCommand {
        username: username.to_string(),
        password: DEMO_PASSWORD.to_string(),
        email: Some(format!("{username}@registrar.local")),
        role,
    };

    let admin = state
        .accounts
        .bootstrap_admin(account("admin", Role::Admin))
        .await?;
    let teacher = state
        .accounts
        .register(account("teacher", Role::Teacher))
        .await?;
    let student = state
        .accounts
        .register(account("student", Role::Student))
        .await?;

    let token = state
        .accounts
        .obtain_token(ObtainTokenCommand {
            username: admin.username.clone(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await?;
    let admin_user = state.accounts.authenticate(&token.token).await?;

    let registration_end = now + Duration::days(14);
    let semester = state
        .catalog
        .create_semester(
            &admin_user,
            SemesterCommand {
                name: "Demo Semester".to_string(),
                start_date: (now + Duration::days(30)).date_naive(),
                end_date: (now + Duration::days(150)).date_naive(),
                course_registration_start: now - Duration::days(1),
                course_registration_end: registration_end,
                add_and_drop_start: registration_end + Duration::days(7),
                add_and_drop_end: registration_end + Duration::days(21),
            },
        )
        .await?;

    let mut course_ids = Vec::new();
    for (name, credits) in [("Algorithms", 4), ("Databases", 3), ("Operating Systems", 4)] {
        let course = state
            .catalog
            .create_course(
                &admin_user,
                CourseCommand {
                    name: name.to_string(),
                    description: format!("{name} (demo)"),
                    credits,
                    semester_id: semester.id.clone(),
                    teacher_id: Some(teacher.id.clone()),
                },
            )
            .await?;
        course_ids.push(course.id);
    }

    tracing::info!(
        semester = %semester.id,
        courses = course_ids.len(),
        "seeded demo data; log in as admin, teacher or student"
    );

    Ok(DemoSeed {
        admin_id: admin.id,
        teacher_id: teacher.id,
        student_id: student.id,
        semester_id: semester.id,
        course_ids,
    })
}
