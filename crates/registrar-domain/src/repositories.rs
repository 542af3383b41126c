//! Repository interfaces for data persistence
//!
//! The domain layer defines only the contracts; infrastructure crates
//! provide the implementations.

use async_trait::async_trait;

use crate::{
    entities::{Course, EnrolledCourse, Enrollment, Semester, User},
    errors::DomainResult,
    value_objects::{CourseId, EnrollmentId, SemesterId, UserId},
};

/// Repository for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save (insert or replace) a user
    async fn save(&self, user: &User) -> DomainResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    /// Find all users
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Delete user by ID, cascading to their enrollments and tokens
    async fn delete(&self, id: &UserId) -> DomainResult<()>;
}

/// Repository for semesters
#[async_trait]
pub trait SemesterRepository: Send + Sync {
    async fn save(&self, semester: &Semester) -> DomainResult<()>;

    async fn find_by_id(&self, id: &SemesterId) -> DomainResult<Option<Semester>>;

    async fn find_all(&self) -> DomainResult<Vec<Semester>>;

    /// Delete semester by ID, cascading to its courses
    async fn delete(&self, id: &SemesterId) -> DomainResult<()>;
}

/// Repository for courses
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn save(&self, course: &Course) -> DomainResult<()>;

    async fn find_by_id(&self, id: &CourseId) -> DomainResult<Option<Course>>;

    async fn find_all(&self) -> DomainResult<Vec<Course>>;

    /// Courses offered in a semester
    async fn find_by_semester(&self, semester_id: &SemesterId) -> DomainResult<Vec<Course>>;

    /// Courses assigned to a teacher
    async fn find_by_teacher(&self, teacher_id: &UserId) -> DomainResult<Vec<Course>>;

    /// Delete course by ID, cascading to its enrollments
    async fn delete(&self, id: &CourseId) -> DomainResult<()>;
}

/// Repository for enrollments
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn save(&self, enrollment: &Enrollment) -> DomainResult<()>;

    async fn find_by_id(&self, id: &EnrollmentId) -> DomainResult<Option<Enrollment>>;

    async fn find_all(&self) -> DomainResult<Vec<Enrollment>>;

    /// All enrollments held by a student, joined with their courses
    async fn find_by_student(&self, student_id: &UserId) -> DomainResult<Vec<EnrolledCourse>>;

    /// A student's enrollments restricted to courses of one semester
    async fn find_by_student_in_semester(
        &self,
        student_id: &UserId,
        semester_id: &SemesterId,
    ) -> DomainResult<Vec<EnrolledCourse>>;

    /// Enrollments in any of the given courses
    async fn find_by_courses(&self, course_ids: &[CourseId]) -> DomainResult<Vec<Enrollment>>;

    async fn delete(&self, id: &EnrollmentId) -> DomainResult<()>;
}

/// Repository for opaque API tokens, one per user
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Return the user's token, issuing one if none exists
    async fn get_or_create(&self, user_id: &UserId) -> DomainResult<String>;

    /// Resolve a token to its owner
    async fn find_user_id(&self, token: &str) -> DomainResult<Option<UserId>>;

    /// Revoke every token issued to a user
    async fn revoke(&self, user_id: &UserId) -> DomainResult<()>;
}
