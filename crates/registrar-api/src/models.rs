//! API request and response models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use registrar_application::dto::{
    CourseCommand, CourseDto, CreateEnrollmentCommand, EnrollmentDto, ObtainTokenCommand,
    RecordGradesCommand, RegisterUserCommand, RegistrationStatusDto, ScheduleEntryDto,
    SemesterCommand, SemesterDto, TokenDto, UpdateUserCommand, UserDto,
};
use registrar_domain::Role;

/// User role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Student,
    Teacher,
    Admin,
}

impl From<RoleName> for Role {
    fn from(role: RoleName) -> Self {
        match role {
            RoleName::Student => Role::Student,
            RoleName::Teacher => Role::Teacher,
            RoleName::Admin => Role::Admin,
        }
    }
}

impl From<Role> for RoleName {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => RoleName::Student,
            Role::Teacher => RoleName::Teacher,
            Role::Admin => RoleName::Admin,
        }
    }
}

// === Accounts ===

/// Account creation request (self-registration or admin)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    /// At least 8 characters
    pub password: String,
    pub email: Option<String>,
    pub role: RoleName,
}

impl From<RegisterRequest> for RegisterUserCommand {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            email: req.email,
            role: req.role.into(),
        }
    }
}

/// Credentials exchanged for a token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl From<TokenRequest> for ObtainTokenCommand {
    fn from(req: TokenRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
        }
    }
}

/// Issued token; send it back as `Authorization: Token <token>`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub user_id: String,
    pub email: Option<String>,
    pub role: RoleName,
}

impl From<TokenDto> for TokenResponse {
    fn from(dto: TokenDto) -> Self {
        Self {
            token: dto.token,
            user_id: dto.user_id,
            email: dto.email,
            role: dto.role.into(),
        }
    }
}

/// Partial user update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<RoleName>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserCommand {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            role: req.role.map(Into::into),
            password: req.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: RoleName,
    pub created_at: DateTime<Utc>,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            role: dto.role.into(),
            created_at: dto.created_at,
        }
    }
}

// === Semesters ===

/// Semester fields; windows are inclusive at both ends
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SemesterRequest {
    /// Up to 20 characters
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_registration_start: DateTime<Utc>,
    pub course_registration_end: DateTime<Utc>,
    pub add_and_drop_start: DateTime<Utc>,
    pub add_and_drop_end: DateTime<Utc>,
}

impl From<SemesterRequest> for SemesterCommand {
    fn from(req: SemesterRequest) -> Self {
        Self {
            name: req.name,
            start_date: req.start_date,
            end_date: req.end_date,
            course_registration_start: req.course_registration_start,
            course_registration_end: req.course_registration_end,
            add_and_drop_start: req.add_and_drop_start,
            add_and_drop_end: req.add_and_drop_end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SemesterResponse {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_registration_start: DateTime<Utc>,
    pub course_registration_end: DateTime<Utc>,
    pub add_and_drop_start: DateTime<Utc>,
    pub add_and_drop_end: DateTime<Utc>,
}

impl From<SemesterDto> for SemesterResponse {
    fn from(dto: SemesterDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            course_registration_start: dto.course_registration_start,
            course_registration_end: dto.course_registration_end,
            add_and_drop_start: dto.add_and_drop_start,
            add_and_drop_end: dto.add_and_drop_end,
        }
    }
}

/// Whether add/drop is possible right now
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationStatusResponse {
    pub semester_id: String,
    pub checked_at: DateTime<Utc>,
    pub within_registration_window: bool,
    pub within_add_drop_window: bool,
    pub open: bool,
}

impl From<RegistrationStatusDto> for RegistrationStatusResponse {
    fn from(dto: RegistrationStatusDto) -> Self {
        Self {
            semester_id: dto.semester_id,
            checked_at: dto.checked_at,
            within_registration_window: dto.within_registration_window,
            within_add_drop_window: dto.within_add_drop_window,
            open: dto.open,
        }
    }
}

// === Courses ===

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseRequest {
    /// Up to 100 characters
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Positive credit count
    pub credits: u32,
    pub semester_id: String,
    /// Must name a teacher; defaults to the caller when a teacher creates
    pub teacher_id: Option<String>,
}

impl From<CourseRequest> for CourseCommand {
    fn from(req: CourseRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            credits: req.credits,
            semester_id: req.semester_id,
            teacher_id: req.teacher_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub credits: u32,
    pub semester_id: String,
    pub teacher_id: Option<String>,
}

impl From<CourseDto> for CourseResponse {
    fn from(dto: CourseDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            credits: dto.credits,
            semester_id: dto.semester_id,
            teacher_id: dto.teacher_id,
        }
    }
}

/// Query parameters for course listing
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCoursesQuery {
    /// Only courses offered in this semester
    pub semester_id: Option<String>,
}

// === Enrollments ===

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentRequest {
    pub course_id: String,
}

impl From<EnrollmentRequest> for CreateEnrollmentCommand {
    fn from(req: EnrollmentRequest) -> Self {
        Self {
            course_id: req.course_id,
        }
    }
}

/// Grades to record; omitted grades are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GradesRequest {
    /// 0 to 100
    pub midterm_grade: Option<f64>,
    /// 0 to 100
    pub final_grade: Option<f64>,
}

impl From<GradesRequest> for RecordGradesCommand {
    fn from(req: GradesRequest) -> Self {
        Self {
            midterm_grade: req.midterm_grade,
            final_grade: req.final_grade,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub midterm_grade: Option<f64>,
    pub final_grade: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<EnrollmentDto> for EnrollmentResponse {
    fn from(dto: EnrollmentDto) -> Self {
        Self {
            id: dto.id,
            student_id: dto.student_id,
            course_id: dto.course_id,
            midterm_grade: dto.midterm_grade,
            final_grade: dto.final_grade,
            created_at: dto.created_at,
        }
    }
}

/// One row of a student's schedule
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleEntryResponse {
    pub enrollment: EnrollmentResponse,
    pub course_name: String,
    pub credits: u32,
    pub semester_id: String,
}

impl From<ScheduleEntryDto> for ScheduleEntryResponse {
    fn from(dto: ScheduleEntryDto) -> Self {
        Self {
            enrollment: dto.enrollment.into(),
            course_name: dto.course_name,
            credits: dto.credits,
            semester_id: dto.semester_id,
        }
    }
}

// === Misc ===

/// Liveness probe response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Error envelope returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable category, e.g. `registration_closed`
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}
