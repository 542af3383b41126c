//! Enrollment Application Service
//!
//! Add and drop go through the eligibility gates; the check and the save
//! happen while holding the (student, semester) permit so concurrent adds
//! cannot jointly exceed the credit cap.

use std::sync::Arc;

use chrono::Utc;

use registrar_domain::repositories::{CourseRepository, EnrollmentRepository, SemesterRepository};
use registrar_domain::{
    Clock, Course, CourseId, CourseOffering, EligibilityService, Enrollment, EnrollmentGuard,
    EnrollmentId, EnrollmentRejection, Role, Semester, User,
};

use crate::access::{require_role, require_staff};
use crate::dto::{CreateEnrollmentCommand, EnrollmentDto, RecordGradesCommand, ScheduleEntryDto};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::events::{ApplicationEvent, EventPublisher};

/// Enrollment Application Service
pub struct EnrollmentService {
    enrollments: Arc<dyn EnrollmentRepository>,
    courses: Arc<dyn CourseRepository>,
    semesters: Arc<dyn SemesterRepository>,
    eligibility: EligibilityService<Arc<dyn Clock>>,
    guard: Arc<dyn EnrollmentGuard>,
    events: Arc<dyn EventPublisher>,
}

impl EnrollmentService {
    /// Create a new EnrollmentService with injected dependencies
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        courses: Arc<dyn CourseRepository>,
        semesters: Arc<dyn SemesterRepository>,
        clock: Arc<dyn Clock>,
        guard: Arc<dyn EnrollmentGuard>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            enrollments,
            courses,
            semesters,
            eligibility: EligibilityService::new(clock),
            guard,
            events,
        }
    }

    /// Enroll the calling student in a course
    pub async fn enroll(
        &self,
        actor: &User,
        cmd: CreateEnrollmentCommand,
    ) -> ApplicationResult<EnrollmentDto> {
        if !actor.role().is_student() {
            return Err(self
                .reject(actor, &cmd.course_id, EnrollmentRejection::NotAStudent)
                .await);
        }

        let course = self.load_course(&cmd.course_id).await?;
        let semester = self.load_semester_of(&course).await?;
        let offering = CourseOffering::new(&course, &semester)?;

        let _permit = self.guard.acquire(actor.id(), semester.id()).await;

        let existing = self
            .enrollments
            .find_by_student_in_semester(&actor.id(), &semester.id())
            .await?;

        if let Err(rejection) = self.eligibility.validate_create(actor, offering, &existing) {
            return Err(self.reject(actor, &cmd.course_id, rejection).await);
        }

        if existing
            .iter()
            .any(|entry| entry.enrollment.course_id() == course.id())
        {
            return Err(ApplicationError::AlreadyEnrolled(course.id().to_string()));
        }

        let enrollment = Enrollment::new(actor.id(), course.id());
        self.enrollments.save(&enrollment).await?;

        tracing::info!(
            enrollment = %enrollment.id(),
            student = %actor.id(),
            course = %course.id(),
            "student enrolled"
        );
        self.events
            .publish(ApplicationEvent::EnrollmentCreated {
                enrollment_id: enrollment.id().to_string(),
                student_id: actor.id().to_string(),
                course_id: course.id().to_string(),
                timestamp: Utc::now(),
            })
            .await;

        Ok(EnrollmentDto::from_domain(&enrollment))
    }

    /// Drop one of the calling student's enrollments
    pub async fn drop_enrollment(&self, actor: &User, id: &str) -> ApplicationResult<()> {
        require_role(actor, &[Role::Student])?;
        let enrollment = self.load(id).await?;
        if enrollment.student_id() != actor.id() {
            return Err(ApplicationError::Forbidden(
                crate::access::PERMISSION_DENIED.to_string(),
            ));
        }

        let course = self.load_course(&enrollment.course_id().to_string()).await?;
        let semester = self.load_semester_of(&course).await?;
        let offering = CourseOffering::new(&course, &semester)?;

        let _permit = self.guard.acquire(actor.id(), semester.id()).await;

        if let Err(rejection) = self.eligibility.validate_destroy(offering) {
            return Err(self
                .reject(actor, &course.id().to_string(), rejection)
                .await);
        }

        self.enrollments.delete(&enrollment.id()).await?;

        tracing::info!(
            enrollment = %enrollment.id(),
            student = %actor.id(),
            course = %course.id(),
            "enrollment dropped"
        );
        self.events
            .publish(ApplicationEvent::EnrollmentDropped {
                enrollment_id: enrollment.id().to_string(),
                student_id: actor.id().to_string(),
                course_id: course.id().to_string(),
                timestamp: Utc::now(),
            })
            .await;
        Ok(())
    }

    /// All enrollments, newest first
    pub async fn list(&self) -> ApplicationResult<Vec<EnrollmentDto>> {
        let mut enrollments = self.enrollments.find_all().await?;
        enrollments.sort_by_key(|e| std::cmp::Reverse(e.created_at()));
        Ok(enrollments.iter().map(EnrollmentDto::from_domain).collect())
    }

    pub async fn get(&self, id: &str) -> ApplicationResult<EnrollmentDto> {
        let enrollment = self.load(id).await?;
        Ok(EnrollmentDto::from_domain(&enrollment))
    }

    /// The calling student's schedule across all semesters
    pub async fn my_courses(&self, actor: &User) -> ApplicationResult<Vec<ScheduleEntryDto>> {
        require_role(actor, &[Role::Student])?;
        let mut schedule = self.enrollments.find_by_student(&actor.id()).await?;
        schedule.sort_by(|a, b| a.course.name().cmp(b.course.name()));
        Ok(schedule.iter().map(ScheduleEntryDto::from_domain).collect())
    }

    /// Enrollments in the courses the calling teacher teaches
    pub async fn my_students(&self, actor: &User) -> ApplicationResult<Vec<EnrollmentDto>> {
        require_role(actor, &[Role::Teacher])?;
        let course_ids: Vec<CourseId> = self
            .courses
            .find_by_teacher(&actor.id())
            .await?
            .iter()
            .map(Course::id)
            .collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let enrollments = self.enrollments.find_by_courses(&course_ids).await?;
        Ok(enrollments.iter().map(EnrollmentDto::from_domain).collect())
    }

    /// Record midterm and/or final grades (teacher or admin)
    pub async fn record_grades(
        &self,
        actor: &User,
        id: &str,
        cmd: RecordGradesCommand,
    ) -> ApplicationResult<EnrollmentDto> {
        require_staff(actor)?;
        let mut enrollment = self.load(id).await?;
        enrollment.record_grades(cmd.midterm_grade, cmd.final_grade)?;
        self.enrollments.save(&enrollment).await?;

        self.events
            .publish(ApplicationEvent::GradesRecorded {
                enrollment_id: enrollment.id().to_string(),
                recorded_by: actor.id().to_string(),
                timestamp: Utc::now(),
            })
            .await;

        Ok(EnrollmentDto::from_domain(&enrollment))
    }

    async fn reject(
        &self,
        actor: &User,
        course_id: &str,
        rejection: EnrollmentRejection,
    ) -> ApplicationError {
        tracing::info!(
            student = %actor.id(),
            course = course_id,
            reason = rejection.code(),
            "enrollment change rejected"
        );
        self.events
            .publish(ApplicationEvent::EnrollmentRejected {
                student_id: actor.id().to_string(),
                course_id: course_id.to_string(),
                reason: rejection,
                timestamp: Utc::now(),
            })
            .await;
        ApplicationError::EnrollmentRejected(rejection)
    }

    async fn load(&self, id: &str) -> ApplicationResult<Enrollment> {
        let enrollment_id = EnrollmentId::from_string(id)?;
        self.enrollments
            .find_by_id(&enrollment_id)
            .await?
            .ok_or_else(|| ApplicationError::EnrollmentNotFound(id.to_string()))
    }

    async fn load_course(&self, id: &str) -> ApplicationResult<Course> {
        let course_id = CourseId::from_string(id)?;
        self.courses
            .find_by_id(&course_id)
            .await?
            .ok_or_else(|| ApplicationError::CourseNotFound(id.to_string()))
    }

    async fn load_semester_of(&self, course: &Course) -> ApplicationResult<Semester> {
        self.semesters
            .find_by_id(&course.semester_id())
            .await?
            .ok_or_else(|| ApplicationError::SemesterNotFound(course.semester_id().to_string()))
    }
}
