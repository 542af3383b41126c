//! Catalog Application Service
//!
//! Semester and course management plus the registration-status query.

use std::sync::Arc;

use chrono::Utc;

use registrar_domain::repositories::{
    CourseRepository, EnrollmentRepository, SemesterRepository, UserRepository,
};
use registrar_domain::{
    Clock, Course, CourseId, EligibilityService, Semester, SemesterId, TimeWindow, User, UserId,
};

use crate::access::{require_admin, require_staff};
use crate::dto::{CourseCommand, CourseDto, RegistrationStatusDto, SemesterCommand, SemesterDto};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::events::{ApplicationEvent, EventPublisher};

/// Catalog Application Service
pub struct CatalogService {
    semesters: Arc<dyn SemesterRepository>,
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    users: Arc<dyn UserRepository>,
    eligibility: EligibilityService<Arc<dyn Clock>>,
    events: Arc<dyn EventPublisher>,
}

impl CatalogService {
    /// Create a new CatalogService with injected dependencies
    pub fn new(
        semesters: Arc<dyn SemesterRepository>,
        courses: Arc<dyn CourseRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            semesters,
            courses,
            enrollments,
            users,
            eligibility: EligibilityService::new(clock),
            events,
        }
    }

    // === Semesters ===

    /// List semesters ordered by start date (admin)
    pub async fn list_semesters(&self, actor: &User) -> ApplicationResult<Vec<SemesterDto>> {
        require_admin(actor)?;
        let mut semesters = self.semesters.find_all().await?;
        semesters.sort_by_key(|s| (s.start_date(), s.name().to_string()));
        Ok(semesters.iter().map(SemesterDto::from_domain).collect())
    }

    pub async fn get_semester(&self, actor: &User, id: &str) -> ApplicationResult<SemesterDto> {
        require_admin(actor)?;
        let semester = self.load_semester(id).await?;
        Ok(SemesterDto::from_domain(&semester))
    }

    /// Create a semester (admin)
    pub async fn create_semester(
        &self,
        actor: &User,
        cmd: SemesterCommand,
    ) -> ApplicationResult<SemesterDto> {
        require_admin(actor)?;
        let (registration, add_and_drop) = windows(&cmd)?;
        let semester = Semester::new(
            cmd.name,
            cmd.start_date,
            cmd.end_date,
            registration,
            add_and_drop,
        )?;
        self.semesters.save(&semester).await?;

        tracing::info!(semester = %semester.id(), name = semester.name(), "semester created");
        self.events
            .publish(ApplicationEvent::SemesterCreated {
                semester_id: semester.id().to_string(),
                name: semester.name().to_string(),
                timestamp: Utc::now(),
            })
            .await;

        Ok(SemesterDto::from_domain(&semester))
    }

    /// Replace a semester's fields (admin)
    pub async fn update_semester(
        &self,
        actor: &User,
        id: &str,
        cmd: SemesterCommand,
    ) -> ApplicationResult<SemesterDto> {
        require_admin(actor)?;
        let mut semester = self.load_semester(id).await?;
        let (registration, add_and_drop) = windows(&cmd)?;
        semester.update(
            cmd.name,
            cmd.start_date,
            cmd.end_date,
            registration,
            add_and_drop,
        )?;
        self.semesters.save(&semester).await?;
        Ok(SemesterDto::from_domain(&semester))
    }

    /// Delete a semester and everything offered in it (admin)
    pub async fn delete_semester(&self, actor: &User, id: &str) -> ApplicationResult<()> {
        require_admin(actor)?;
        let semester = self.load_semester(id).await?;
        self.semesters.delete(&semester.id()).await?;

        self.events
            .publish(ApplicationEvent::SemesterDeleted {
                semester_id: semester.id().to_string(),
                timestamp: Utc::now(),
            })
            .await;
        Ok(())
    }

    /// Whether the semester's windows are open right now (any user)
    pub async fn registration_status(&self, id: &str) -> ApplicationResult<RegistrationStatusDto> {
        let semester = self.load_semester(id).await?;
        let now = self.eligibility.clock().now();

        let within_registration_window =
            registrar_domain::within_registration_window(&semester, now);
        let within_add_drop_window = registrar_domain::within_add_drop_window(&semester, now);

        Ok(RegistrationStatusDto {
            semester_id: semester.id().to_string(),
            checked_at: now,
            within_registration_window,
            within_add_drop_window,
            open: within_registration_window || within_add_drop_window,
        })
    }

    // === Courses ===

    /// List courses, optionally restricted to one semester
    pub async fn list_courses(&self, semester_id: Option<&str>) -> ApplicationResult<Vec<CourseDto>> {
        let mut courses = match semester_id {
            Some(id) => {
                let semester_id = SemesterId::from_string(id)?;
                self.courses.find_by_semester(&semester_id).await?
            }
            None => self.courses.find_all().await?,
        };
        courses.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(courses.iter().map(CourseDto::from_domain).collect())
    }

    pub async fn get_course(&self, id: &str) -> ApplicationResult<CourseDto> {
        let course = self.load_course(id).await?;
        Ok(CourseDto::from_domain(&course))
    }

    /// Create a course (teacher or admin)
    ///
    /// A teacher creating a course without naming one teaches it.
    pub async fn create_course(
        &self,
        actor: &User,
        cmd: CourseCommand,
    ) -> ApplicationResult<CourseDto> {
        require_staff(actor)?;
        let semester = self.load_semester(&cmd.semester_id).await?;
        let teacher_id = self.course_teacher(actor, cmd.teacher_id.as_deref()).await?;

        let course = Course::new(
            cmd.name,
            cmd.description,
            cmd.credits,
            semester.id(),
            teacher_id,
        )?;
        self.courses.save(&course).await?;

        tracing::info!(
            course = %course.id(),
            semester = %semester.id(),
            credits = course.credits(),
            "course created"
        );
        self.events
            .publish(ApplicationEvent::CourseCreated {
                course_id: course.id().to_string(),
                semester_id: semester.id().to_string(),
                credits: course.credits(),
                timestamp: Utc::now(),
            })
            .await;

        Ok(CourseDto::from_domain(&course))
    }

    /// Replace a course's fields (teacher or admin)
    ///
    /// Teacher assignment follows the same rule as creation. Credits and
    /// semester are frozen once anyone is enrolled, since changing them would
    /// move students' semester totals past the eligibility gate.
    pub async fn update_course(
        &self,
        actor: &User,
        id: &str,
        cmd: CourseCommand,
    ) -> ApplicationResult<CourseDto> {
        require_staff(actor)?;
        let mut course = self.load_course(id).await?;
        let semester = self.load_semester(&cmd.semester_id).await?;
        let teacher_id = self.course_teacher(actor, cmd.teacher_id.as_deref()).await?;

        let reshaped = cmd.credits != course.credits() || semester.id() != course.semester_id();
        if reshaped && !self.enrollments.find_by_courses(&[course.id()]).await?.is_empty() {
            return Err(ApplicationError::BusinessRuleViolation(
                "Credits and semester cannot change while students are enrolled.".to_string(),
            ));
        }

        course.update_details(cmd.name, cmd.description, cmd.credits, semester.id())?;
        course.assign_teacher(teacher_id);
        self.courses.save(&course).await?;
        Ok(CourseDto::from_domain(&course))
    }

    /// Delete a course and its enrollments (teacher or admin)
    pub async fn delete_course(&self, actor: &User, id: &str) -> ApplicationResult<()> {
        require_staff(actor)?;
        let course = self.load_course(id).await?;
        self.courses.delete(&course.id()).await?;

        self.events
            .publish(ApplicationEvent::CourseDeleted {
                course_id: course.id().to_string(),
                timestamp: Utc::now(),
            })
            .await;
        Ok(())
    }

    async fn load_semester(&self, id: &str) -> ApplicationResult<Semester> {
        let semester_id = SemesterId::from_string(id)?;
        self.semesters
            .find_by_id(&semester_id)
            .await?
            .ok_or_else(|| ApplicationError::SemesterNotFound(id.to_string()))
    }

    async fn load_course(&self, id: &str) -> ApplicationResult<Course> {
        let course_id = CourseId::from_string(id)?;
        self.courses
            .find_by_id(&course_id)
            .await?
            .ok_or_else(|| ApplicationError::CourseNotFound(id.to_string()))
    }

    /// A teacher leaving the field blank teaches the course themselves
    async fn course_teacher(
        &self,
        actor: &User,
        requested: Option<&str>,
    ) -> ApplicationResult<Option<UserId>> {
        match requested {
            Some(id) => Ok(Some(self.resolve_teacher(id).await?)),
            None if actor.role().is_teacher() => Ok(Some(actor.id())),
            None => Ok(None),
        }
    }

    async fn resolve_teacher(&self, id: &str) -> ApplicationResult<UserId> {
        let user_id = UserId::from_string(id)?;
        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| ApplicationError::UserNotFound(id.to_string()))?;
        if !user.role().is_teacher() {
            return Err(ApplicationError::ValidationFailed(
                "teacher_id: user is not a teacher".to_string(),
            ));
        }
        Ok(user.id())
    }
}

fn windows(cmd: &SemesterCommand) -> ApplicationResult<(TimeWindow, TimeWindow)> {
    let registration = TimeWindow::new(cmd.course_registration_start, cmd.course_registration_end)
        .map_err(|_| {
            ApplicationError::ValidationFailed(
                "course_registration: start must not be after end".to_string(),
            )
        })?;
    let add_and_drop = TimeWindow::new(cmd.add_and_drop_start, cmd.add_and_drop_end).map_err(
        |_| {
            ApplicationError::ValidationFailed(
                "add_and_drop: start must not be after end".to_string(),
            )
        },
    )?;
    Ok((registration, add_and_drop))
}
