//! Course entity

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CourseId, SemesterId, UserId};

const MAX_COURSE_NAME_LEN: usize = 100;

/// A course offered in exactly one semester
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    id: CourseId,
    name: String,
    description: String,
    credits: u32,
    teacher_id: Option<UserId>,
    semester_id: SemesterId,
}

impl Course {
    pub fn new(
        name: String,
        description: String,
        credits: u32,
        semester_id: SemesterId,
        teacher_id: Option<UserId>,
    ) -> DomainResult<Self> {
        Self::validate(&name, credits)?;
        Ok(Self {
            id: CourseId::new(),
            name,
            description,
            credits,
            teacher_id,
            semester_id,
        })
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn teacher_id(&self) -> Option<UserId> {
        self.teacher_id
    }

    pub fn semester_id(&self) -> SemesterId {
        self.semester_id
    }

    /// Whether `user` is the assigned teacher
    pub fn is_taught_by(&self, user: UserId) -> bool {
        self.teacher_id == Some(user)
    }

    /// Replace name, description, credits and semester
    pub fn update_details(
        &mut self,
        name: String,
        description: String,
        credits: u32,
        semester_id: SemesterId,
    ) -> DomainResult<()> {
        Self::validate(&name, credits)?;
        self.name = name;
        self.description = description;
        self.credits = credits;
        self.semester_id = semester_id;
        Ok(())
    }

    pub fn assign_teacher(&mut self, teacher_id: Option<UserId>) {
        self.teacher_id = teacher_id;
    }

    fn validate(name: &str, credits: u32) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "cannot be empty"));
        }
        if name.chars().count() > MAX_COURSE_NAME_LEN {
            return Err(DomainError::validation(
                "name",
                format!("cannot exceed {} characters", MAX_COURSE_NAME_LEN),
            ));
        }
        if credits == 0 {
            return Err(DomainError::validation("credits", "must be positive"));
        }
        Ok(())
    }
}
