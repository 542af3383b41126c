//! Semester entity with its registration and add/drop windows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{SemesterId, TimeWindow};

const MAX_SEMESTER_NAME_LEN: usize = 20;

/// An academic term, e.g. "Fall 2024"
///
/// The registration and add/drop windows are independent; the domain does not
/// require them to be ordered relative to each other or to the term dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Semester {
    id: SemesterId,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    course_registration: TimeWindow,
    add_and_drop: TimeWindow,
}

impl Semester {
    pub fn new(
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        course_registration: TimeWindow,
        add_and_drop: TimeWindow,
    ) -> DomainResult<Self> {
        Self::validate(&name, start_date, end_date)?;
        Ok(Self {
            id: SemesterId::new(),
            name,
            start_date,
            end_date,
            course_registration,
            add_and_drop,
        })
    }

    pub fn id(&self) -> SemesterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn course_registration(&self) -> &TimeWindow {
        &self.course_registration
    }

    pub fn add_and_drop(&self) -> &TimeWindow {
        &self.add_and_drop
    }

    /// Replace every mutable attribute at once
    pub fn update(
        &mut self,
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        course_registration: TimeWindow,
        add_and_drop: TimeWindow,
    ) -> DomainResult<()> {
        Self::validate(&name, start_date, end_date)?;
        self.name = name;
        self.start_date = start_date;
        self.end_date = end_date;
        self.course_registration = course_registration;
        self.add_and_drop = add_and_drop;
        Ok(())
    }

    fn validate(name: &str, start_date: NaiveDate, end_date: NaiveDate) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "cannot be empty"));
        }
        if name.chars().count() > MAX_SEMESTER_NAME_LEN {
            return Err(DomainError::validation(
                "name",
                format!("cannot exceed {} characters", MAX_SEMESTER_NAME_LEN),
            ));
        }
        if start_date > end_date {
            return Err(DomainError::validation(
                "end_date",
                "semester cannot end before it starts",
            ));
        }
        Ok(())
    }
}
