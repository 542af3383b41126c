//! Value objects representing immutable domain concepts

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a new random identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Parse from string representation
            pub fn from_string(s: &str) -> DomainResult<Self> {
                uuid::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| DomainError::InvalidId {
                        entity_type: $entity.to_string(),
                        value: s.to_string(),
                    })
            }

            /// Underlying UUID
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

uuid_identifier!(
    /// User identifier
    UserId,
    "User"
);
uuid_identifier!(
    /// Semester identifier
    SemesterId,
    "Semester"
);
uuid_identifier!(
    /// Course identifier
    CourseId,
    "Course"
);
uuid_identifier!(
    /// Enrollment identifier
    EnrollmentId,
    "Enrollment"
);

/// Role of an authenticated actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    pub fn is_student(&self) -> bool {
        matches!(self, Role::Student)
    }

    pub fn is_teacher(&self) -> bool {
        matches!(self, Role::Teacher)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::validation(
                "role",
                format!("unknown role '{}', expected student, teacher or admin", other),
            )),
        }
    }
}

/// Closed time interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window, rejecting `start > end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::validation(
                "time_window",
                format!("start {} is after end {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Inclusive on both ends
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_id_parse_roundtrip() {
        let id = CourseId::new();
        let parsed = CourseId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_parse_invalid() {
        let err = SemesterId::from_string("not-a-uuid").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId { .. }));
        assert!(err.to_string().contains("Semester"));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Teacher).unwrap();
        assert_eq!(json, "\"teacher\"");
    }

    #[test]
    fn test_window_rejects_inverted_bounds() {
        assert!(TimeWindow::new(at(15), at(1)).is_err());
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let window = TimeWindow::new(at(1), at(15)).unwrap();
        assert!(window.contains(at(1)));
        assert!(window.contains(at(10)));
        assert!(window.contains(at(15)));
        assert!(!window.contains(at(16)));
    }

    #[test]
    fn test_degenerate_window_contains_its_instant() {
        let window = TimeWindow::new(at(5), at(5)).unwrap();
        assert!(window.contains(at(5)));
    }
}
