//! Scenario tests for the enrollment eligibility rules

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use registrar_domain::errors::*;
use registrar_domain::value_objects::*;
use registrar_domain::{
    validate_enrollment_create, validate_enrollment_destroy, within_add_drop_window,
    within_registration_window, Course, CourseOffering, EligibilityService, EnrolledCourse,
    Enrollment, EnrollmentRejection, FixedClock, Semester, User, MAX_SEMESTER_CREDITS,
};

fn instant(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap()
}

/// Registration 2024-08-01..=2024-08-15, add/drop 2024-08-19..=2024-08-26
fn fall_2024() -> Semester {
    Semester::new(
        "Fall 2024".to_string(),
        NaiveDate::from_ymd_opt(2024, 8, 26).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 13).unwrap(),
        TimeWindow::new(
            Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 8, 15, 23, 59, 59).unwrap(),
        )
        .unwrap(),
        TimeWindow::new(
            Utc.with_ymd_and_hms(2024, 8, 19, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 8, 26, 23, 59, 59).unwrap(),
        )
        .unwrap(),
    )
    .unwrap()
}

fn actor(role: Role) -> User {
    User::new(
        format!("{}-1", role),
        Some(format!("{}@college.edu", role)),
        role,
        "$2b$04$hash".to_string(),
    )
    .unwrap()
}

fn course_in(semester: &Semester, credits: u32) -> Course {
    Course::new(
        format!("{}-credit course", credits),
        "test course".to_string(),
        credits,
        semester.id(),
        None,
    )
    .unwrap()
}

fn holdings(student: &User, semester: &Semester, credits: &[u32]) -> Vec<EnrolledCourse> {
    credits
        .iter()
        .map(|c| {
            let course = course_in(semester, *c);
            EnrolledCourse::new(Enrollment::new(student.id(), course.id()), course)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scenario_tests {
        use super::*;

        #[test]
        fn test_scenario_a_open_window_and_room_to_spare() {
            let semester = fall_2024();
            let student = actor(Role::Student);
            let course = course_in(&semester, 15);
            let offering = CourseOffering::new(&course, &semester).unwrap();

            let result = validate_enrollment_create(&student, offering, &[], instant(8, 10));
            assert!(result.is_ok());
        }

        #[test]
        fn test_scenario_b_credit_cap_exceeded() {
            let semester = fall_2024();
            let student = actor(Role::Student);
            let existing = holdings(&student, &semester, &[9, 9]);
            let course = course_in(&semester, 5);
            let offering = CourseOffering::new(&course, &semester).unwrap();

            let result = validate_enrollment_create(&student, offering, &existing, instant(8, 10));
            assert_eq!(
                result,
                Err(EnrollmentRejection::CreditLimitExceeded {
                    enrolled: 18,
                    requested: 5
                })
            );
        }

        #[test]
        fn test_scenario_c_outside_both_windows() {
            let semester = fall_2024();
            let student = actor(Role::Student);
            let course = course_in(&semester, 3);
            let offering = CourseOffering::new(&course, &semester).unwrap();

            let result = validate_enrollment_create(&student, offering, &[], instant(9, 1));
            assert_eq!(result, Err(EnrollmentRejection::RegistrationClosed));
        }

        #[test]
        fn test_scenario_d_teacher_cannot_enroll() {
            let semester = fall_2024();
            let teacher = actor(Role::Teacher);
            let course = course_in(&semester, 3);
            let offering = CourseOffering::new(&course, &semester).unwrap();

            let result = validate_enrollment_create(&teacher, offering, &[], instant(8, 10));
            assert_eq!(result, Err(EnrollmentRejection::NotAStudent));
        }
    }

    mod window_tests {
        use super::*;

        #[test]
        fn test_gap_between_windows_is_closed() {
            let semester = fall_2024();
            let now = instant(8, 17);
            assert!(!within_registration_window(&semester, now));
            assert!(!within_add_drop_window(&semester, now));

            let course = course_in(&semester, 3);
            let offering = CourseOffering::new(&course, &semester).unwrap();
            assert_eq!(
                validate_enrollment_destroy(offering, now),
                Err(EnrollmentRejection::RegistrationClosed)
            );
        }

        #[test]
        fn test_destroy_allowed_during_registration() {
            let semester = fall_2024();
            let course = course_in(&semester, 3);
            let offering = CourseOffering::new(&course, &semester).unwrap();
            assert!(validate_enrollment_destroy(offering, instant(8, 2)).is_ok());
        }

        #[test]
        fn test_destroy_allowed_during_add_drop() {
            let semester = fall_2024();
            let course = course_in(&semester, 3);
            let offering = CourseOffering::new(&course, &semester).unwrap();
            assert!(validate_enrollment_destroy(offering, instant(8, 20)).is_ok());
        }

        #[test]
        fn test_window_edges_are_inclusive() {
            let semester = fall_2024();
            let reg = *semester.course_registration();
            assert!(within_registration_window(&semester, reg.start()));
            assert!(within_registration_window(&semester, reg.end()));
            assert!(!within_registration_window(
                &semester,
                reg.end() + chrono::Duration::seconds(1)
            ));
        }

        #[test]
        fn test_overlapping_windows_still_open() {
            let semester = Semester::new(
                "Spring 2025".to_string(),
                NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
                NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
                TimeWindow::new(instant(11, 1), instant(11, 30)).unwrap(),
                TimeWindow::new(instant(11, 20), instant(12, 10)).unwrap(),
            )
            .unwrap();

            assert!(within_registration_window(&semester, instant(11, 25)));
            assert!(within_add_drop_window(&semester, instant(11, 25)));
        }
    }

    mod credit_tests {
        use super::*;

        #[test]
        fn test_exactly_at_cap_is_allowed() {
            let semester = fall_2024();
            let student = actor(Role::Student);
            let existing = holdings(&student, &semester, &[4, 4, 4, 4]);
            let course = course_in(&semester, 4);
            let offering = CourseOffering::new(&course, &semester).unwrap();

            assert_eq!(MAX_SEMESTER_CREDITS, 20);
            assert!(validate_enrollment_create(&student, offering, &existing, instant(8, 10)).is_ok());
        }

        #[test]
        fn test_one_over_cap_is_rejected() {
            let semester = fall_2024();
            let student = actor(Role::Student);
            let existing = holdings(&student, &semester, &[4, 4, 4, 4]);
            let course = course_in(&semester, 5);
            let offering = CourseOffering::new(&course, &semester).unwrap();

            assert!(matches!(
                validate_enrollment_create(&student, offering, &existing, instant(8, 10)),
                Err(EnrollmentRejection::CreditLimitExceeded { .. })
            ));
        }

        #[test]
        fn test_single_course_over_cap() {
            let semester = fall_2024();
            let student = actor(Role::Student);
            let course = course_in(&semester, 21);
            let offering = CourseOffering::new(&course, &semester).unwrap();

            assert!(validate_enrollment_create(&student, offering, &[], instant(8, 10)).is_err());
        }
    }

    mod service_tests {
        use super::*;

        #[test]
        fn test_service_follows_clock_across_windows() {
            let semester = fall_2024();
            let student = actor(Role::Student);
            let course = course_in(&semester, 3);
            let offering = CourseOffering::new(&course, &semester).unwrap();
            let service = EligibilityService::new(FixedClock::new(instant(7, 31)));

            assert_eq!(
                service.validate_create(&student, offering, &[]),
                Err(EnrollmentRejection::RegistrationClosed)
            );

            service.clock().set(instant(8, 1));
            assert!(service.validate_create(&student, offering, &[]).is_ok());
            assert!(service.within_registration_window(&semester));
            assert!(!service.within_add_drop_window(&semester));
        }

        #[test]
        fn test_rejection_into_domain_error() {
            let err: DomainError = EnrollmentRejection::RegistrationClosed.into();
            assert_eq!(
                err.to_string(),
                "Enrollment rejected: Course registration is not currently open."
            );
        }

        #[test]
        fn test_mismatched_offering_is_a_rule_violation() {
            let fall = fall_2024();
            let other = fall_2024();
            let course = course_in(&other, 3);
            assert!(matches!(
                CourseOffering::new(&course, &fall),
                Err(DomainError::BusinessRuleViolation { .. })
            ));
        }
    }
}
