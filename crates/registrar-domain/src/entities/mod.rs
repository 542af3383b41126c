//! Domain entities

mod course;
mod enrollment;
mod semester;
mod user;

pub use course::Course;
pub use enrollment::{EnrolledCourse, Enrollment};
pub use semester::Semester;
pub use user::User;
