//! Domain models for degree planning

mod catalog;
mod course;
mod plan;
mod program;
mod student;

pub use catalog::Catalog;
pub use course::Course;
pub use plan::{DegreePlan, PlannedSemester};
pub use program::{Major, Minor};
pub use student::{ApCredit, DualEnrollment, StudentProfile};
