//! Degree plan and planned semester models

use serde::{Deserialize, Serialize};

/// One scheduled term in a degree plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSemester {
    /// 1-based position in the plan
    pub order: u32,

    /// Display name, e.g. "Fall 2026"
    pub name: String,

    /// Course ids assigned to this semester
    pub courses: Vec<String>,
}

impl PlannedSemester {
    /// Create a new semester with no courses
    #[must_use]
    pub const fn new(order: u32, name: String) -> Self {
        Self {
            order,
            name,
            courses: Vec::new(),
        }
    }

    /// Number of courses assigned to this semester
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }
}

/// A complete degree plan for one student
///
/// A student has at most one plan at a time; regenerating replaces the
/// previous plan wholesale (see [`crate::core::planner::PlanStore`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreePlan {
    /// Owning student id
    pub student_id: String,

    /// Semesters in scheduling order
    pub semesters: Vec<PlannedSemester>,
}

impl DegreePlan {
    /// Create an empty plan for a student
    #[must_use]
    pub const fn new(student_id: String) -> Self {
        Self {
            student_id,
            semesters: Vec::new(),
        }
    }

    /// Total number of courses across all semesters
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(PlannedSemester::course_count).sum()
    }

    /// Look up the 1-based order of the semester containing a course
    #[must_use]
    pub fn semester_of(&self, course_id: &str) -> Option<u32> {
        self.semesters
            .iter()
            .find(|s| s.courses.iter().any(|c| c == course_id))
            .map(|s| s.order)
    }
}
