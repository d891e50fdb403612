//! Course model

use serde::{Deserialize, Serialize};

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (e.g., "CS225")
    pub course_id: String,

    /// Course title (e.g., "Data Structures")
    pub title: String,

    /// Credit hours
    pub credits: u32,

    /// Offering department (e.g., "Computer Science")
    pub department: String,

    /// Numeric level (100/200/300/400); used as the scheduling sort tiebreak
    pub level: u32,

    /// Free-form course description
    #[serde(default)]
    pub description: Option<String>,

    /// Raw prerequisite field as stored in the catalog.
    ///
    /// Either a JSON array of course ids (`["CS101","MATH220"]`) or a
    /// comma-separated list (`CS101, MATH220`). Parsed by
    /// [`crate::core::prereq::parse_prerequisite_field`].
    #[serde(default)]
    pub prerequisites: Option<String>,
}

impl Course {
    /// Create a new course with no description or prerequisites
    ///
    /// # Arguments
    /// * `course_id` - Unique course identifier
    /// * `title` - Full course title
    /// * `department` - Offering department
    /// * `credits` - Credit hours
    /// * `level` - Numeric course level
    #[must_use]
    pub const fn new(
        course_id: String,
        title: String,
        department: String,
        credits: u32,
        level: u32,
    ) -> Self {
        Self {
            course_id,
            title,
            credits,
            department,
            level,
            description: None,
            prerequisites: None,
        }
    }

    /// Set the raw prerequisite field
    pub fn set_prerequisites(&mut self, raw: String) {
        self.prerequisites = Some(raw);
    }

    /// Set the course description
    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }
}
