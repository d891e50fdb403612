//! Major and minor program models

use serde::{Deserialize, Serialize};

/// Represents a major and the courses it requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    /// Unique major identifier (e.g., "cs")
    pub id: String,

    /// Display name (e.g., "Computer Science")
    pub name: String,

    /// Required course ids, in catalog order
    pub required_courses: Vec<String>,
}

impl Major {
    /// Create a new major with no required courses
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            required_courses: Vec::new(),
        }
    }

    /// Add a required course, ignoring duplicates
    pub fn add_required_course(&mut self, course_id: String) {
        if !self.required_courses.contains(&course_id) {
            self.required_courses.push(course_id);
        }
    }
}

/// Represents a minor and the courses it requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minor {
    /// Unique minor identifier (e.g., "math")
    pub id: String,

    /// Display name (e.g., "Mathematics")
    pub name: String,

    /// Required course ids, in catalog order
    pub required_courses: Vec<String>,
}

impl Minor {
    /// Create a new minor with no required courses
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            required_courses: Vec::new(),
        }
    }

    /// Add a required course, ignoring duplicates
    pub fn add_required_course(&mut self, course_id: String) {
        if !self.required_courses.contains(&course_id) {
            self.required_courses.push(course_id);
        }
    }
}
