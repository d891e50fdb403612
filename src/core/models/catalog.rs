//! Catalog model

use super::{Course, Major, Minor, StudentProfile};
use crate::core::prereq::parse_prerequisite_field;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The course catalog and everything that references it
///
/// Owns the courses offered by the institution plus the majors, minors, and
/// student profiles that point into them. This is the snapshot of collaborator
/// data a planning request works from; the scheduler never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Institution name
    pub name: String,

    /// Courses indexed by course id
    courses: HashMap<String, Course>,

    /// Available majors
    pub majors: Vec<Major>,

    /// Available minors
    pub minors: Vec<Minor>,

    /// Known student profiles
    pub students: Vec<StudentProfile>,
}

impl Catalog {
    /// Create a new empty catalog
    ///
    /// # Arguments
    /// * `name` - Institution name
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            courses: HashMap::new(),
            majors: Vec::new(),
            minors: Vec::new(),
            students: Vec::new(),
        }
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with the same id
    /// already existed (the new course replaces it)
    pub fn add_course(&mut self, course: Course) -> bool {
        self.courses
            .insert(course.course_id.clone(), course)
            .is_none()
    }

    /// Get a course by id
    #[must_use]
    pub fn get_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Add a major
    pub fn add_major(&mut self, major: Major) {
        self.majors.push(major);
    }

    /// Get a major by id
    #[must_use]
    pub fn get_major(&self, major_id: &str) -> Option<&Major> {
        self.majors.iter().find(|m| m.id == major_id)
    }

    /// Add a minor
    pub fn add_minor(&mut self, minor: Minor) {
        self.minors.push(minor);
    }

    /// Get a minor by id
    #[must_use]
    pub fn get_minor(&self, minor_id: &str) -> Option<&Minor> {
        self.minors.iter().find(|m| m.id == minor_id)
    }

    /// Add a student profile
    pub fn add_student(&mut self, student: StudentProfile) {
        self.students.push(student);
    }

    /// Get a student profile by id
    #[must_use]
    pub fn get_student(&self, student_id: &str) -> Option<&StudentProfile> {
        self.students.iter().find(|s| s.id == student_id)
    }

    /// Validate that every course required by a major or minor exists
    ///
    /// # Errors
    /// Returns `Err` with one message per dangling requirement reference
    pub fn validate_requirements(&self) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();

        for major in &self.majors {
            for course_id in &major.required_courses {
                if !self.courses.contains_key(course_id) {
                    missing.push(format!(
                        "Major '{}': missing course '{}'",
                        major.name, course_id
                    ));
                }
            }
        }

        for minor in &self.minors {
            for course_id in &minor.required_courses {
                if !self.courses.contains_key(course_id) {
                    missing.push(format!(
                        "Minor '{}': missing course '{}'",
                        minor.name, course_id
                    ));
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// Validate that every parsed prerequisite references a catalog course
    ///
    /// Prerequisites outside the catalog are not fatal for scheduling (they are
    /// treated as already satisfied), but they usually indicate stale data.
    ///
    /// # Errors
    /// Returns `Err` with one message per dangling prerequisite reference
    pub fn validate_prerequisites(&self) -> Result<(), Vec<String>> {
        let mut dangling = Vec::new();

        for course in self.courses.values() {
            let raw = course.prerequisites.as_deref().unwrap_or("");
            for prereq in parse_prerequisite_field(raw) {
                if !self.courses.contains_key(&prereq) {
                    dangling.push(format!(
                        "Course '{}': unknown prerequisite '{}'",
                        course.course_id, prereq
                    ));
                }
            }
        }

        if dangling.is_empty() {
            Ok(())
        } else {
            Err(dangling)
        }
    }
}
