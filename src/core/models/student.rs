//! Student profile model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An AP exam credit and the catalog courses it satisfies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApCredit {
    /// Exam name (e.g., "AP Computer Science A")
    pub exam: String,

    /// Course ids this exam counts as
    #[serde(default)]
    pub course_equivalents: Vec<String>,
}

/// A dual-enrollment course taken elsewhere, with an optional local equivalent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualEnrollment {
    /// Course name at the other institution
    pub course_name: String,

    /// Matching catalog course id, if any
    #[serde(default)]
    pub equivalent: Option<String>,
}

/// A student, their declared programs, and everything they have already satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Unique student identifier
    pub id: String,

    /// Student name
    pub name: String,

    /// Declared major id
    pub major_id: String,

    /// Declared minor ids
    #[serde(default)]
    pub minor_ids: Vec<String>,

    /// Course ids already placed in the student's semester dashboard
    #[serde(default)]
    pub completed_courses: Vec<String>,

    /// AP exam credits
    #[serde(default)]
    pub ap_credits: Vec<ApCredit>,

    /// Dual-enrollment courses
    #[serde(default)]
    pub dual_enrollment: Vec<DualEnrollment>,
}

impl StudentProfile {
    /// Create a new student with no completed work
    #[must_use]
    pub const fn new(id: String, name: String, major_id: String) -> Self {
        Self {
            id,
            name,
            major_id,
            minor_ids: Vec::new(),
            completed_courses: Vec::new(),
            ap_credits: Vec::new(),
            dual_enrollment: Vec::new(),
        }
    }

    /// Pre-merge every completion source into a single set of satisfied course ids.
    ///
    /// The union of (a) dashboard semester history, (b) AP-credit equivalents,
    /// and (c) dual-enrollment equivalents. Built once per planning request;
    /// the scheduler treats the result as immutable input.
    #[must_use]
    pub fn completed_set(&self) -> HashSet<String> {
        let mut completed: HashSet<String> =
            self.completed_courses.iter().cloned().collect();

        for credit in &self.ap_credits {
            completed.extend(credit.course_equivalents.iter().cloned());
        }

        for de in &self.dual_enrollment {
            if let Some(equivalent) = &de.equivalent {
                completed.insert(equivalent.clone());
            }
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_set_merges_three_sources() {
        let mut student = StudentProfile::new(
            "s1".to_string(),
            "Test Student".to_string(),
            "cs".to_string(),
        );
        student.completed_courses.push("CS101".to_string());
        student.ap_credits.push(ApCredit {
            exam: "AP Calculus BC".to_string(),
            course_equivalents: vec!["MATH231".to_string(), "MATH241".to_string()],
        });
        student.dual_enrollment.push(DualEnrollment {
            course_name: "Intro to Sociology".to_string(),
            equivalent: Some("SOC100".to_string()),
        });
        student.dual_enrollment.push(DualEnrollment {
            course_name: "Local History".to_string(),
            equivalent: None,
        });

        let completed = student.completed_set();
        assert_eq!(completed.len(), 4);
        assert!(completed.contains("CS101"));
        assert!(completed.contains("MATH231"));
        assert!(completed.contains("MATH241"));
        assert!(completed.contains("SOC100"));
    }

    #[test]
    fn test_completed_set_deduplicates_overlap() {
        let mut student = StudentProfile::new(
            "s1".to_string(),
            "Test Student".to_string(),
            "cs".to_string(),
        );
        student.completed_courses.push("MATH231".to_string());
        student.ap_credits.push(ApCredit {
            exam: "AP Calculus AB".to_string(),
            course_equivalents: vec!["MATH231".to_string()],
        });

        assert_eq!(student.completed_set().len(), 1);
    }

    #[test]
    fn test_completed_set_empty_by_default() {
        let student = StudentProfile::new(
            "s1".to_string(),
            "Test Student".to_string(),
            "cs".to_string(),
        );
        assert!(student.completed_set().is_empty());
    }
}
