//! Prerequisite field parsing and the per-request prerequisite map
//!
//! Catalog rows store prerequisites as a raw string in one of two shapes: a
//! JSON array of course ids (the scraper's output) or a legacy comma-separated
//! list (hand-entered rows). Parsing tries the structured form first and only
//! then falls back to splitting, rather than silently swallowing errors.

use crate::core::models::Course;
use logger::warn;
use std::collections::HashMap;

/// Parse a raw prerequisite field into course ids.
///
/// 1. Try a JSON array of strings.
/// 2. If the field is valid JSON of any other shape, it is malformed data:
///    log a data-quality warning and treat the course as having no
///    prerequisites (non-fatal).
/// 3. Otherwise split on commas and trim whitespace.
///
/// Empty or blank input yields an empty list.
#[must_use]
pub fn parse_prerequisite_field(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if let Ok(ids) = serde_json::from_str::<Vec<String>>(trimmed) {
        return ids;
    }

    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        warn!("Malformed prerequisite field (valid JSON, not a string array): {trimmed}");
        return Vec::new();
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Maps each course id to its prerequisite course ids
///
/// Built once per planning request from the requirement set's raw prerequisite
/// fields; immutable during scheduling.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteMap {
    entries: HashMap<String, Vec<String>>,
}

impl PrerequisiteMap {
    /// Build a prerequisite map from a set of courses
    #[must_use]
    pub fn from_courses<'a, I>(courses: I) -> Self
    where
        I: IntoIterator<Item = &'a Course>,
    {
        let entries = courses
            .into_iter()
            .map(|course| {
                let raw = course.prerequisites.as_deref().unwrap_or("");
                (course.course_id.clone(), parse_prerequisite_field(raw))
            })
            .collect();
        Self { entries }
    }

    /// Prerequisites for a course (empty when unknown)
    #[must_use]
    pub fn prerequisites_of(&self, course_id: &str) -> &[String] {
        self.entries.get(course_id).map_or(&[], Vec::as_slice)
    }

    /// Number of courses with an entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
