//! JSON catalog loader
//!
//! Reads a catalog file holding courses, majors, minors, and student profiles
//! and returns a populated [`Catalog`]. The file format mirrors the model
//! structs directly; see `samples/catalog.json` for an example.

use crate::core::models::{Catalog, Course, Major, Minor, StudentProfile};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// On-disk catalog document
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Institution name
    #[serde(default)]
    name: String,
    /// Courses offered
    courses: Vec<Course>,
    /// Available majors
    #[serde(default)]
    majors: Vec<Major>,
    /// Available minors
    #[serde(default)]
    minors: Vec<Minor>,
    /// Student profiles
    #[serde(default)]
    students: Vec<StudentProfile>,
}

/// Parse a catalog JSON file
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// A `Catalog` populated with the file's courses, programs, and students
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or contains
/// duplicate course ids
pub fn parse_catalog_json<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;

    let mut catalog = Catalog::new(file.name);
    for course in file.courses {
        let course_id = course.course_id.clone();
        if !catalog.add_course(course) {
            return Err(format!("Duplicate course id '{course_id}' in catalog").into());
        }
    }
    for major in file.majors {
        catalog.add_major(major);
    }
    for minor in file.minors {
        catalog.add_minor(minor);
    }
    for student in file.students {
        catalog.add_student(student);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "name": "Test University",
        "courses": [
            {"course_id": "CS101", "title": "Intro to CS", "credits": 3,
             "department": "Computer Science", "level": 100},
            {"course_id": "CS225", "title": "Data Structures", "credits": 4,
             "department": "Computer Science", "level": 200,
             "prerequisites": "[\"CS101\"]"}
        ],
        "majors": [
            {"id": "cs", "name": "Computer Science",
             "required_courses": ["CS101", "CS225"]}
        ],
        "students": [
            {"id": "s1", "name": "Test Student", "major_id": "cs"}
        ]
    }"#;

    #[test]
    fn test_parse_sample_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = parse_catalog_json(file.path()).unwrap();
        assert_eq!(catalog.name, "Test University");
        assert_eq!(catalog.course_count(), 2);
        assert_eq!(catalog.majors.len(), 1);
        assert_eq!(catalog.minors.len(), 0);
        assert_eq!(catalog.students.len(), 1);

        let cs225 = catalog.get_course("CS225").unwrap();
        assert_eq!(cs225.level, 200);
        assert_eq!(cs225.prerequisites.as_deref(), Some(r#"["CS101"]"#));
    }

    #[test]
    fn test_duplicate_course_id_rejected() {
        let doc = r#"{
            "name": "Dup U",
            "courses": [
                {"course_id": "CS101", "title": "A", "credits": 3,
                 "department": "CS", "level": 100},
                {"course_id": "CS101", "title": "B", "credits": 3,
                 "department": "CS", "level": 100}
            ]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(doc.as_bytes()).unwrap();

        let err = parse_catalog_json(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate course id"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(parse_catalog_json("does/not/exist.json").is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();
        assert!(parse_catalog_json(file.path()).is_err());
    }
}
