//! End-to-end planning tests: catalog JSON in, degree plan out

use degree_planner::core::{
    error::{PlanError, ResourceKind},
    loader::parse_catalog_json,
    models::{Catalog, DegreePlan},
    planner::{PlanRequest, Planner, PlanStore},
    scheduler::Season,
};
use std::io::Write;

const CATALOG: &str = r#"{
    "name": "Sample University",
    "courses": [
        {"course_id": "CS101", "title": "Intro to Computer Science", "credits": 3,
         "department": "Computer Science", "level": 100},
        {"course_id": "CS128", "title": "Intro to Programming", "credits": 3,
         "department": "Computer Science", "level": 100,
         "prerequisites": "[\"CS101\"]"},
        {"course_id": "CS225", "title": "Data Structures", "credits": 4,
         "department": "Computer Science", "level": 200,
         "prerequisites": "[\"CS128\"]"},
        {"course_id": "CS233", "title": "Computer Architecture", "credits": 4,
         "department": "Computer Science", "level": 200,
         "prerequisites": "CS128"},
        {"course_id": "CS374", "title": "Algorithms", "credits": 4,
         "department": "Computer Science", "level": 300,
         "prerequisites": "[\"CS225\", \"MATH213\"]"},
        {"course_id": "CS421", "title": "Programming Languages", "credits": 3,
         "department": "Computer Science", "level": 400,
         "prerequisites": "[\"CS374\"]"},
        {"course_id": "MATH213", "title": "Discrete Mathematics", "credits": 3,
         "department": "Mathematics", "level": 200},
        {"course_id": "MATH231", "title": "Calculus II", "credits": 3,
         "department": "Mathematics", "level": 200},
        {"course_id": "MATH241", "title": "Calculus III", "credits": 4,
         "department": "Mathematics", "level": 200,
         "prerequisites": "MATH231"},
        {"course_id": "STAT400", "title": "Statistics", "credits": 4,
         "department": "Statistics", "level": 400,
         "prerequisites": "[\"MATH241\"]"}
    ],
    "majors": [
        {"id": "cs", "name": "Computer Science",
         "required_courses": ["CS101", "CS128", "CS225", "CS233", "CS374",
                              "CS421", "MATH213", "MATH231"]}
    ],
    "minors": [
        {"id": "stat", "name": "Statistics",
         "required_courses": ["MATH231", "MATH241", "STAT400"]}
    ],
    "students": [
        {"id": "alice", "name": "Alice", "major_id": "cs",
         "minor_ids": ["stat"]},
        {"id": "bob", "name": "Bob", "major_id": "cs",
         "completed_courses": ["CS101"],
         "ap_credits": [
            {"exam": "AP Calculus BC", "course_equivalents": ["MATH231"]}
         ],
         "dual_enrollment": [
            {"course_name": "Intro to Programming (CC)", "equivalent": "CS128"},
            {"course_name": "Local History"}
         ]}
    ]
}"#;

fn load_catalog() -> Catalog {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(CATALOG.as_bytes())
        .expect("Failed to write catalog");
    parse_catalog_json(file.path()).expect("Failed to parse catalog")
}

fn request(student_id: &str, capacity: usize) -> PlanRequest {
    PlanRequest {
        student_id: student_id.to_string(),
        start_season: Season::Fall,
        start_year: 2026,
        capacity,
    }
}

/// Every prerequisite that is itself required must land in an earlier semester.
fn assert_prereq_ordering(catalog: &Catalog, plan: &DegreePlan) {
    for semester in &plan.semesters {
        for course_id in &semester.courses {
            let course = catalog.get_course(course_id).expect("Course should exist");
            let raw = course.prerequisites.as_deref().unwrap_or("");
            for prereq in degree_planner::core::prereq::parse_prerequisite_field(raw) {
                if let Some(prereq_order) = plan.semester_of(&prereq) {
                    assert!(
                        prereq_order < semester.order,
                        "{prereq} must come before {course_id}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_full_plan_for_major_and_minor() {
    let catalog = load_catalog();
    let planner = Planner::new(&catalog);

    let plan = planner.generate_plan(&request("alice", 4)).unwrap();

    // Union of major and minor requirements: 8 + 3 with MATH231 shared.
    assert_eq!(plan.course_count(), 10);
    assert_prereq_ordering(&catalog, &plan);

    // Capacity bound holds everywhere.
    for semester in &plan.semesters {
        assert!(semester.courses.len() <= 4);
    }

    // Semester labels alternate with the year stepping on Spring->Fall.
    let names: Vec<&str> = plan.semesters.iter().map(|s| s.name.as_str()).collect();
    assert!(names.starts_with(&["Fall 2026", "Spring 2026"]));
    if names.len() > 2 {
        assert_eq!(names[2], "Fall 2027");
    }
}

#[test]
fn test_no_course_scheduled_twice() {
    let catalog = load_catalog();
    let planner = Planner::new(&catalog);

    let plan = planner.generate_plan(&request("alice", 2)).unwrap();

    let mut seen = std::collections::HashSet::new();
    for semester in &plan.semesters {
        for id in &semester.courses {
            assert!(seen.insert(id.clone()), "{id} scheduled twice");
        }
    }
    assert_eq!(seen.len(), plan.course_count());
}

#[test]
fn test_ap_and_dual_enrollment_credit_skipped() {
    let catalog = load_catalog();
    let planner = Planner::new(&catalog);

    // Bob already satisfied CS101 (dashboard), MATH231 (AP), CS128 (dual
    // enrollment); none of them may appear in the plan.
    let plan = planner.generate_plan(&request("bob", 4)).unwrap();

    assert!(plan.semester_of("CS101").is_none());
    assert!(plan.semester_of("MATH231").is_none());
    assert!(plan.semester_of("CS128").is_none());

    // The remainder of the major is still fully scheduled.
    assert_eq!(plan.course_count(), 5);
    assert_prereq_ordering(&catalog, &plan);

    // CS225's prerequisite is covered by dual-enrollment credit, so it is
    // available in the very first semester.
    assert_eq!(plan.semester_of("CS225"), Some(1));
}

#[test]
fn test_capacity_one_serializes_the_whole_plan() {
    let catalog = load_catalog();
    let planner = Planner::new(&catalog);

    let plan = planner.generate_plan(&request("alice", 1)).unwrap();

    assert_eq!(plan.semesters.len(), 10);
    for semester in &plan.semesters {
        assert_eq!(semester.courses.len(), 1);
    }
    assert_prereq_ordering(&catalog, &plan);
}

#[test]
fn test_unknown_student_rejected_before_scheduling() {
    let catalog = load_catalog();
    let planner = Planner::new(&catalog);

    let err = planner.generate_plan(&request("carol", 4)).unwrap_err();
    assert!(matches!(
        err,
        PlanError::NotFound {
            kind: ResourceKind::Student,
            ..
        }
    ));
}

#[test]
fn test_regeneration_replaces_stored_plan() {
    let catalog = load_catalog();
    let planner = Planner::new(&catalog);
    let mut store = PlanStore::new();

    let first = planner.generate_plan(&request("alice", 4)).unwrap();
    let first_semesters = first.semesters.len();
    store.replace(first);

    let second = planner.generate_plan(&request("alice", 2)).unwrap();
    store.replace(second);

    assert_eq!(store.len(), 1);
    let current = store.get("alice").unwrap();
    assert!(current.semesters.len() > first_semesters);
}

#[test]
fn test_plan_json_round_trip() {
    let catalog = load_catalog();
    let planner = Planner::new(&catalog);

    let plan = planner.generate_plan(&request("bob", 4)).unwrap();
    let json = serde_json::to_string_pretty(&plan).unwrap();
    let parsed: DegreePlan = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, plan);
}

#[test]
fn test_catalog_validation_passes_for_sample() {
    let catalog = load_catalog();
    assert!(catalog.validate_requirements().is_ok());
    assert!(catalog.validate_prerequisites().is_ok());
}
