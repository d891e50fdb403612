//! Degree plan scheduler
//!
//! A greedy topological batcher: each iteration collects the remaining
//! required courses whose prerequisites are already satisfied, sorts them by
//! level, and fills one semester up to the course cap. When a prerequisite
//! cycle (or a reference that can never be satisfied) leaves nothing
//! available, the deadlock rule forces the lowest-level remaining courses into
//! the semester so the loop always terminates.
//!
//! The scheduler is pure and synchronous: it works over in-memory snapshots,
//! performs no I/O, and retains no state between invocations.

use crate::core::error::PlanError;
use crate::core::models::{Course, PlannedSemester};
use crate::core::prereq::PrerequisiteMap;
use logger::warn;
use std::collections::HashSet;
use std::str::FromStr;

/// Academic season a semester falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// Fall term
    Fall,
    /// Spring term
    Spring,
}

impl Season {
    /// The season following this one
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Fall => Self::Spring,
            Self::Spring => Self::Fall,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Season {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "spring" => Ok(Self::Spring),
            _ => Err(PlanError::InvalidInput(format!(
                "unrecognized season '{s}' (expected Fall or Spring)"
            ))),
        }
    }
}

/// Walks the semester sequence: order, season, and year
///
/// The year increments exactly on each Spring-to-Fall transition, so a Fall
/// 2026 start yields Fall 2026, Spring 2026, Fall 2027, Spring 2027, ...
#[derive(Debug, Clone, Copy)]
struct TermCursor {
    order: u32,
    season: Season,
    year: i32,
}

impl TermCursor {
    const fn new(season: Season, year: i32) -> Self {
        Self {
            order: 1,
            season,
            year,
        }
    }

    fn label(&self) -> String {
        format!("{} {}", self.season, self.year)
    }

    fn advance(&mut self) {
        if self.season == Season::Spring {
            self.year += 1;
        }
        self.season = self.season.next();
        self.order += 1;
    }
}

/// Schedule the outstanding required courses into successive semesters.
///
/// # Arguments
/// * `required` - The requirement set (major plus minors, deduplicated) in a
///   deterministic enumeration order; level ties keep this order
/// * `completed` - Course ids the student has already satisfied
/// * `prereqs` - Prerequisite map restricted to the requirement set;
///   prerequisites referencing courses outside `required` are treated as
///   already satisfied
/// * `start_season` - Season of the first planned semester
/// * `start_year` - Year of the first planned semester
/// * `capacity` - Maximum courses per semester (must be at least 1)
///
/// # Returns
/// The ordered semester sequence. An empty requirement remainder yields zero
/// semesters.
///
/// # Errors
/// * [`PlanError::InvalidInput`] when `capacity` is zero
/// * [`PlanError::Unresolvable`] if an iteration produces an empty batch while
///   courses remain; the error carries the partial semester sequence and the
///   unscheduled course ids
pub fn schedule(
    required: &[Course],
    completed: &HashSet<String>,
    prereqs: &PrerequisiteMap,
    start_season: Season,
    start_year: i32,
    capacity: usize,
) -> Result<Vec<PlannedSemester>, PlanError> {
    if capacity == 0 {
        return Err(PlanError::InvalidInput(
            "courses per semester must be at least 1".to_string(),
        ));
    }

    let required_ids: HashSet<&str> = required.iter().map(|c| c.course_id.as_str()).collect();

    let mut scheduled: HashSet<String> = completed.clone();
    let mut remaining: Vec<&Course> = required
        .iter()
        .filter(|c| !completed.contains(&c.course_id))
        .collect();

    let mut cursor = TermCursor::new(start_season, start_year);
    let mut semesters: Vec<PlannedSemester> = Vec::new();

    while !remaining.is_empty() {
        let mut available: Vec<&Course> = remaining
            .iter()
            .copied()
            .filter(|course| {
                prereqs
                    .prerequisites_of(&course.course_id)
                    .iter()
                    .all(|p| scheduled.contains(p) || !required_ids.contains(p.as_str()))
            })
            .collect();

        if available.is_empty() {
            // Deadlock: a prerequisite cycle inside the requirement set (or a
            // reference that will never be satisfied). Force the lowest-level
            // remaining courses through, ignoring their unmet prerequisites.
            warn!(
                "No course has all prerequisites met; forcing lowest-level courses ({} remaining)",
                remaining.len()
            );
            available = remaining.clone();
        }

        // Stable sort: level ascending, ties keep requirement-set order.
        available.sort_by_key(|c| c.level);
        let batch: Vec<&Course> = available.into_iter().take(capacity).collect();

        if batch.is_empty() {
            return Err(PlanError::Unresolvable {
                semesters,
                unscheduled: remaining.iter().map(|c| c.course_id.clone()).collect(),
            });
        }

        let mut semester = PlannedSemester::new(cursor.order, cursor.label());
        let batch_ids: HashSet<&str> = batch.iter().map(|c| c.course_id.as_str()).collect();
        for course in &batch {
            semester.courses.push(course.course_id.clone());
            scheduled.insert(course.course_id.clone());
        }
        remaining.retain(|c| !batch_ids.contains(c.course_id.as_str()));
        semesters.push(semester);

        cursor.advance();
    }

    Ok(semesters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, level: u32, prereqs: &str) -> Course {
        let mut c = Course::new(
            id.to_string(),
            format!("{id} title"),
            "Testing".to_string(),
            3,
            level,
        );
        if !prereqs.is_empty() {
            c.set_prerequisites(prereqs.to_string());
        }
        c
    }

    fn run(
        required: &[Course],
        completed: &[&str],
        season: Season,
        year: i32,
        capacity: usize,
    ) -> Vec<PlannedSemester> {
        let completed: HashSet<String> = completed.iter().map(ToString::to_string).collect();
        let prereqs = PrerequisiteMap::from_courses(required.iter());
        schedule(required, &completed, &prereqs, season, year, capacity).unwrap()
    }

    #[test]
    fn test_prereq_chain_splits_semesters() {
        // X200 depends on X100, so even with spare capacity the chain spans
        // two semesters.
        let required = vec![course("X100", 100, ""), course("X200", 200, r#"["X100"]"#)];
        let semesters = run(&required, &[], Season::Fall, 2026, 4);

        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[0].name, "Fall 2026");
        assert_eq!(semesters[0].courses, vec!["X100"]);
        assert_eq!(semesters[1].name, "Spring 2026");
        assert_eq!(semesters[1].courses, vec!["X200"]);
        assert_eq!(semesters[1].order, 2);
    }

    #[test]
    fn test_cycle_broken_by_deadlock_rule() {
        // A and B require each other; the deadlock rule forces both into the
        // first semester.
        let required = vec![
            course("A", 300, r#"["B"]"#),
            course("B", 300, r#"["A"]"#),
        ];
        let semesters = run(&required, &[], Season::Fall, 2026, 4);

        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].courses.len(), 2);
    }

    #[test]
    fn test_deadlocked_courses_forced_in_level_order_up_to_capacity() {
        // Three two-course cycles at increasing levels. Forcing fills the
        // first semester with the four lowest-level courses; the remaining
        // cycle deadlocks again and is forced into a second semester.
        let required = vec![
            course("A100", 100, r#"["B100"]"#),
            course("B100", 100, r#"["A100"]"#),
            course("C200", 200, r#"["D200"]"#),
            course("D200", 200, r#"["C200"]"#),
            course("E300", 300, r#"["F300"]"#),
            course("F300", 300, r#"["E300"]"#),
        ];
        let semesters = run(&required, &[], Season::Fall, 2026, 4);

        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[0].courses, vec!["A100", "B100", "C200", "D200"]);
        assert_eq!(semesters[1].courses, vec!["E300", "F300"]);
    }

    #[test]
    fn test_capacity_overflow_batches() {
        // Ten independent level-100 courses at capacity 4 fill 4/4/2.
        let required: Vec<Course> = (0..10)
            .map(|i| course(&format!("G{i:02}"), 100, ""))
            .collect();
        let semesters = run(&required, &[], Season::Fall, 2026, 4);

        assert_eq!(semesters.len(), 3);
        assert_eq!(semesters[0].courses.len(), 4);
        assert_eq!(semesters[1].courses.len(), 4);
        assert_eq!(semesters[2].courses.len(), 2);
        assert_eq!(semesters[0].name, "Fall 2026");
        assert_eq!(semesters[1].name, "Spring 2026");
        assert_eq!(semesters[2].name, "Fall 2027");
    }

    #[test]
    fn test_year_increments_on_spring_to_fall() {
        let required: Vec<Course> = (0..4)
            .map(|i| course(&format!("C{i}"), 100, ""))
            .collect();
        let semesters = run(&required, &[], Season::Spring, 2026, 1);

        let names: Vec<&str> = semesters.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Spring 2026", "Fall 2027", "Spring 2027", "Fall 2028"]
        );
    }

    #[test]
    fn test_empty_remainder_yields_no_semesters() {
        let required = vec![course("X100", 100, "")];
        let semesters = run(&required, &["X100"], Season::Fall, 2026, 4);
        assert!(semesters.is_empty());
    }

    #[test]
    fn test_no_required_courses() {
        let semesters = run(&[], &[], Season::Fall, 2026, 4);
        assert!(semesters.is_empty());
    }

    #[test]
    fn test_outside_prerequisite_auto_satisfied() {
        // CHEM101 is a prerequisite but not part of the requirement set, so
        // it never blocks scheduling.
        let required = vec![course("BIO200", 200, r#"["CHEM101"]"#)];
        let semesters = run(&required, &[], Season::Fall, 2026, 4);

        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].courses, vec!["BIO200"]);
    }

    #[test]
    fn test_completed_prerequisite_unlocks_course() {
        let required = vec![course("X100", 100, ""), course("X200", 200, r#"["X100"]"#)];
        let semesters = run(&required, &["X100"], Season::Fall, 2026, 4);

        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].courses, vec!["X200"]);
    }

    #[test]
    fn test_lower_level_scheduled_first() {
        let required = vec![
            course("HI400", 400, ""),
            course("LO100", 100, ""),
            course("MID200", 200, ""),
        ];
        let semesters = run(&required, &[], Season::Fall, 2026, 2);

        assert_eq!(semesters[0].courses, vec!["LO100", "MID200"]);
        assert_eq!(semesters[1].courses, vec!["HI400"]);
    }

    #[test]
    fn test_level_ties_keep_input_order() {
        let required = vec![
            course("B100", 100, ""),
            course("A100", 100, ""),
            course("C100", 100, ""),
        ];
        let semesters = run(&required, &[], Season::Fall, 2026, 3);

        // Stable sort: equal levels preserve the requirement-set order.
        assert_eq!(semesters[0].courses, vec!["B100", "A100", "C100"]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let required = vec![course("X100", 100, "")];
        let prereqs = PrerequisiteMap::from_courses(required.iter());
        let result = schedule(
            &required,
            &HashSet::new(),
            &prereqs,
            Season::Fall,
            2026,
            0,
        );
        assert!(matches!(result, Err(PlanError::InvalidInput(_))));
    }

    #[test]
    fn test_no_course_in_two_semesters() {
        let required = vec![
            course("X100", 100, ""),
            course("X200", 200, r#"["X100"]"#),
            course("X300", 300, r#"["X200"]"#),
            course("Y100", 100, ""),
        ];
        let semesters = run(&required, &[], Season::Fall, 2026, 2);

        let mut seen = HashSet::new();
        for semester in &semesters {
            for id in &semester.courses {
                assert!(seen.insert(id.clone()), "{id} scheduled twice");
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_season_parsing() {
        assert_eq!("Fall".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("spring".parse::<Season>().unwrap(), Season::Spring);
        assert!("Summer".parse::<Season>().is_err());
        assert!("".parse::<Season>().is_err());
    }
}
