//! Planning service: requirement gathering, scheduling, and plan storage
//!
//! [`Planner`] is the entry point collaborators call: it resolves a student's
//! major and minors against the catalog, builds the requirement and completed
//! sets, and hands them to [`crate::core::scheduler::schedule`]. [`PlanStore`]
//! keeps at most one plan per student, replaced wholesale on regeneration.

use crate::core::error::{PlanError, ResourceKind};
use crate::core::models::{Catalog, Course, DegreePlan};
use crate::core::prereq::PrerequisiteMap;
use crate::core::scheduler::{schedule, Season};
use logger::{debug, warn};
use std::collections::{HashMap, HashSet};

/// Parameters for one plan generation request
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Student to plan for
    pub student_id: String,
    /// Season of the first planned semester
    pub start_season: Season,
    /// Year of the first planned semester
    pub start_year: i32,
    /// Maximum courses per semester
    pub capacity: usize,
}

/// Generates degree plans from catalog data
pub struct Planner<'a> {
    catalog: &'a Catalog,
}

impl<'a> Planner<'a> {
    /// Create a planner over a catalog snapshot
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Generate a degree plan for a student.
    ///
    /// Resolves the student's major and minors, unions their required courses
    /// (set semantics; duplicates across programs collapse, enumeration order
    /// is major list order followed by each minor's list order), subtracts the
    /// student's pre-merged completed set, and schedules the remainder.
    ///
    /// # Errors
    /// * [`PlanError::NotFound`] when the student, major, or a minor does not
    ///   exist — surfaced before any scheduling work
    /// * [`PlanError::InvalidInput`] when the capacity is zero
    /// * [`PlanError::Unresolvable`] when scheduling stops early; the partial
    ///   plan it carries must not be persisted
    pub fn generate_plan(&self, request: &PlanRequest) -> Result<DegreePlan, PlanError> {
        let student = self
            .catalog
            .get_student(&request.student_id)
            .ok_or_else(|| PlanError::not_found(ResourceKind::Student, &request.student_id))?;

        let major = self
            .catalog
            .get_major(&student.major_id)
            .ok_or_else(|| PlanError::not_found(ResourceKind::Major, &student.major_id))?;

        let mut required: Vec<Course> = Vec::new();
        let mut required_ids: HashSet<String> = HashSet::new();

        let mut add_requirement = |course_id: &str, required: &mut Vec<Course>| {
            if !required_ids.insert(course_id.to_string()) {
                return;
            }
            if let Some(course) = self.catalog.get_course(course_id) {
                required.push(course.clone());
            } else {
                warn!("Required course '{course_id}' is not in the catalog; skipping");
            }
        };

        for course_id in &major.required_courses {
            add_requirement(course_id, &mut required);
        }

        for minor_id in &student.minor_ids {
            let minor = self
                .catalog
                .get_minor(minor_id)
                .ok_or_else(|| PlanError::not_found(ResourceKind::Minor, minor_id))?;
            for course_id in &minor.required_courses {
                add_requirement(course_id, &mut required);
            }
        }

        let completed = student.completed_set();
        let prereqs = PrerequisiteMap::from_courses(required.iter());

        debug!(
            "Planning for '{}': {} required, {} completed, capacity {}",
            student.id,
            required.len(),
            completed.len(),
            request.capacity
        );

        let semesters = schedule(
            &required,
            &completed,
            &prereqs,
            request.start_season,
            request.start_year,
            request.capacity,
        )?;

        let mut plan = DegreePlan::new(student.id.clone());
        plan.semesters = semesters;
        Ok(plan)
    }
}

/// Owns the current degree plan for each student
///
/// At most one plan per student: [`PlanStore::replace`] swaps the whole plan
/// in a single step, so a reader holding `&self` can never observe a
/// half-replaced plan.
#[derive(Debug, Default)]
pub struct PlanStore {
    plans: HashMap<String, DegreePlan>,
}

impl PlanStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            plans: HashMap::new(),
        }
    }

    /// Replace the student's plan with a new one
    ///
    /// # Returns
    /// The discarded previous plan, if one existed
    pub fn replace(&mut self, plan: DegreePlan) -> Option<DegreePlan> {
        self.plans.insert(plan.student_id.clone(), plan)
    }

    /// Get the current plan for a student
    #[must_use]
    pub fn get(&self, student_id: &str) -> Option<&DegreePlan> {
        self.plans.get(student_id)
    }

    /// Remove the plan for a student
    pub fn remove(&mut self, student_id: &str) -> Option<DegreePlan> {
        self.plans.remove(student_id)
    }

    /// Number of stored plans
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the store holds no plans
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
