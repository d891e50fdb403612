//! Planning error types

use crate::core::models::PlannedSemester;
use thiserror::Error;

/// What kind of record a failed lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A student profile
    Student,
    /// A major
    Major,
    /// A minor
    Minor,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Student => "student",
            Self::Major => "major",
            Self::Minor => "minor",
        };
        write!(f, "{label}")
    }
}

/// Errors surfaced by plan generation
///
/// `NotFound` and `InvalidInput` abort the request before any scheduling work;
/// `Unresolvable` aborts after producing the partial semester sequence, which
/// callers must treat as incomplete and never persist.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A referenced student, major, or minor does not exist
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Which record type the lookup was for
        kind: ResourceKind,
        /// The identifier that failed to resolve
        id: String,
    },

    /// A request parameter was rejected before scheduling
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Scheduling stopped with courses still unplaced
    #[error("unresolvable schedule: {} course(s) could not be placed", unscheduled.len())]
    Unresolvable {
        /// Semesters produced before scheduling stopped
        semesters: Vec<PlannedSemester>,
        /// Course ids left unscheduled
        unscheduled: Vec<String>,
    },
}

impl PlanError {
    /// Convenience constructor for lookup failures
    #[must_use]
    pub fn not_found(kind: ResourceKind, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
