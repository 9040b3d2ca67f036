//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exhaustion) are expressed via
//! [`crate::stats::TerminationReason`] inside a successful
//! [`crate::planner::SearchOutcome`]. An unreachable goal is never an error.

use seqplan_kernel::WorldError;
use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins; no state has
/// been goal-tested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A goal names an entity that is not registered in the initial state.
    #[error("goal references unregistered entity `{name}`")]
    UnknownGoalEntity { name: String },
    /// An action declares a dependency on an unregistered entity.
    #[error("action `{receiver}.{action}` depends on unregistered entity `{name}`")]
    UnknownDependency {
        action: String,
        receiver: String,
        name: String,
    },
    /// The goal map is empty.
    #[error("no goals to plan for")]
    EmptyGoals,
    /// A policy budget is out of range.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// The initial state itself is malformed.
    #[error(transparent)]
    World(#[from] WorldError),
}
