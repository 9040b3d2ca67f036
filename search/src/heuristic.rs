//! Heuristic estimates for best-first search.

use seqplan_kernel::{Goals, WorldState};

/// Trait for state evaluation.
///
/// Estimates must be deterministic: same `(state, goals)` → same value.
/// Admissibility is not required.
pub trait Heuristic: Send + Sync {
    /// Estimated remaining cost from `state` to a state satisfying `goals`.
    fn estimate(&self, state: &WorldState, goals: &Goals) -> u64;
}

/// Default heuristic: the number of goal entities currently failing their
/// predicate.
///
/// Non-admissible. One action can satisfy several goal entities at once
/// and several actions may be needed for one, so plans found with it are
/// not guaranteed minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsatisfiedGoals;

impl Heuristic for UnsatisfiedGoals {
    fn estimate(&self, state: &WorldState, goals: &Goals) -> u64 {
        state.unsatisfied_count(goals) as u64
    }
}

/// Returns 0 for every state; best-first then orders purely by path length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Heuristic for Uniform {
    fn estimate(&self, _state: &WorldState, _goals: &Goals) -> u64 {
        0
    }
}
