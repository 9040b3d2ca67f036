//! Search counters and termination reasons.
//!
//! Every run, successful or not, reports why it stopped and how much work
//! it did. `states_tested` is the diagnostic counter exposed to
//! benchmarking harnesses.

use std::fmt;

/// Aggregate counters for one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States dequeued (or visited) and goal-tested.
    pub states_tested: u64,
    /// States whose applicable actions were enumerated.
    pub expansions: u64,
    /// Successor states created.
    pub nodes_created: u64,
    /// Repeated-action successors dropped by best-first pruning.
    pub pruned_repeats: u64,
    /// Frontier entries dropped by `max_frontier_size`.
    pub frontier_pruned: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStats {
    pub(crate) fn observe_frontier(&mut self, size: usize) {
        self.frontier_high_water = self.frontier_high_water.max(size as u64);
    }
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was reached.
    GoalReached,
    /// Every reachable state under the strategy's pruning was explored.
    FrontierExhausted,
    /// Randomized search hit a state with no applicable action.
    NoApplicableAction,
    /// `max_expansions` was reached.
    ExpansionBudgetExceeded,
    /// The search space was exhausted, but only because `max_depth`
    /// cut some branches.
    DepthLimitReached,
}

impl TerminationReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::NoApplicableAction => "no_applicable_action",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::DepthLimitReached => "depth_limit_reached",
        }
    }

    /// True for terminations caused by a policy budget rather than by the
    /// problem itself.
    #[must_use]
    pub fn is_budget_limited(self) -> bool {
        matches!(
            self,
            Self::ExpansionBudgetExceeded | Self::DepthLimitReached
        )
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
