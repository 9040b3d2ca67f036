//! Search policy types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::SearchError;

/// The four interchangeable forward-search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Single running state, uniformly random applicable action per step.
    /// No backtracking, no cycle detection.
    Randomized,
    /// Recursive, backtracking; returns the first plan found.
    DepthFirst,
    /// FIFO expansion; returns a plan of minimum action count.
    BreadthFirst,
    /// Priority queue on `f = g + h`; the primary strategy.
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Randomized,
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirst,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Randomized => "randomized_forward_search",
            Self::DepthFirst => "depth_first_forward_search",
            Self::BreadthFirst => "breadth_first_forward_search",
            Self::BestFirst => "best_first_forward_search",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy `{0}`")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts the full names (`best_first_forward_search`) and the short
    /// forms (`best_first`, `bfs`, `dfs`, `random`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "randomized_forward_search" | "randomized" | "random" => Ok(Self::Randomized),
            "depth_first_forward_search" | "depth_first" | "dfs" => Ok(Self::DepthFirst),
            "breadth_first_forward_search" | "breadth_first" | "bfs" => Ok(Self::BreadthFirst),
            "best_first_forward_search" | "best_first" => Ok(Self::BestFirst),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Strategy selection plus optional safety-valve budgets.
///
/// Every budget defaults to `None` (unbounded). Depth-first and
/// breadth-first exploration can be exponential in the branching factor;
/// the budgets cut a run short without changing what an unbounded run
/// would return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    pub strategy: Strategy,
    /// Seed for the randomized strategy's default random source.
    pub seed: u64,
    /// Hard cap on expanded states (randomized: on steps taken).
    pub max_expansions: Option<u64>,
    /// Plan length cutoff, in actions.
    pub max_depth: Option<u32>,
    /// Frontier prune threshold (breadth-first and best-first).
    pub max_frontier_size: Option<usize>,
}

impl SearchPolicy {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max: u32) -> Self {
        self.max_depth = Some(max);
        self
    }

    #[must_use]
    pub fn with_max_frontier_size(mut self, max: usize) -> Self {
        self.max_frontier_size = Some(max);
        self
    }

    /// Reject zero budgets.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] naming the offending budget.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_frontier_size == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_size must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub(crate) fn expansions_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }

    pub(crate) fn depth_reached(&self, depth: u32) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: Strategy::BreadthFirst,
            seed: 0,
            max_expansions: None,
            max_depth: None,
            max_frontier_size: None,
        }
    }
}
