//! Search node and frontier ordering key.

use seqplan_kernel::WorldState;

use crate::transition::Step;

/// A search node: an owned world state plus the steps that reached it.
///
/// Ordering for frontier extraction uses `(f_cost, depth, creation_order)`
/// where `f_cost = g_cost + h_cost`. Lower is better; ties broken by
/// shallower depth, then older creation order.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Independent copy of the world at this node.
    pub state: WorldState,
    /// Calls and creates from the initial state, in order.
    pub path: Vec<Step>,
    /// Number of calls on `path` (root = 0).
    pub depth: u32,
    /// Cumulative path cost (+1 per call).
    pub g_cost: u64,
    /// Heuristic estimate at this node.
    pub h_cost: u64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl SearchNode {
    /// Root node wrapping `state` with an empty path.
    #[must_use]
    pub fn root(state: WorldState, h_cost: u64) -> Self {
        Self {
            state,
            path: Vec::new(),
            depth: 0,
            g_cost: 0,
            h_cost,
            creation_order: 0,
        }
    }

    /// Child reached by appending `steps` (one call plus its creates).
    #[must_use]
    pub fn child(
        &self,
        state: WorldState,
        steps: Vec<Step>,
        h_cost: u64,
        creation_order: u64,
    ) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + steps.len());
        path.extend(self.path.iter().cloned());
        path.extend(steps);
        Self {
            state,
            path,
            depth: self.depth.saturating_add(1),
            g_cost: self.g_cost.saturating_add(1),
            h_cost,
            creation_order,
        }
    }

    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, depth, creation_order)`.
///
/// Lower `f_cost` first, then shallower depth, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            depth: node.depth,
            creation_order: node.creation_order,
        }
    }
}
