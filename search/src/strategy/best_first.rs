//! Best-first forward search, the primary strategy.
//!
//! Frontier ordered by `f = g + h` with `g` the number of calls so far and
//! `h` the heuristic estimate. Repeated action names are pruned unless the
//! repeat strictly lowers the number of unsatisfied goals, whichever
//! heuristic orders the frontier. The lowest-`h` state seen anywhere in
//! the search supplies the unsatisfied-goal diagnostic on failure.

use tracing::{debug, warn};

use super::{exhausted, RawOutcome, SearchContext};
use crate::frontier::BestFirstFrontier;
use crate::node::SearchNode;
use crate::stats::{SearchStats, TerminationReason};
use crate::transition::{path_uses, successor};

/// Lowest-`h` state seen so far; ties keep the earliest.
struct BestSeen {
    h_cost: u64,
    unsatisfied: Vec<String>,
}

impl BestSeen {
    fn offer(&mut self, h_cost: u64, unsatisfied: impl FnOnce() -> Vec<String>) {
        if h_cost < self.h_cost {
            self.h_cost = h_cost;
            self.unsatisfied = unsatisfied();
        }
    }
}

pub(super) fn search(ctx: SearchContext<'_>) -> RawOutcome {
    let mut stats = SearchStats::default();
    let mut frontier = BestFirstFrontier::new();
    let mut next_creation_order: u64 = 1;
    let mut depth_cut = false;

    let root_h = ctx.heuristic.estimate(ctx.initial, ctx.goals);
    let mut best = BestSeen {
        h_cost: root_h,
        unsatisfied: ctx.initial.unsatisfied_names(ctx.goals),
    };
    frontier.push(SearchNode::root(ctx.initial.clone(), root_h));

    let termination = loop {
        let Some(node) = frontier.pop() else {
            break exhausted(depth_cut);
        };

        stats.states_tested += 1;
        if node.state.satisfy(ctx.goals) {
            stats.frontier_high_water = stats.frontier_high_water.max(frontier.high_water());
            return RawOutcome::solved(node.path, stats);
        }
        if ctx.policy.expansions_exhausted(stats.expansions) {
            warn!(expansions = stats.expansions, "best-first search out of budget");
            break TerminationReason::ExpansionBudgetExceeded;
        }
        if ctx.policy.depth_reached(node.depth) {
            depth_cut = true;
            continue;
        }

        stats.expansions += 1;
        let unsatisfied_before = node.state.unsatisfied_count(ctx.goals);
        for op in ctx.operators.applicable(&node.state) {
            let (state, steps) = successor(&node.state, op);
            if path_uses(&node.path, op.name())
                && state.unsatisfied_count(ctx.goals) >= unsatisfied_before
            {
                stats.pruned_repeats += 1;
                continue;
            }
            let h_cost = ctx.heuristic.estimate(&state, ctx.goals);
            best.offer(h_cost, || state.unsatisfied_names(ctx.goals));
            frontier.push(node.child(state, steps, h_cost, next_creation_order));
            next_creation_order += 1;
            stats.nodes_created += 1;
        }
        debug!(
            depth = node.depth,
            f_cost = node.f_cost(),
            frontier = frontier.len(),
            "expanded"
        );

        if let Some(max) = ctx.policy.max_frontier_size {
            stats.frontier_pruned += frontier.prune_to(max) as u64;
        }
    };

    stats.frontier_high_water = stats.frontier_high_water.max(frontier.high_water());
    RawOutcome::failed(termination, best.unsatisfied, stats)
}
