//! Breadth-first forward search.

use std::collections::VecDeque;

use tracing::{debug, warn};

use super::{exhausted, RawOutcome, SearchContext};
use crate::node::SearchNode;
use crate::stats::{SearchStats, TerminationReason};
use crate::transition::{path_uses, successor};

/// FIFO expansion with the goal test at dequeue.
///
/// Nodes leave the queue in non-decreasing depth, so the first goal node
/// dequeued carries a plan of minimum call count. Frontier pruning drops
/// the newest entries and keeps that order.
pub(super) fn search(ctx: SearchContext<'_>) -> RawOutcome {
    let mut stats = SearchStats::default();
    let mut queue = VecDeque::from([SearchNode::root(ctx.initial.clone(), 0)]);
    let mut next_creation_order: u64 = 1;
    let mut depth_cut = false;

    while let Some(node) = queue.pop_front() {
        stats.states_tested += 1;
        if node.state.satisfy(ctx.goals) {
            return RawOutcome::solved(node.path, stats);
        }
        if ctx.policy.expansions_exhausted(stats.expansions) {
            warn!(expansions = stats.expansions, "breadth-first search out of budget");
            return RawOutcome::failed(
                TerminationReason::ExpansionBudgetExceeded,
                ctx.initial.unsatisfied_names(ctx.goals),
                stats,
            );
        }
        if ctx.policy.depth_reached(node.depth) {
            depth_cut = true;
            continue;
        }

        stats.expansions += 1;
        for op in ctx.operators.applicable(&node.state) {
            if path_uses(&node.path, op.name()) {
                continue;
            }
            let (state, steps) = successor(&node.state, op);
            queue.push_back(node.child(state, steps, 0, next_creation_order));
            next_creation_order += 1;
            stats.nodes_created += 1;
        }
        debug!(depth = node.depth, queued = queue.len(), "expanded");

        stats.observe_frontier(queue.len());
        if let Some(max) = ctx.policy.max_frontier_size {
            if queue.len() > max {
                stats.frontier_pruned += (queue.len() - max) as u64;
                queue.truncate(max);
            }
        }
    }

    RawOutcome::failed(
        exhausted(depth_cut),
        ctx.initial.unsatisfied_names(ctx.goals),
        stats,
    )
}
