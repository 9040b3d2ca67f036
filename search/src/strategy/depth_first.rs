//! Depth-first forward search with backtracking.

use seqplan_kernel::WorldState;
use tracing::{debug, warn};

use super::{exhausted, RawOutcome, SearchContext};
use crate::stats::{SearchStats, TerminationReason};
use crate::transition::{path_uses, successor, Step};

enum Visit {
    Found,
    DeadEnd,
    OutOfBudget,
}

struct DepthFirst<'a> {
    ctx: SearchContext<'a>,
    path: Vec<Step>,
    stats: SearchStats,
    depth_cut: bool,
}

impl DepthFirst<'_> {
    /// Goal-test `state`, then try each unused applicable operator in
    /// operator order. `self.path` holds the steps leading to `state` and
    /// is restored before returning a dead end.
    fn visit(&mut self, state: &WorldState, depth: u32) -> Visit {
        self.stats.states_tested += 1;
        if state.satisfy(self.ctx.goals) {
            return Visit::Found;
        }
        if self.ctx.policy.expansions_exhausted(self.stats.expansions) {
            return Visit::OutOfBudget;
        }
        if self.ctx.policy.depth_reached(depth) {
            self.depth_cut = true;
            return Visit::DeadEnd;
        }

        self.stats.expansions += 1;
        let operators = self.ctx.operators;
        for op in operators.applicable(state) {
            if path_uses(&self.path, op.name()) {
                continue;
            }
            let (child, steps) = successor(state, op);
            self.stats.nodes_created += 1;
            let mark = self.path.len();
            self.path.extend(steps);
            match self.visit(&child, depth + 1) {
                Visit::DeadEnd => self.path.truncate(mark),
                found_or_budget => return found_or_budget,
            }
        }
        debug!(depth, "dead end");
        Visit::DeadEnd
    }
}

/// Return the first plan found by recursive, backtracking exploration.
///
/// Recursion depth is bounded by the number of distinct action names,
/// since a name never repeats along one path.
pub(super) fn search(ctx: SearchContext<'_>) -> RawOutcome {
    let mut dfs = DepthFirst {
        ctx,
        path: Vec::new(),
        stats: SearchStats::default(),
        depth_cut: false,
    };
    match dfs.visit(ctx.initial, 0) {
        Visit::Found => RawOutcome::solved(dfs.path, dfs.stats),
        Visit::DeadEnd => RawOutcome::failed(
            exhausted(dfs.depth_cut),
            ctx.initial.unsatisfied_names(ctx.goals),
            dfs.stats,
        ),
        Visit::OutOfBudget => {
            warn!(expansions = dfs.stats.expansions, "depth-first search out of budget");
            RawOutcome::failed(
                TerminationReason::ExpansionBudgetExceeded,
                ctx.initial.unsatisfied_names(ctx.goals),
                dfs.stats,
            )
        }
    }
}
