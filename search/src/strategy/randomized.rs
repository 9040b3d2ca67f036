//! Randomized forward search: one running state, no backtracking.

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::{debug, warn};

use super::{RawOutcome, SearchContext};
use crate::stats::{SearchStats, TerminationReason};
use crate::transition::apply_in_place;

/// Apply a uniformly chosen applicable operator until the goal holds.
///
/// Without an expansion budget this may loop forever on a state cycle.
pub(super) fn search(ctx: SearchContext<'_>, rng: &mut dyn RngCore) -> RawOutcome {
    let mut state = ctx.initial.clone();
    let mut path = Vec::new();
    let mut depth: u32 = 0;
    let mut stats = SearchStats::default();

    loop {
        stats.states_tested += 1;
        if state.satisfy(ctx.goals) {
            return RawOutcome::solved(path, stats);
        }

        let stop = if ctx.policy.expansions_exhausted(stats.expansions) {
            Some(TerminationReason::ExpansionBudgetExceeded)
        } else if ctx.policy.depth_reached(depth) {
            Some(TerminationReason::DepthLimitReached)
        } else {
            None
        };
        if let Some(reason) = stop {
            warn!(%reason, steps = depth, "randomized search cut short");
            return RawOutcome::failed(reason, state.unsatisfied_names(ctx.goals), stats);
        }

        let applicable = ctx.operators.applicable(&state);
        let Some(&op) = applicable.choose(&mut *rng) else {
            return RawOutcome::failed(
                TerminationReason::NoApplicableAction,
                state.unsatisfied_names(ctx.goals),
                stats,
            );
        };
        debug!(
            receiver = op.receiver(),
            action = op.name(),
            candidates = applicable.len(),
            "random step"
        );
        stats.expansions += 1;
        path.extend(apply_in_place(&mut state, op));
        depth += 1;
    }
}
