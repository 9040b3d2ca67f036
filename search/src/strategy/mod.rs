//! The four forward-search strategies.
//!
//! Every strategy shares the same inputs ([`SearchContext`]) and reports
//! the same raw result ([`RawOutcome`]): the step path on success, plus
//! counters, the termination reason and the unsatisfied-goal diagnostic.
//! Caller attribution happens afterwards, in [`crate::plan`].

mod best_first;
mod breadth_first;
mod depth_first;
mod randomized;

use rand::RngCore;
use seqplan_kernel::{Goals, WorldState};

use crate::heuristic::Heuristic;
use crate::operator::OperatorSet;
use crate::policy::{SearchPolicy, Strategy};
use crate::stats::{SearchStats, TerminationReason};
use crate::transition::Step;

/// Read-only inputs of one search run.
#[derive(Clone, Copy)]
pub(crate) struct SearchContext<'a> {
    pub initial: &'a WorldState,
    pub goals: &'a Goals,
    pub operators: &'a OperatorSet,
    pub policy: &'a SearchPolicy,
    pub heuristic: &'a dyn Heuristic,
}

/// What a strategy hands back to the planner.
#[derive(Debug)]
pub(crate) struct RawOutcome {
    pub path: Option<Vec<Step>>,
    pub unsatisfied: Vec<String>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl RawOutcome {
    fn solved(path: Vec<Step>, stats: SearchStats) -> Self {
        Self {
            path: Some(path),
            unsatisfied: Vec::new(),
            termination: TerminationReason::GoalReached,
            stats,
        }
    }

    fn failed(termination: TerminationReason, unsatisfied: Vec<String>, stats: SearchStats) -> Self {
        Self {
            path: None,
            unsatisfied,
            termination,
            stats,
        }
    }
}

/// Exhaustion reason for the systematic strategies.
fn exhausted(depth_cut: bool) -> TerminationReason {
    if depth_cut {
        TerminationReason::DepthLimitReached
    } else {
        TerminationReason::FrontierExhausted
    }
}

/// Dispatch to the strategy selected by the policy.
pub(crate) fn run(ctx: SearchContext<'_>, rng: &mut dyn RngCore) -> RawOutcome {
    match ctx.policy.strategy {
        Strategy::Randomized => randomized::search(ctx, rng),
        Strategy::DepthFirst => depth_first::search(ctx),
        Strategy::BreadthFirst => breadth_first::search(ctx),
        Strategy::BestFirst => best_first::search(ctx),
    }
}
