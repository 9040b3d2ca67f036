//! Shared helpers for seqplan benchmark suites.

use seqplan_harness::worlds::long_sequence;
use seqplan_harness::UseCase;
use seqplan_kernel::{Action, Entity, Value, WorldState};
use seqplan_search::{Planner, SearchOutcome, SearchPolicy, Strategy};

/// A world of `count` entities in a ring, each referencing the next one,
/// with a `tick` action each. Used to time cloning and goal evaluation.
///
/// # Panics
///
/// Never in practice: entity names are distinct.
#[must_use]
pub fn ring_world(count: usize) -> WorldState {
    let entities = (0..count).map(|i| {
        let next = format!("node_{}", (i + 1) % count.max(1));
        Entity::new(
            format!("node_{i}"),
            "Node",
            [
                ("ticks", Value::from(0)),
                ("label", Value::symbol("idle")),
                ("next", Value::reference(next)),
            ],
        )
        .with_actions([Action::new(format!("tick_{i}")).with_effect(|a| {
            a.increment("ticks", 1);
        })])
    });
    WorldState::from_entities("ring", entities).expect("ring entity names are distinct")
}

/// Long-sequence use case widened with `noise` filler actions.
#[must_use]
pub fn chain(length: usize, noise: usize) -> UseCase {
    long_sequence::use_case(length, noise)
}

/// Solve `use_case` with `strategy`, capped at `max_expansions`.
///
/// # Panics
///
/// Panics if the use case is malformed. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn solve(use_case: &UseCase, strategy: Strategy, max_expansions: u64) -> SearchOutcome {
    let policy = SearchPolicy::new(strategy).with_max_expansions(max_expansions);
    Planner::new(use_case.initial_state().expect("initial_state"), policy)
        .solve(use_case.goals())
        .expect("solve")
}
