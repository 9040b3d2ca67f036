//! Search budgets and randomized reproducibility.
//!
//! Budgets are optional; a run cut short by one is an unsolved outcome
//! with a budget termination reason, never an error.

use lock_tests::{call_names, counter_goal, counter_world, switch_goal, switch_world};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seqplan_kernel::{Action, Entity, Goals, WorldState};
use seqplan_search::{Planner, SearchError, SearchPolicy, Strategy, TerminationReason};

fn solve(world: WorldState, goals: &Goals, policy: SearchPolicy) -> seqplan_search::SearchOutcome {
    Planner::new(world, policy).solve(goals).unwrap()
}

/// Four independent flags; the goal wants all of them set.
///
/// Any action order works, so random walks differ by seed.
fn checklist_world() -> (WorldState, Goals) {
    let items = ["pack", "lock", "water", "leave"];
    let actions = items.map(|item| {
        Action::new(item).with_effect(move |a| {
            a.set(item, true);
        })
    });
    let list = Entity::new("list", "Checklist", items.map(|item| (item, false)))
        .with_actions(actions);
    let world = WorldState::from_entities("S0", [list]).unwrap();
    let goals = Goals::new().with("list", move |e, _| items.iter().all(|item| e.flag(item)));
    (world, goals)
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn default_policy_is_unbounded_breadth_first() {
    let policy = SearchPolicy::default();
    assert_eq!(policy.strategy, Strategy::BreadthFirst);
    assert_eq!(policy.max_expansions, None);
    assert_eq!(policy.max_depth, None);
    assert_eq!(policy.max_frontier_size, None);
    assert!(policy.validate().is_ok());
}

#[test]
fn zero_budgets_are_invalid() {
    let planner = Planner::new(
        counter_world(),
        SearchPolicy::new(Strategy::BreadthFirst).with_max_frontier_size(0),
    );
    assert!(matches!(
        planner.solve(&counter_goal(3)),
        Err(SearchError::InvalidPolicy { .. })
    ));
}

// ---------------------------------------------------------------------------
// Expansion budget
// ---------------------------------------------------------------------------

#[test]
fn expansion_budget_stops_breadth_first() {
    let policy = SearchPolicy::new(Strategy::BreadthFirst).with_max_expansions(2);
    let outcome = solve(counter_world(), &counter_goal(7), policy);
    assert!(!outcome.is_solved());
    assert_eq!(outcome.termination, TerminationReason::ExpansionBudgetExceeded);
    assert_eq!(outcome.stats.expansions, 2);
    assert_eq!(outcome.unsatisfied, ["counter"]);
}

#[test]
fn expansion_budget_stops_randomized_walk_on_a_dead_switch() {
    let policy = SearchPolicy::new(Strategy::Randomized).with_max_expansions(3);
    let outcome = solve(switch_world(), &switch_goal(), policy);
    assert_eq!(outcome.termination, TerminationReason::ExpansionBudgetExceeded);
    assert_eq!(outcome.stats.expansions, 3);
    assert_eq!(outcome.states_tested(), 4);
    assert_eq!(outcome.unsatisfied, ["switch"]);
}

#[test]
fn budget_large_enough_does_not_change_the_plan() {
    let bounded = solve(
        counter_world(),
        &counter_goal(5),
        SearchPolicy::new(Strategy::BreadthFirst).with_max_expansions(1_000),
    );
    let unbounded = solve(
        counter_world(),
        &counter_goal(5),
        SearchPolicy::new(Strategy::BreadthFirst),
    );
    assert_eq!(bounded.plan, unbounded.plan);
    assert_eq!(bounded.termination, TerminationReason::GoalReached);
}

// ---------------------------------------------------------------------------
// Depth budget
// ---------------------------------------------------------------------------

#[test]
fn depth_budget_cuts_systematic_strategies() {
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst, Strategy::BestFirst] {
        let policy = SearchPolicy::new(strategy).with_max_depth(1);
        let outcome = solve(counter_world(), &counter_goal(5), policy);
        assert!(!outcome.is_solved(), "{strategy}");
        assert_eq!(
            outcome.termination,
            TerminationReason::DepthLimitReached,
            "{strategy}"
        );
        assert!(outcome.termination.is_budget_limited());
    }
}

#[test]
fn depth_budget_at_plan_length_still_solves() {
    let policy = SearchPolicy::new(Strategy::DepthFirst).with_max_depth(2);
    let outcome = solve(counter_world(), &counter_goal(5), policy);
    assert_eq!(call_names(&outcome.plan.unwrap()).len(), 2);
}

#[test]
fn depth_budget_stops_randomized_walk() {
    let policy = SearchPolicy::new(Strategy::Randomized).with_max_depth(2);
    let outcome = solve(switch_world(), &switch_goal(), policy);
    assert_eq!(outcome.termination, TerminationReason::DepthLimitReached);
    assert_eq!(outcome.stats.expansions, 2);
}

// ---------------------------------------------------------------------------
// Frontier budget
// ---------------------------------------------------------------------------

#[test]
fn frontier_budget_drops_newest_breadth_first_entries() {
    let policy = SearchPolicy::new(Strategy::BreadthFirst).with_max_frontier_size(1);
    let outcome = solve(counter_world(), &counter_goal(3), policy);
    assert_eq!(
        call_names(&outcome.plan.unwrap()),
        ["increment_by_1", "increment_by_2"]
    );
    assert_eq!(outcome.stats.frontier_high_water, 3);
    assert_eq!(outcome.stats.frontier_pruned, 3);
}

#[test]
fn frontier_budget_is_counted_for_best_first() {
    let policy = SearchPolicy::new(Strategy::BestFirst).with_max_frontier_size(2);
    let outcome = solve(counter_world(), &counter_goal(7), policy);
    assert!(outcome.stats.frontier_pruned > 0);
}

// ---------------------------------------------------------------------------
// Randomized search
// ---------------------------------------------------------------------------

#[test]
fn randomized_stops_when_nothing_is_applicable() {
    let jammed = Entity::new("door", "Door", [("open", false)])
        .with_actions([Action::new("open").with_precondition(|_, _| false)]);
    let world = WorldState::from_entities("S0", [jammed]).unwrap();
    let goals = Goals::new().with("door", |e, _| e.flag("open"));

    let outcome = solve(world, &goals, SearchPolicy::new(Strategy::Randomized));

    assert_eq!(outcome.termination, TerminationReason::NoApplicableAction);
    assert_eq!(outcome.unsatisfied, ["door"]);
    assert_eq!(outcome.states_tested(), 1);
}

#[test]
fn same_seed_gives_the_same_plan() {
    let (world, goals) = checklist_world();
    let policy = SearchPolicy::new(Strategy::Randomized)
        .with_seed(17)
        .with_max_expansions(10_000);
    let first = solve(world.clone(), &goals, policy.clone());
    let second = solve(world, &goals, policy);
    assert!(first.is_solved());
    assert_eq!(first.plan, second.plan);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn injected_rng_matches_the_policy_seed() {
    let (world, goals) = checklist_world();
    let policy = SearchPolicy::new(Strategy::Randomized)
        .with_seed(3)
        .with_max_expansions(10_000);
    let planner = Planner::new(world, policy);

    let seeded = planner.solve(&goals).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let injected = planner.solve_with_rng(&goals, &mut rng).unwrap();

    assert_eq!(seeded.plan, injected.plan);
}

#[test]
fn different_seeds_explore_different_orders() {
    let (world, goals) = checklist_world();
    let plans: std::collections::HashSet<String> = (0..32)
        .map(|seed| {
            let policy = SearchPolicy::new(Strategy::Randomized)
                .with_seed(seed)
                .with_max_expansions(10_000);
            solve(world.clone(), &goals, policy).plan.unwrap().summary()
        })
        .collect();
    assert!(plans.len() > 1, "{plans:?}");
}
