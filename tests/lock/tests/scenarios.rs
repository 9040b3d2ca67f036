//! Reference scenarios: counter, dead switch, dependency instantiation
//! and boundary attribution, run through the public planner API.

use lock_tests::{
    boundary_goal, boundary_world, call_names, counter_goal, counter_world, dependency_goal,
    dependency_world, solve, switch_goal, switch_world, triples,
};
use seqplan_kernel::{Action, Entity, Goals, Value, WorldState};
use seqplan_search::{Strategy, TerminationReason, CREATE_ACTION};

fn owned(rows: &[(&str, &str, &str)]) -> Vec<(String, String, String)> {
    rows.iter()
        .map(|(c, a, r)| ((*c).to_string(), (*a).to_string(), (*r).to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Counter: one call reaches the goal
// ---------------------------------------------------------------------------

#[test]
fn counter_breadth_first_returns_single_call() {
    let outcome = solve(counter_world(), &counter_goal(3), Strategy::BreadthFirst);
    assert_eq!(call_names(&outcome.plan.unwrap()), ["increment_by_3"]);
    assert_eq!(outcome.stats.states_tested, 4);
}

#[test]
fn counter_best_first_returns_single_call_testing_two_states() {
    let outcome = solve(counter_world(), &counter_goal(3), Strategy::BestFirst);
    assert_eq!(call_names(outcome.plan.as_ref().unwrap()), ["increment_by_3"]);
    assert_eq!(outcome.states_tested(), 2);
}

#[test]
fn counter_best_first_tests_fewer_states_than_breadth_first() {
    let best = solve(counter_world(), &counter_goal(3), Strategy::BestFirst);
    let breadth = solve(counter_world(), &counter_goal(3), Strategy::BreadthFirst);
    assert!(best.states_tested() < breadth.states_tested());
}

// ---------------------------------------------------------------------------
// Switch: unreachable goal is a failure, not an error
// ---------------------------------------------------------------------------

#[test]
fn switch_fails_with_unsatisfied_switch() {
    let outcome = solve(switch_world(), &switch_goal(), Strategy::BestFirst);
    assert!(!outcome.is_solved());
    assert_eq!(outcome.unsatisfied, ["switch"]);
    assert_eq!(outcome.termination, TerminationReason::FrontierExhausted);
}

#[test]
fn switch_fails_under_every_systematic_strategy() {
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let outcome = solve(switch_world(), &switch_goal(), strategy);
        assert!(outcome.plan.is_none(), "{strategy}");
        assert_eq!(outcome.unsatisfied, ["switch"], "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// Dependency: generate creates B, then A calls B
// ---------------------------------------------------------------------------

#[test]
fn dependency_plan_has_create_between_calls() {
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst, Strategy::BestFirst] {
        let outcome = solve(dependency_world(), &dependency_goal(), strategy);
        let plan = outcome.plan.unwrap();
        assert_eq!(
            triples(&plan),
            owned(&[
                ("<Actor>", "generate", "A"),
                ("A", CREATE_ACTION, "B"),
                ("A", "solve", "B"),
            ]),
            "{strategy}"
        );
    }
}

#[test]
fn dependency_plan_from_randomized_search_creates_once() {
    let outcome = solve(dependency_world(), &dependency_goal(), Strategy::Randomized);
    let plan = outcome.plan.unwrap();
    let records = plan.records();
    assert_eq!(records[0].action, "generate");
    assert!(records[1].is_create());
    assert_eq!(plan.iter().filter(|r| r.is_create()).count(), 1);
    assert_eq!(records.last().unwrap().action, "solve");
}

/// `factory.build` creates `courier`, which holds a reference to `parcel`.
/// `parcel.ship` only works once the courier exists.
fn courier_world() -> (WorldState, Goals) {
    let factory = Entity::empty("factory", "Factory")
        .with_actions([Action::new("build").with_dependency("courier")]);
    let courier =
        Entity::new("courier", "Courier", [("parcel", Value::reference("parcel"))]).starting_dead();
    let parcel = Entity::new("parcel", "Parcel", [("shipped", false)]).with_actions([
        Action::new("ship")
            .with_precondition(|_, w| w.entity("courier").is_some_and(|c| !c.is_dead()))
            .with_effect(|a| {
                a.set("shipped", true);
            }),
    ]);
    let world = WorldState::from_entities("S0", [factory, courier, parcel]).unwrap();
    let goals = Goals::new().with("parcel", |e, _| e.flag("shipped"));
    (world, goals)
}

#[test]
fn created_entity_is_the_caller_of_what_it_references() {
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst, Strategy::BestFirst] {
        let (world, goals) = courier_world();
        let outcome = solve(world, &goals, strategy);
        assert_eq!(
            triples(&outcome.plan.unwrap()),
            owned(&[
                ("<Actor>", "build", "factory"),
                ("factory", CREATE_ACTION, "courier"),
                ("courier", "ship", "parcel"),
            ]),
            "{strategy}"
        );
    }
}

// ---------------------------------------------------------------------------
// Boundary: actor always calls boundary entities
// ---------------------------------------------------------------------------

#[test]
fn boundary_entity_is_called_by_actor_despite_active_referrer() {
    for strategy in [Strategy::BreadthFirst, Strategy::BestFirst] {
        let outcome = solve(boundary_world(), &boundary_goal(), strategy);
        assert_eq!(
            triples(&outcome.plan.unwrap()),
            owned(&[
                ("<Actor>", "arm", "controller"),
                ("<Actor>", "confirm", "panel"),
            ]),
            "{strategy}"
        );
    }
}
