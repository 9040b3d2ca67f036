//! Breadth-first plans are minimal; best-first plans need not be.
//!
//! The oracle is iterative deepening: depth-first search with
//! `max_depth = k` for k = 0, 1, ... explores every path of at most k calls
//! under the same path-name exclusion rule, so the first k that succeeds
//! is the minimal plan length.

use lock_tests::{call_names, counter_goal, counter_world};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqplan_kernel::{Action, Entity, Goals, WorldState};
use seqplan_search::{Planner, SearchPolicy, Strategy};

fn minimal_length(world: &WorldState, goals: &Goals, limit: u32) -> Option<usize> {
    (0..=limit).find_map(|k| {
        let policy = SearchPolicy::new(Strategy::DepthFirst).with_max_depth(k);
        let outcome = Planner::new(world.clone(), policy).solve(goals).unwrap();
        outcome.plan.map(|plan| plan.calls().count())
    })
}

fn breadth_first_length(world: &WorldState, goals: &Goals) -> Option<usize> {
    Planner::new(world.clone(), SearchPolicy::new(Strategy::BreadthFirst))
        .solve(goals)
        .unwrap()
        .plan
        .map(|plan| plan.calls().count())
}

/// Counter with `n` differently sized increment actions.
fn random_counter(rng: &mut StdRng, n: usize) -> (WorldState, Vec<i64>) {
    let steps: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=6)).collect();
    let actions = steps.iter().enumerate().map(|(i, &step)| {
        Action::new(format!("add_{i}")).with_effect(move |a| {
            a.increment("value", step);
        })
    });
    let counter = Entity::new("counter", "Counter", [("value", 0)]).with_actions(actions);
    (WorldState::from_entities("S0", [counter]).unwrap(), steps)
}

#[test]
fn counter_targets_match_the_oracle() {
    let world = counter_world();
    for target in 0..=6 {
        let goals = counter_goal(target);
        assert_eq!(
            breadth_first_length(&world, &goals),
            minimal_length(&world, &goals, 3),
            "target {target}"
        );
    }
}

#[test]
fn random_counters_match_the_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..25 {
        let (world, steps) = random_counter(&mut rng, 4);
        // Reachable target: the sum of a random non-empty subset.
        let mask = rng.gen_range(1..16u32);
        let target: i64 = steps
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, s)| s)
            .sum();
        let goals = counter_goal(target);

        let bfs = breadth_first_length(&world, &goals);
        assert!(bfs.is_some(), "target {target} over {steps:?}");
        assert_eq!(bfs, minimal_length(&world, &goals, 4), "target {target} over {steps:?}");
    }
}

#[test]
fn unreachable_target_agrees_with_the_oracle() {
    let world = counter_world();
    let goals = counter_goal(7);
    assert_eq!(breadth_first_length(&world, &goals), None);
    assert_eq!(minimal_length(&world, &goals, 3), None);
}

/// One controller action satisfies every object at once; each object can
/// also satisfy itself. The per-object route lowers `h` at every step, so
/// best-first prefers it and returns three calls instead of two.
fn shortcut_world() -> (WorldState, Goals) {
    let controller = Entity::new(
        "controller",
        "Controller",
        [("is_prepared", false), ("is_all_done", false)],
    )
    .with_actions([
        Action::new("prepare_all").with_effect(|a| {
            a.set("is_prepared", true);
        }),
        Action::new("satisfy_all")
            .with_precondition(|e, _| e.flag("is_prepared"))
            .with_effect(|a| {
                a.set("is_all_done", true);
            }),
    ]);
    let objects = (1..=3).map(|i| {
        Entity::new(format!("object_{i}"), "Object", [("is_satisfied", false)]).with_actions([
            Action::new(format!("satisfy_{i}")).with_effect(|a| {
                a.set("is_satisfied", true);
            }),
        ])
    });
    let world = WorldState::from_entities("S0", std::iter::once(controller).chain(objects)).unwrap();

    let satisfied = |e: &Entity, w: &WorldState| {
        e.flag("is_satisfied") || w.entity("controller").is_some_and(|c| c.flag("is_all_done"))
    };
    let goals = Goals::new()
        .with("object_1", satisfied)
        .with("object_2", satisfied)
        .with("object_3", satisfied);
    (world, goals)
}

#[test]
fn best_first_may_return_a_longer_plan_than_breadth_first() {
    let (world, goals) = shortcut_world();

    let breadth = Planner::new(world.clone(), SearchPolicy::new(Strategy::BreadthFirst))
        .solve(&goals)
        .unwrap();
    let best = Planner::new(world, SearchPolicy::new(Strategy::BestFirst))
        .solve(&goals)
        .unwrap();

    assert_eq!(call_names(&breadth.plan.unwrap()), ["prepare_all", "satisfy_all"]);
    assert_eq!(
        call_names(&best.plan.unwrap()),
        ["satisfy_1", "satisfy_2", "satisfy_3"]
    );
}
