//! Sample use cases run through the harness, plus pre-flight setup errors
//! and the serialized plan shape.

use lock_tests::{call_names, counter_goal, counter_world, triples};
use seqplan_harness::worlds::{self, long_sequence, weather_station};
use seqplan_harness::{run, run_use_case, HarnessError, RunConfig, UseCase};
use seqplan_kernel::{Action, Entity, Goals, WorldError, WorldState};
use seqplan_search::{Planner, SearchError, SearchPolicy, Strategy, TerminationReason};

fn best_first() -> SearchPolicy {
    SearchPolicy::new(Strategy::BestFirst)
}

fn owned(rows: &[(&str, &str, &str)]) -> Vec<(String, String, String)> {
    rows.iter()
        .map(|(c, a, r)| ((*c).to_string(), (*a).to_string(), (*r).to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Object instantiation
// ---------------------------------------------------------------------------

#[test]
fn object_instantiation_creates_the_planner_from_the_generator() {
    let use_case = worlds::by_name("object_instantiation").unwrap();
    let report = run_use_case(&use_case, best_first()).unwrap();
    let plan = report.outcome.plan.unwrap();

    assert_eq!(
        triples(&plan),
        owned(&[
            ("<Actor>", "read_use_case_model", "sd_generator"),
            ("<Actor>", "read_class_model", "sd_generator"),
            ("<Actor>", "generate", "sd_generator"),
            ("sd_generator", "<<create>>", "planner"),
            ("sd_generator", "set_up_problem", "planner"),
            ("sd_generator", "solve", "planner"),
            ("sd_generator", "postprocess", "sd_postprocessor"),
        ])
    );
}

#[test]
fn object_instantiation_renders_a_table() {
    let use_case = worlds::by_name("object_instantiation").unwrap();
    let report = run_use_case(&use_case, best_first()).unwrap();
    let rendered = report.rendered.clone().unwrap();
    assert!(rendered.contains("<<create>>"), "{rendered}");
    assert!(!rendered.contains("Parameters"), "{rendered}");
    assert!(report.to_string().contains("# Goal Tests: "));
}

// ---------------------------------------------------------------------------
// Inconsistency handling
// ---------------------------------------------------------------------------

#[test]
fn inconsistency_handling_reports_the_generator() {
    for strategy in [Strategy::BestFirst, Strategy::BreadthFirst, Strategy::DepthFirst] {
        let use_case = worlds::by_name("inconsistency_handling").unwrap();
        let report = run_use_case(&use_case, SearchPolicy::new(strategy)).unwrap();
        assert!(report.rendered.is_none(), "{strategy}");
        assert_eq!(
            report.outcome.termination,
            TerminationReason::FrontierExhausted,
            "{strategy}"
        );
    }

    let use_case = worlds::by_name("inconsistency_handling").unwrap();
    let report = run_use_case(&use_case, best_first()).unwrap();
    assert_eq!(report.outcome.unsatisfied, ["sequence_diagram_generator"]);
}

// ---------------------------------------------------------------------------
// Simple watch
// ---------------------------------------------------------------------------

#[test]
fn simple_watch_stops_blinking_and_attributes_buttons_to_the_actor() {
    let use_case = worlds::by_name("simple_watch").unwrap();
    let report = run_use_case(&use_case, best_first()).unwrap();
    let plan = report.outcome.plan.unwrap();

    assert_eq!(call_names(&plan).last().map(String::as_str), Some("stop_blinking"));
    for record in plan.iter().filter(|r| r.receiver == "watch") {
        assert!(record.caller.is_actor(), "{record:?}");
    }
}

// ---------------------------------------------------------------------------
// Weather station
// ---------------------------------------------------------------------------

#[test]
fn weather_station_follows_references_for_callers() {
    let report = run_use_case(&weather_station::use_case(), best_first()).unwrap();
    let plan = report.outcome.plan.unwrap();

    assert_eq!(
        triples(&plan),
        owned(&[
            ("<Actor>", "request", "comms_controller"),
            ("comms_controller", "report", "weather_station"),
            ("weather_station", "summarise", "weather_data"),
            ("weather_station", "send", "comms_controller"),
        ])
    );
    assert_eq!(plan.records()[0].parameter_names, ["report"]);
    assert!(report.rendered.unwrap().contains("Parameters"));
}

// ---------------------------------------------------------------------------
// Long sequence
// ---------------------------------------------------------------------------

#[test]
fn long_sequence_walks_the_chain_under_systematic_strategies() {
    let expected: Vec<String> = (1..=5).map(|i| format!("m{i}")).collect();
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst, Strategy::BestFirst] {
        let report =
            run_use_case(&long_sequence::use_case(5, 0), SearchPolicy::new(strategy)).unwrap();
        assert_eq!(call_names(&report.outcome.plan.unwrap()), expected, "{strategy}");
    }
}

#[test]
fn long_sequence_with_noise_still_solves_best_first() {
    let report = run_use_case(&long_sequence::use_case(4, 2), best_first()).unwrap();
    assert_eq!(report.outcome.plan.unwrap().summary(), "m1; m2; m3; m4");
}

#[test]
fn run_config_solves_a_named_world() {
    let config = RunConfig {
        world: "weather_station".into(),
        strategy: Strategy::BreadthFirst,
        seed: 0,
        max_expansions: None,
    };
    let report = run(&config).unwrap();
    assert_eq!(report.use_case, "weather_station");
    assert!(report.outcome.is_solved());
}

// ---------------------------------------------------------------------------
// Setup errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_world_lists_the_available_names() {
    let config = RunConfig {
        world: "atlantis".into(),
        strategy: Strategy::BestFirst,
        seed: 0,
        max_expansions: None,
    };
    let err = run(&config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("atlantis"), "{message}");
    assert!(message.contains("simple_watch"), "{message}");
}

#[test]
fn duplicate_entity_names_are_rejected() {
    let use_case = UseCase::new("twins")
        .with_entity(Entity::empty("x", "X"))
        .with_entity(Entity::empty("x", "X"))
        .with_goal("x", |_, _| true);
    let err = run_use_case(&use_case, best_first()).unwrap_err();
    assert_eq!(
        err,
        HarnessError::World(WorldError::DuplicateEntity { name: "x".into() })
    );
}

#[test]
fn dangling_dependency_is_rejected_before_search() {
    let world = WorldState::from_entities(
        "S0",
        [Entity::new("maker", "Maker", [("made", false)])
            .with_actions([Action::new("make").with_dependency("ghost")])],
    )
    .unwrap();
    let goals = Goals::new().with("maker", |e, _| e.flag("made"));
    let err = Planner::new(world, best_first()).solve(&goals).unwrap_err();
    assert!(matches!(err, SearchError::UnknownDependency { name, .. } if name == "ghost"));
}

#[test]
fn goal_on_unknown_entity_surfaces_through_the_harness() {
    let use_case = UseCase::new("lost")
        .with_entity(Entity::empty("here", "Here"))
        .with_goal("there", |_, _| true);
    let err = run_use_case(&use_case, best_first()).unwrap_err();
    assert_eq!(
        err,
        HarnessError::Search(SearchError::UnknownGoalEntity {
            name: "there".into()
        })
    );
}

// ---------------------------------------------------------------------------
// Plan serialization
// ---------------------------------------------------------------------------

#[test]
fn plan_serializes_as_an_array_of_records() {
    let report = run_use_case(&weather_station::use_case(), best_first()).unwrap();
    let json = report.outcome.plan.unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["caller"], "<Actor>");
    assert_eq!(records[0]["action"], "request");
    assert_eq!(records[0]["receiver"], "comms_controller");
    assert_eq!(records[0]["parameter_names"], serde_json::json!(["report"]));
    assert_eq!(records[1]["caller"], "comms_controller");
}

#[test]
fn counter_plan_json_has_no_create_records() {
    let outcome = Planner::new(counter_world(), best_first())
        .solve(&counter_goal(3))
        .unwrap();
    let json = outcome.plan.unwrap().to_json().unwrap();
    assert!(!json.contains("<<create>>"), "{json}");
}
