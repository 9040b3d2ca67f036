//! Object instantiation: the planner entity only exists once the
//! generator's `generate` call creates it.

use seqplan_kernel::{Action, Entity, Value, WorldState};

use crate::use_case::UseCase;

fn planner_flag(world: &WorldState, key: &str) -> bool {
    world.entity("planner").is_some_and(|p| p.flag(key))
}

fn generator_flag(world: &WorldState, key: &str) -> bool {
    world.entity("sd_generator").is_some_and(|g| g.flag(key))
}

#[must_use]
pub fn use_case() -> UseCase {
    let sd_postprocessor = Entity::new(
        "sd_postprocessor",
        "SequenceDiagramPostprocessor",
        [("is_sequence_diagram_postprocessed", false)],
    )
    .with_actions([Action::new("postprocess")
        .with_precondition(|_, w| planner_flag(w, "is_plan_generated"))
        .with_effect(|a| {
            a.set("is_sequence_diagram_postprocessed", true);
        })]);

    let sd_generator = Entity::new(
        "sd_generator",
        "SequenceDiagramGenerator",
        [
            ("is_use_case_model_read", Value::from(false)),
            ("is_class_model_read", Value::from(false)),
            ("is_sequence_diagram_generated", Value::from(false)),
            ("sd_postprocessor", Value::reference("sd_postprocessor")),
        ],
    )
    .with_actions([
        Action::new("read_use_case_model").with_effect(|a| {
            a.set("is_use_case_model_read", true);
        }),
        Action::new("read_class_model").with_effect(|a| {
            a.set("is_class_model_read", true);
        }),
        Action::new("generate")
            .with_precondition(|e, _| e.flag("is_use_case_model_read") && e.flag("is_class_model_read"))
            .with_effect(|a| {
                a.set("is_sequence_diagram_generated", true);
            })
            .with_dependency("planner"),
    ]);

    let planner = Entity::new(
        "planner",
        "Planner",
        [("is_problem_set_up", false), ("is_plan_generated", false)],
    )
    .starting_dead()
    .with_actions([
        Action::new("set_up_problem")
            .with_precondition(|_, w| {
                generator_flag(w, "is_use_case_model_read") && generator_flag(w, "is_class_model_read")
            })
            .with_effect(|a| {
                a.set("is_problem_set_up", true);
            }),
        Action::new("solve")
            .with_precondition(|e, _| e.flag("is_problem_set_up"))
            .with_effect(|a| {
                a.set("is_plan_generated", true);
            }),
    ]);

    UseCase::new("object_instantiation")
        .with_entities([sd_postprocessor, sd_generator, planner])
        .with_goal("sd_generator", |e, _| e.flag("is_sequence_diagram_generated"))
        .with_goal("sd_postprocessor", |e, _| e.flag("is_sequence_diagram_postprocessed"))
}
