//! Inconsistency handling: nothing can ever save the diagram, so planning
//! fails and names the generator as the unsatisfied entity.

use seqplan_kernel::{Action, Entity};

use crate::use_case::UseCase;

#[must_use]
pub fn use_case() -> UseCase {
    // No action sets `is_diagram_saved`.
    let generator = Entity::new(
        "sequence_diagram_generator",
        "SequenceDiagramGenerator",
        [("is_diagram_saved", false)],
    )
    .with_actions([Action::new("generate").with_dependency("planner")]);

    let planner = Entity::new("planner", "Planner", [("is_done_solving", false)])
        .starting_dead()
        .with_actions([Action::new("solve").with_effect(|a| {
            a.set("is_done_solving", true);
        })]);

    UseCase::new("inconsistency_handling")
        .with_entities([generator, planner])
        .with_goal("sequence_diagram_generator", |e, _| e.flag("is_diagram_saved"))
        .with_goal("planner", |e, _| e.flag("is_done_solving"))
}
