//! Long sequence: a chain `m1 -> m2 -> ... -> mN` on a single entity, each
//! method enabled by its predecessor, optionally widened with noise
//! actions.
//!
//! Without noise every strategy walks the chain linearly. Each noise
//! action multiplies the branching factor, so keep `noise` small for the
//! systematic strategies.

use seqplan_kernel::{Action, Entity, Value};

use crate::noise::noise_actions;
use crate::use_case::UseCase;

pub const DEFAULT_LENGTH: usize = 20;

fn called(i: usize) -> String {
    format!("is_m{i}_called")
}

/// Chain of `length` methods (at least 1) plus `noise` filler actions.
#[must_use]
pub fn use_case(length: usize, noise: usize) -> UseCase {
    let length = length.max(1);
    let flags = (1..=length).map(|i| (called(i), Value::from(false)));

    let chain = (1..=length).map(|i| {
        let mark = called(i);
        let action = Action::new(format!("m{i}")).with_effect(move |a| {
            a.set(&mark, true);
        });
        if i == 1 {
            action
        } else {
            let previous = called(i - 1);
            action.with_precondition(move |e, _| e.flag(&previous))
        }
    });

    let object = Entity::new("dbc_object", "A", flags)
        .with_actions(chain)
        .with_actions(noise_actions(noise));

    let last = called(length);
    UseCase::new("long_sequence")
        .with_entity(object)
        .with_goal("dbc_object", move |e, _| e.flag(&last))
}
