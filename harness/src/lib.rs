//! Seqplan Harness: sample use cases and orchestration around the planner.
//!
//! The harness assembles use cases (entities plus goal predicates), runs
//! them through `seqplan_search::Planner`, and renders the resulting plan
//! as a sequence-diagram table.
//!
//! The harness does NOT implement search. Use cases provide domain data
//! only; the planner owns exploration and caller attribution.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod noise;
pub mod render;
pub mod runner;
pub mod use_case;
pub mod worlds;

pub use error::HarnessError;
pub use runner::{run, run_use_case, RunConfig, RunReport};
pub use use_case::UseCase;
