//! Seqplan Kernel: the data model of the sequence-diagram planner.
//!
//! # API Surface
//!
//! - [`model::Entity`] -- a named, typed bag of attributes with bound actions
//! - [`model::Action`] -- a guarded operation bound to exactly one entity
//! - [`world::WorldState`] -- the arena of entities at one point of the search
//! - [`world::Goals`] -- named goal predicates, one per entity
//!
//! # Cross-entity navigation
//!
//! Entities never hold each other. A reference attribute stores a name,
//! and predicates resolve it through the `WorldState` they are handed.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod model;
pub mod world;

pub use error::WorldError;
pub use model::{Action, Attributes, Effect, Entity, Predicate, Value};
pub use world::{Goals, WorldState};
