//! Model module: attribute values, entities and the actions bound to them.
//!
//! Depends on `world` only for the read-only `WorldState` handed to
//! predicates. Does not register or look up entities itself.

pub mod action;
pub mod attributes;
pub mod entity;
pub mod value;

pub use action::{Action, Effect, Predicate};
pub use attributes::Attributes;
pub use entity::Entity;
pub use value::Value;
