//! World module: the entity arena and goal predicates.
//!
//! Depends on `model`. The `WorldState` is the sole owner of entities;
//! everything else addresses them by name.

pub mod goal;
pub mod state;

pub use goal::Goals;
pub use state::WorldState;
