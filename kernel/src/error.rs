//! Typed setup errors.
//!
//! `WorldError` covers structural misuse of the data model: registering
//! two entities under one name, or naming an entity that was never
//! registered. Planning failures are not errors and never appear here.

use thiserror::Error;

/// Typed failure for world construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// An entity with this name is already registered in the world.
    #[error("entity `{name}` is already registered")]
    DuplicateEntity { name: String },
    /// No entity with this name is registered in the world.
    #[error("no entity named `{name}` is registered")]
    UnknownEntity { name: String },
}

impl WorldError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownEntity {
            name: name.to_string(),
        }
    }
}
