//! `Goals`: entity name → predicate, in declaration order.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::WorldError;
use crate::model::action::Predicate;
use crate::model::entity::Entity;
use crate::world::state::WorldState;

/// A conjunction of per-entity goal predicates.
///
/// Declaration order is kept so unsatisfied-name diagnostics are
/// deterministic.
#[derive(Clone, Default)]
pub struct Goals {
    entries: IndexMap<String, Predicate>,
}

impl Goals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Goals::insert`].
    #[must_use]
    pub fn with<F>(mut self, entity: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Entity, &WorldState) -> bool + Send + Sync + 'static,
    {
        self.insert(entity, predicate);
        self
    }

    /// Set the goal predicate for `entity`, replacing any previous one.
    pub fn insert<F>(&mut self, entity: impl Into<String>, predicate: F)
    where
        F: Fn(&Entity, &WorldState) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(entity.into(), Arc::new(predicate));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every goal names a registered entity.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownEntity`] for the first unregistered name.
    pub fn validate(&self, world: &WorldState) -> Result<(), WorldError> {
        for name in self.names() {
            world.require(name)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
