//! `UseCase`: a named group of entities and the goals they must reach.

use seqplan_kernel::{Entity, Goals, WorldError, WorldState};
use seqplan_search::{Planner, SearchPolicy};

/// A set of entities plus one goal predicate per interesting entity.
///
/// The use case keeps the entities in their construction state; every
/// [`UseCase::initial_state`] call builds a fresh world from them.
#[derive(Debug, Clone)]
pub struct UseCase {
    name: String,
    entities: Vec<Entity>,
    goals: Goals,
}

impl UseCase {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
            goals: Goals::new(),
        }
    }

    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    #[must_use]
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = Entity>) -> Self {
        self.entities.extend(entities);
        self
    }

    /// Add the postcondition the named entity must satisfy.
    #[must_use]
    pub fn with_goal<F>(mut self, entity: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Entity, &WorldState) -> bool + Send + Sync + 'static,
    {
        self.goals.insert(entity, predicate);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    #[must_use]
    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Restore every entity's attributes to their construction values.
    pub fn reset(&mut self) {
        for entity in &mut self.entities {
            entity.reset();
        }
    }

    /// Build a world named after the use case holding copies of its
    /// entities.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if two entities share a name.
    pub fn initial_state(&self) -> Result<WorldState, WorldError> {
        WorldState::from_entities(self.name.clone(), self.entities.iter().cloned())
    }

    /// A planner over [`UseCase::initial_state`].
    ///
    /// # Errors
    ///
    /// See [`UseCase::initial_state`].
    pub fn planner(&self, policy: SearchPolicy) -> Result<Planner, WorldError> {
        Ok(Planner::new(self.initial_state()?, policy))
    }
}
