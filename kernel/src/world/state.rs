//! `WorldState`: one point in the search space.
//!
//! An arena of entities keyed by name. Reference attributes store names,
//! so a clone of the table is already correctly relinked: every reference
//! in the copy, cycles included, resolves to the copy's own entity, and
//! each source entity is copied exactly once. Branch isolation during
//! search comes entirely from cloning a state before mutating it.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::WorldError;
use crate::model::action::{Action, Predicate};
use crate::model::attributes::Attributes;
use crate::model::entity::Entity;
use crate::model::value::Value;
use crate::world::goal::Goals;

/// A named, keyed collection of entities.
///
/// Iteration follows registration order, which fixes operator order and
/// diagnostics order for the search strategies.
#[derive(Debug, Clone, Default)]
pub struct WorldState {
    name: String,
    entities: IndexMap<String, Entity>,
}

impl WorldState {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: IndexMap::new(),
        }
    }

    /// Build a world from `entities`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if two entities share a name.
    pub fn from_entities(
        name: impl Into<String>,
        entities: impl IntoIterator<Item = Entity>,
    ) -> Result<Self, WorldError> {
        let mut world = Self::new(name);
        world.add_all(entities)?;
        Ok(world)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Register an entity under its name.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if the name is taken; the
    /// registered entity is left untouched.
    pub fn add(&mut self, entity: Entity) -> Result<(), WorldError> {
        if self.entities.contains_key(entity.name()) {
            return Err(WorldError::DuplicateEntity {
                name: entity.name().to_string(),
            });
        }
        self.entities.insert(entity.name().to_string(), entity);
        Ok(())
    }

    /// Register several entities, stopping at the first duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] on the first name clash.
    pub fn add_all(&mut self, entities: impl IntoIterator<Item = Entity>) -> Result<(), WorldError> {
        for entity in entities {
            self.add(entity)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.get_mut(name)
    }

    /// Lookup that treats a missing name as a setup error.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownEntity`] if `name` is not registered.
    pub fn require(&self, name: &str) -> Result<&Entity, WorldError> {
        self.entity(name).ok_or_else(|| WorldError::unknown(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// First registered entity of the given class.
    #[must_use]
    pub fn first_of_class(&self, class_tag: &str) -> Option<&Entity> {
        self.entities.values().find(|e| e.class_tag() == class_tag)
    }

    pub fn of_class<'a>(&'a self, class_tag: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities
            .values()
            .filter(move |e| e.class_tag() == class_tag)
    }

    #[must_use]
    pub fn contains_class(&self, class_tag: &str) -> bool {
        self.first_of_class(class_tag).is_some()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Every action bound to every registered entity, dead or alive, in
    /// registration order.
    pub fn actions(&self) -> impl Iterator<Item = &Arc<Action>> {
        self.entities.values().flat_map(Entity::actions)
    }

    /// The entity referenced by `entity`'s attribute `key`, if any.
    #[must_use]
    pub fn follow<'a>(&'a self, entity: &Entity, key: &str) -> Option<&'a Entity> {
        entity.reference(key).and_then(|target| self.entity(target))
    }

    /// Follow a chain of reference attributes, e.g. `["watch", "time"]`.
    #[must_use]
    pub fn follow_path<'a>(&'a self, entity: &'a Entity, keys: &[&str]) -> Option<&'a Entity> {
        keys.iter()
            .try_fold(entity, |current, key| self.follow(current, key))
    }

    /// Evaluate `predicate` on the named entity. Missing or dead entities
    /// satisfy nothing.
    pub fn satisfies<P>(&self, name: &str, predicate: &P) -> bool
    where
        P: Fn(&Entity, &WorldState) -> bool + ?Sized,
    {
        self.entity(name)
            .is_some_and(|entity| entity.satisfy(predicate, self))
    }

    fn holds(&self, name: &str, predicate: &Predicate) -> bool {
        self.satisfies(name, &**predicate)
    }

    /// True if every goal holds.
    #[must_use]
    pub fn satisfy(&self, goals: &Goals) -> bool {
        goals
            .iter()
            .all(|(name, predicate)| self.holds(name, predicate))
    }

    /// Number of goal entities currently failing their predicate.
    #[must_use]
    pub fn unsatisfied_count(&self, goals: &Goals) -> usize {
        goals
            .iter()
            .filter(|(name, predicate)| !self.holds(name, predicate))
            .count()
    }

    /// Names of goal entities currently failing their predicate, in goal
    /// declaration order.
    #[must_use]
    pub fn unsatisfied_names(&self, goals: &Goals) -> Vec<String> {
        goals
            .iter()
            .filter(|(name, predicate)| !self.holds(name, predicate))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Run `effect` on the named entity's attributes.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownEntity`] if `name` is not registered.
    pub fn apply<F>(&mut self, name: &str, effect: &F) -> Result<(), WorldError>
    where
        F: Fn(&mut Attributes) + ?Sized,
    {
        let entity = self
            .entities
            .get_mut(name)
            .ok_or_else(|| WorldError::unknown(name))?;
        entity.apply(effect);
        Ok(())
    }

    /// Mark the named entity alive. Returns `true` if it was dead.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownEntity`] if `name` is not registered.
    pub fn revive(&mut self, name: &str) -> Result<bool, WorldError> {
        let entity = self
            .entities
            .get_mut(name)
            .ok_or_else(|| WorldError::unknown(name))?;
        let was_dead = entity.is_dead();
        entity.set_dead(false);
        Ok(was_dead)
    }

    /// Live entities holding a reference to `name`, directly or inside a
    /// list attribute.
    ///
    /// The named entity itself is included if it references itself.
    #[must_use]
    pub fn referrers_of(&self, name: &str) -> Vec<&Entity> {
        self.entities
            .values()
            .filter(|e| !e.is_dead() && e.refers_to(name))
            .collect()
    }

    /// Restore the named entity and, transitively, every entity it
    /// references to construction-time values. Cycle-safe.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownEntity`] if `name` is not registered.
    pub fn reset(&mut self, name: &str) -> Result<(), WorldError> {
        self.require(name)?;
        let mut visited: HashSet<String> = HashSet::new();
        let mut pending = vec![name.to_string()];
        while let Some(current) = pending.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            // Dangling references are skipped: there is nothing to reset.
            let Some(entity) = self.entities.get_mut(&current) else {
                continue;
            };
            entity.reset();
            pending.extend(
                entity
                    .attributes()
                    .references()
                    .map(|(_, target)| target.to_string()),
            );
        }
        Ok(())
    }

    /// Restore every entity to construction-time values.
    pub fn reset_all(&mut self) {
        for entity in self.entities.values_mut() {
            entity.reset();
        }
    }

    /// Deep structural comparison with `other`.
    ///
    /// Reference attributes are compared by following them into both
    /// worlds. A visited set of `(self name, other name)` pairs cuts the
    /// recursion on self-references and cycles.
    #[must_use]
    pub fn structurally_equal(&self, other: &WorldState) -> bool {
        if self.entities.len() != other.entities.len() {
            return false;
        }
        let mut visited: HashSet<(String, String)> = HashSet::new();
        self.entities.keys().all(|name| {
            other.entities.contains_key(name) && self.entity_eq(name, other, name, &mut visited)
        })
    }

    fn entity_eq(
        &self,
        a: &str,
        other: &WorldState,
        b: &str,
        visited: &mut HashSet<(String, String)>,
    ) -> bool {
        if !visited.insert((a.to_string(), b.to_string())) {
            return true;
        }
        let (x, y) = match (self.entity(a), other.entity(b)) {
            (Some(x), Some(y)) => (x, y),
            (None, None) => return a == b,
            _ => return false,
        };
        if x.name() != y.name()
            || x.class_tag() != y.class_tag()
            || x.is_dead() != y.is_dead()
            || x.is_boundary() != y.is_boundary()
            || x.actions().len() != y.actions().len()
            || !x
                .actions()
                .iter()
                .zip(y.actions())
                .all(|(p, q)| Arc::ptr_eq(p, q))
            || x.attributes().len() != y.attributes().len()
        {
            return false;
        }
        x.attributes()
            .iter()
            .zip(y.attributes().iter())
            .all(|((ka, va), (kb, vb))| ka == kb && self.value_eq(va, other, vb, visited))
    }

    fn value_eq(
        &self,
        a: &Value,
        other: &WorldState,
        b: &Value,
        visited: &mut HashSet<(String, String)>,
    ) -> bool {
        match (a, b) {
            (Value::Ref(ta), Value::Ref(tb)) => self.entity_eq(ta, other, tb, visited),
            (Value::List(la), Value::List(lb)) => {
                la.len() == lb.len()
                    && la
                        .iter()
                        .zip(lb)
                        .all(|(x, y)| self.value_eq(x, other, y, visited))
            }
            _ => a == b,
        }
    }
}

impl PartialEq for WorldState {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_equal(other)
    }
}
