//! `Entity`: a named, typed, mutable bag of attributes.
//!
//! An entity may reference other entities by name (including itself, and
//! including cycles), may be flagged *dead* (logically not yet
//! instantiated) or *boundary* (only ever driven by the external actor),
//! and owns the actions bound to it.
//!
//! Cloning an entity copies attribute values and shares the bound actions.
//! Reference attributes are copied as names; resolving them is the
//! owning `WorldState`'s job, which is what keeps exactly one copy of each
//! entity per world regardless of how the references are wired.

use std::sync::Arc;

use crate::model::action::Action;
use crate::model::attributes::Attributes;
use crate::model::value::Value;
use crate::world::WorldState;

#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    class_tag: String,
    attributes: Attributes,
    initial: Attributes,
    dead: bool,
    boundary: bool,
    actions: Vec<Arc<Action>>,
}

impl Entity {
    /// Create a live, non-boundary entity. The attribute key set is fixed
    /// from here on.
    pub fn new<I, K, V>(name: impl Into<String>, class_tag: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let attributes: Attributes = attributes.into_iter().collect();
        Self {
            name: name.into(),
            class_tag: class_tag.into(),
            initial: attributes.clone(),
            attributes,
            dead: false,
            boundary: false,
            actions: Vec::new(),
        }
    }

    /// Create an entity with no attributes.
    #[must_use]
    pub fn empty(name: impl Into<String>, class_tag: impl Into<String>) -> Self {
        Self::new(name, class_tag, std::iter::empty::<(String, Value)>())
    }

    /// Builder: start dead, to be instantiated by an action's dependency.
    #[must_use]
    pub fn starting_dead(mut self) -> Self {
        self.dead = true;
        self
    }

    /// Builder: mark as a boundary entity.
    #[must_use]
    pub fn as_boundary(mut self) -> Self {
        self.boundary = true;
        self
    }

    /// Builder form of [`Entity::bind`].
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.bind(actions);
        self
    }

    /// Register actions on this entity, setting each action's receiver.
    pub fn bind(&mut self, actions: impl IntoIterator<Item = Action>) {
        for mut action in actions {
            action.bind_to(&self.name);
            self.actions.push(Arc::new(action));
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn class_tag(&self) -> &str {
        &self.class_tag
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn actions(&self) -> &[Arc<Action>] {
        &self.actions
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn set_dead(&mut self, dead: bool) {
        self.dead = dead;
    }

    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.boundary
    }

    pub fn set_boundary(&mut self, boundary: bool) {
        self.boundary = boundary;
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.attributes.flag(key)
    }

    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.attributes.int(key)
    }

    #[must_use]
    pub fn symbol(&self, key: &str) -> Option<&str> {
        self.attributes.symbol(key)
    }

    #[must_use]
    pub fn is(&self, key: &str, symbol: &str) -> bool {
        self.attributes.is(key, symbol)
    }

    #[must_use]
    pub fn reference(&self, key: &str) -> Option<&str> {
        self.attributes.reference(key)
    }

    /// True if any attribute references the entity called `name`.
    #[must_use]
    pub fn refers_to(&self, name: &str) -> bool {
        self.attributes.references().any(|(_, target)| target == name)
    }

    /// Evaluate `predicate` against this entity. A dead entity satisfies
    /// nothing.
    pub fn satisfy<P>(&self, predicate: &P, world: &WorldState) -> bool
    where
        P: Fn(&Entity, &WorldState) -> bool + ?Sized,
    {
        if self.dead {
            return false;
        }
        predicate(self, world)
    }

    /// Run `effect` with mutable access to this entity's attributes only.
    pub fn apply<F>(&mut self, effect: &F)
    where
        F: Fn(&mut Attributes) + ?Sized,
    {
        effect(&mut self.attributes);
    }

    /// Restore every attribute to its construction-time value.
    ///
    /// Referenced entities are reset by [`WorldState::reset`], which owns
    /// them.
    pub fn reset(&mut self) {
        self.attributes = self.initial.clone();
    }

    /// Field-by-field comparison that treats references as names.
    ///
    /// Bound actions compare by identity: clones share them.
    #[must_use]
    pub fn shallow_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.class_tag == other.class_tag
            && self.dead == other.dead
            && self.boundary == other.boundary
            && self.attributes == other.attributes
            && self.actions.len() == other.actions.len()
            && self
                .actions
                .iter()
                .zip(&other.actions)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.shallow_eq(other)
    }
}
