//! `Action`: a named operation guarded by a precondition and defined by an
//! effect.
//!
//! Actions are data plus closures. They are evaluated only through
//! [`Entity::satisfy`](crate::model::Entity::satisfy) and
//! [`Entity::apply`](crate::model::Entity::apply).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::model::attributes::Attributes;
use crate::model::entity::Entity;
use crate::model::value::Value;
use crate::world::WorldState;

/// Side-effect-free predicate over an entity, with read access to the
/// enclosing world for cross-entity lookups.
pub type Predicate = Arc<dyn Fn(&Entity, &WorldState) -> bool + Send + Sync>;

/// State change restricted to the receiver's own attributes.
pub type Effect = Arc<dyn Fn(&mut Attributes) + Send + Sync>;

/// A guarded, effect-producing operation bound to one receiver entity.
///
/// An unset precondition always holds; an unset effect changes nothing.
#[derive(Clone)]
pub struct Action {
    name: String,
    parameters: IndexMap<String, Value>,
    precondition: Predicate,
    effect: Effect,
    receiver: Option<String>,
    dependencies: Vec<String>,
}

impl Action {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: IndexMap::new(),
            precondition: Arc::new(|_, _| true),
            effect: Arc::new(|_| {}),
            receiver: None,
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_precondition<F>(mut self, precondition: F) -> Self
    where
        F: Fn(&Entity, &WorldState) -> bool + Send + Sync + 'static,
    {
        self.precondition = Arc::new(precondition);
        self
    }

    #[must_use]
    pub fn with_effect<F>(mut self, effect: F) -> Self
    where
        F: Fn(&mut Attributes) + Send + Sync + 'static,
    {
        self.effect = Arc::new(effect);
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Declare that choosing this action instantiates the entity `name`.
    #[must_use]
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parameters(&self) -> &IndexMap<String, Value> {
        &self.parameters
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Parameter names in declaration order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<String> {
        self.parameters.keys().cloned().collect()
    }

    #[must_use]
    pub fn precondition(&self) -> &Predicate {
        &self.precondition
    }

    #[must_use]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Name of the owning entity; `None` until the action is bound.
    #[must_use]
    pub fn receiver(&self) -> Option<&str> {
        self.receiver.as_deref()
    }

    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub(crate) fn bind_to(&mut self, receiver: &str) {
        self.receiver = Some(receiver.to_string());
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("receiver", &self.receiver)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}
