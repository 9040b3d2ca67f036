//! The operator set: every action bound to every entity at search start.
//!
//! The entity *set* is fixed for the whole search; only liveness flags
//! change. Operators therefore address their receiver by name and are
//! re-evaluated against whichever state the strategy is looking at.

use std::sync::Arc;

use seqplan_kernel::{Action, WorldState};

use crate::error::SearchError;

/// An action paired with the name of its receiver.
#[derive(Debug, Clone)]
pub struct Operator {
    receiver: String,
    action: Arc<Action>,
}

impl Operator {
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    #[must_use]
    pub fn action(&self) -> &Arc<Action> {
        &self.action
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.action.name()
    }

    /// The receiver exists, is alive, and satisfies the precondition.
    #[must_use]
    pub fn is_applicable(&self, state: &WorldState) -> bool {
        state.satisfies(&self.receiver, &**self.action.precondition())
    }
}

/// Flattened, ordered operator list.
///
/// Order is entity registration order, then bind order; every strategy
/// enumerates candidates in this order.
#[derive(Debug, Clone, Default)]
pub struct OperatorSet {
    operators: Vec<Operator>,
}

impl OperatorSet {
    #[must_use]
    pub fn from_state(state: &WorldState) -> Self {
        let operators = state
            .entities()
            .flat_map(|entity| {
                entity.actions().iter().map(|action| Operator {
                    receiver: entity.name().to_string(),
                    action: Arc::clone(action),
                })
            })
            .collect();
        Self { operators }
    }

    /// Check that every declared dependency names a registered entity.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownDependency`] for the first dangling
    /// dependency.
    pub fn validate_dependencies(&self, state: &WorldState) -> Result<(), SearchError> {
        for op in &self.operators {
            if let Some(missing) = op
                .action
                .dependencies()
                .iter()
                .find(|name| !state.contains(name))
            {
                return Err(SearchError::UnknownDependency {
                    action: op.name().to_string(),
                    receiver: op.receiver.clone(),
                    name: missing.clone(),
                });
            }
        }
        Ok(())
    }

    /// Operators applicable in `state`, in operator order.
    #[must_use]
    pub fn applicable(&self, state: &WorldState) -> Vec<&Operator> {
        self.operators
            .iter()
            .filter(|op| op.is_applicable(state))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
