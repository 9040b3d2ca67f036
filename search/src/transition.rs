//! State transitions: apply one operator, instantiating its dependencies.
//!
//! A transition applies the action's effect to the receiver and marks
//! each dead dependency alive. Every dependency that actually comes alive
//! yields a synthetic [`Step::Create`] right after the call that caused
//! it. A dependency that is already alive is left as is and yields no
//! step.

use std::sync::Arc;

use seqplan_kernel::{Action, WorldState};
use tracing::warn;

use crate::operator::Operator;

/// One raw step of a plan, before caller attribution.
#[derive(Debug, Clone)]
pub enum Step {
    /// The action was invoked on `receiver`.
    Call {
        receiver: String,
        action: Arc<Action>,
    },
    /// `creator` instantiated the previously dead entity `created`.
    Create { creator: String, created: String },
}

impl Step {
    /// Action name for calls; `None` for synthetic creates.
    #[must_use]
    pub fn action_name(&self) -> Option<&str> {
        match self {
            Self::Call { action, .. } => Some(action.name()),
            Self::Create { .. } => None,
        }
    }
}

/// True if an action called `name` already occurs among `path`'s calls.
pub(crate) fn path_uses(path: &[Step], name: &str) -> bool {
    path.iter().any(|step| step.action_name() == Some(name))
}

/// Apply `op` to `state` in place, returning the steps it produced.
pub(crate) fn apply_in_place(state: &mut WorldState, op: &Operator) -> Vec<Step> {
    if let Some(receiver) = state.entity_mut(op.receiver()) {
        receiver.apply(&**op.action().effect());
    }
    let mut steps = vec![Step::Call {
        receiver: op.receiver().to_string(),
        action: Arc::clone(op.action()),
    }];
    for dependency in op.action().dependencies() {
        match state.revive(dependency) {
            Ok(true) => steps.push(Step::Create {
                creator: op.receiver().to_string(),
                created: dependency.clone(),
            }),
            Ok(false) => warn!(
                action = op.name(),
                dependency = dependency.as_str(),
                "dependency already alive; create skipped"
            ),
            Err(err) => warn!(action = op.name(), %err, "dependency lookup failed"),
        }
    }
    steps
}

/// Clone `state` and apply `op` to the clone.
pub(crate) fn successor(state: &WorldState, op: &Operator) -> (WorldState, Vec<Step>) {
    let mut child = state.clone();
    let steps = apply_in_place(&mut child, op);
    (child, steps)
}
