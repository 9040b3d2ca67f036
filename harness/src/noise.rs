//! Inert filler actions for performance experiments.

use seqplan_kernel::Action;

/// `count` always-applicable, no-op actions named `method_0`, `method_1`, ...
///
/// Bind them to any entity to widen the branching factor without changing
/// which plans exist.
#[must_use]
pub fn noise_actions(count: usize) -> Vec<Action> {
    (0..count).map(|n| Action::new(format!("method_{n}"))).collect()
}
