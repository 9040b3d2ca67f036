//! Harness errors.

use seqplan_kernel::WorldError;
use seqplan_search::SearchError;
use thiserror::Error;

/// Error during a harness run.
///
/// An unsolved use case is not an error: it is a [`crate::RunReport`]
/// without a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// No sample world is registered under this name.
    #[error("unknown world `{name}` (available: {available})")]
    UnknownWorld { name: String, available: String },
    /// The use case's entities do not form a valid world.
    #[error(transparent)]
    World(#[from] WorldError),
    /// The planner rejected the use case before searching.
    #[error(transparent)]
    Search(#[from] SearchError),
}
