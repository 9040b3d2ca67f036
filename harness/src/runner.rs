//! Harness runner: solves a use case and packages the outcome.
//!
//! The runner uses ONLY the planner API. It does not search or attribute
//! callers itself.
//!
//! # Pipeline
//!
//! ```text
//! by_name() → UseCase::planner() → Planner::solve()
//!   → render_plan() → RunReport
//! ```

use std::fmt;

use clap::Parser;
use seqplan_search::{SearchOutcome, SearchPolicy, Strategy};
use tracing::info;

use crate::error::HarnessError;
use crate::render::render_plan;
use crate::use_case::UseCase;
use crate::worlds;

/// Command-line configuration of one run.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "solve_world", about = "Plan a sample use case and print its sequence diagram")]
pub struct RunConfig {
    /// Sample world to solve.
    #[arg(default_value = "object_instantiation")]
    pub world: String,

    /// Search strategy, full (`best_first_forward_search`) or short name.
    #[arg(long, default_value = "best_first")]
    pub strategy: Strategy,

    /// Seed for the randomized strategy.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Stop after this many expansions.
    #[arg(long)]
    pub max_expansions: Option<u64>,
}

impl RunConfig {
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        let policy = SearchPolicy::new(self.strategy).with_seed(self.seed);
        match self.max_expansions {
            Some(max) => policy.with_max_expansions(max),
            None => policy,
        }
    }
}

/// Outcome of one harness run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub use_case: String,
    pub outcome: SearchOutcome,
    /// Rendered plan table; `None` when unsolved.
    pub rendered: Option<String>,
}

impl fmt::Display for RunReport {
    /// The rendered plan and goal-test count, or the unsatisfied entities.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rendered) = &self.rendered {
            f.write_str(rendered)?;
        }
        writeln!(f, "# Goal Tests: {}", self.outcome.states_tested())?;
        if !self.outcome.is_solved() {
            writeln!(f, "Failed to satisfy the goals of the following objects:")?;
            for name in &self.outcome.unsatisfied {
                writeln!(f, "{name}")?;
            }
        }
        Ok(())
    }
}

/// Solve `use_case` under `policy`.
///
/// # Errors
///
/// Returns [`HarnessError::World`] for a malformed use case and
/// [`HarnessError::Search`] when the planner rejects it pre-flight.
pub fn run_use_case(use_case: &UseCase, policy: SearchPolicy) -> Result<RunReport, HarnessError> {
    let planner = use_case.planner(policy)?;
    let outcome = planner.solve(use_case.goals())?;
    info!(
        use_case = use_case.name(),
        solved = outcome.is_solved(),
        termination = %outcome.termination,
        "use case finished"
    );
    let rendered = outcome.plan.as_ref().map(render_plan);
    Ok(RunReport {
        use_case: use_case.name().to_string(),
        outcome,
        rendered,
    })
}

/// Resolve `config.world` and solve it.
///
/// # Errors
///
/// Returns [`HarnessError::UnknownWorld`] for an unregistered world name,
/// otherwise see [`run_use_case`].
pub fn run(config: &RunConfig) -> Result<RunReport, HarnessError> {
    let use_case = worlds::by_name(&config.world).ok_or_else(|| HarnessError::UnknownWorld {
        name: config.world.clone(),
        available: worlds::NAMES.join(", "),
    })?;
    run_use_case(&use_case, config.policy())
}
