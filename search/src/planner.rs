//! Planner entry point.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use seqplan_kernel::{Goals, WorldState};
use tracing::info;

use crate::error::SearchError;
use crate::heuristic::{Heuristic, UnsatisfiedGoals};
use crate::operator::OperatorSet;
use crate::plan::{reconstruct, Plan};
use crate::policy::{SearchPolicy, Strategy};
use crate::stats::{SearchStats, TerminationReason};
use crate::strategy::{self, SearchContext};

/// Result of one planning run.
///
/// Either a plan or the names of goal entities still unsatisfied. The
/// best-first strategy reports them for the lowest-`h` state it saw; the
/// others report them for the state they stopped in (randomized) or the
/// initial state (depth-first, breadth-first).
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub plan: Option<Plan>,
    pub unsatisfied: Vec<String>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.plan.is_some()
    }

    /// States dequeued and goal-tested.
    #[must_use]
    pub fn states_tested(&self) -> u64 {
        self.stats.states_tested
    }
}

/// Forward planner over one initial world.
///
/// The initial state is never mutated: every run explores clones.
pub struct Planner {
    initial: WorldState,
    policy: SearchPolicy,
    heuristic: Box<dyn Heuristic>,
}

impl Planner {
    #[must_use]
    pub fn new(initial: WorldState, policy: SearchPolicy) -> Self {
        Self {
            initial,
            policy,
            heuristic: Box::new(UnsatisfiedGoals),
        }
    }

    /// Replace the best-first heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: impl Heuristic + 'static) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    #[must_use]
    pub fn initial(&self) -> &WorldState {
        &self.initial
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Solve `goals`, seeding the randomized strategy from the policy.
    ///
    /// # Errors
    ///
    /// See [`Planner::solve_with_rng`].
    pub fn solve(&self, goals: &Goals) -> Result<SearchOutcome, SearchError> {
        let mut rng = StdRng::seed_from_u64(self.policy.seed);
        self.solve_with_rng(goals, &mut rng)
    }

    /// Solve `goals` drawing randomized choices from `rng`.
    ///
    /// An unreachable goal is `Ok` with no plan.
    ///
    /// # Errors
    ///
    /// Pre-flight failures only: an invalid policy, an empty goal map, a
    /// goal naming an unregistered entity, or an action depending on one.
    pub fn solve_with_rng(
        &self,
        goals: &Goals,
        rng: &mut dyn RngCore,
    ) -> Result<SearchOutcome, SearchError> {
        self.policy.validate()?;
        if goals.is_empty() {
            return Err(SearchError::EmptyGoals);
        }
        if let Some(name) = goals.names().find(|name| !self.initial.contains(name)) {
            return Err(SearchError::UnknownGoalEntity {
                name: name.to_string(),
            });
        }
        let operators = OperatorSet::from_state(&self.initial);
        operators.validate_dependencies(&self.initial)?;

        let strategy = self.policy.strategy;
        info!(
            %strategy,
            world = self.initial.name(),
            entities = self.initial.len(),
            operators = operators.len(),
            ?goals,
            "planning"
        );

        let raw = strategy::run(
            SearchContext {
                initial: &self.initial,
                goals,
                operators: &operators,
                policy: &self.policy,
                heuristic: self.heuristic.as_ref(),
            },
            rng,
        );
        let plan = raw.path.map(|steps| reconstruct(&self.initial, &steps));

        info!(
            %strategy,
            termination = %raw.termination,
            states_tested = raw.stats.states_tested,
            plan_len = plan.as_ref().map(Plan::len),
            unsatisfied = ?raw.unsatisfied,
            "planning finished"
        );

        Ok(SearchOutcome {
            strategy,
            plan,
            unsatisfied: raw.unsatisfied,
            termination: raw.termination,
            stats: raw.stats,
        })
    }
}
