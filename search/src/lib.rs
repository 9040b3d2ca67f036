//! Seqplan Search: forward state-space planning over a `seqplan_kernel`
//! world.
//!
//! This crate provides the search layer. It depends only on
//! `seqplan_kernel`; it does NOT depend on `seqplan_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! seqplan_kernel  ←  seqplan_search  ←  seqplan_harness
//! (entities, world)   (strategies, plans)  (use cases, worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`Planner`] -- validates inputs, runs a strategy, attributes callers
//! - [`SearchPolicy`] / [`Strategy`] -- strategy selection and optional budgets
//! - [`Heuristic`] -- best-first state estimate (default: unsatisfied goal count)
//! - [`Plan`] / [`CallRecord`] / [`Caller`] -- the sequence-diagram trace
//! - [`SearchOutcome`] -- plan or unsatisfied-goal diagnostic, plus counters

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod operator;
pub mod plan;
pub mod planner;
pub mod policy;
pub mod stats;
mod strategy;
pub mod transition;

pub use error::SearchError;
pub use heuristic::{Heuristic, Uniform, UnsatisfiedGoals};
pub use plan::{reconstruct, CallRecord, Caller, Plan, CREATE_ACTION};
pub use planner::{Planner, SearchOutcome};
pub use policy::{ParseStrategyError, SearchPolicy, Strategy};
pub use stats::{SearchStats, TerminationReason};
