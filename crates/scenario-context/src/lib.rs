//! Per-scenario fixture context for BDD suites
//!
//! The support layer a cucumber world builds on: one value owned by the
//! running scenario that wires together the worker- and scenario-scoped
//! stores and takes care of the between-scenario cleanup the stores
//! themselves stay out of.

mod context;

pub use context::ScenarioContext;

// Re-export the storage surface for step definitions.
pub use stash_core::{Entry, Result, Scope, StashError, Store};
