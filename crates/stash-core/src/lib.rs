//! # Stash Core
//!
//! Keyed ephemeral storage for behavior-driven test suites.
//!
//! Step definitions and lifecycle hooks need a way to hand values to each
//! other without ambient globals scattered through the codebase. Stash keeps
//! that state in two scoped stores:
//! - **Worker scope** lives for the whole test worker process
//! - **Local scope** holds state for the currently executing scenario
//!
//! Both scopes share one implementation with strict create/update semantics:
//! inserting an existing key or updating a missing one is an error, never a
//! silent overwrite.

pub mod error;
pub mod scope;
pub mod store;

pub use error::{Result, StashError};
pub use scope::Scope;
pub use store::{Entry, Store};

/// Current Stash version for compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stash build information for telemetry and debugging
pub const BUILD_INFO: &str = concat!(
    "Stash ",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_NAME"),
    ")"
);
