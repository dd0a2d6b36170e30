//! Scope labels for store lifetimes

use serde::{Deserialize, Serialize};

/// Lifetime partition a store belongs to.
///
/// There is no behavioral difference between scopes; the label exists so the
/// two singleton instances can be addressed by name and told apart in log
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Survives for the lifetime of the test worker process.
    Worker,
    /// Holds state local to the currently executing scenario; cleared between
    /// scenarios by the consuming harness.
    Local,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Worker => "worker",
            Scope::Local => "local",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
