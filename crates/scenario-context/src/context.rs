//! Scenario lifecycle wiring

use stash_core::Store;
use tracing::debug;
use uuid::Uuid;

/// State handed to a scenario when it starts.
///
/// Construction is the Before-hook: the local store is cleared so nothing
/// written by a previous scenario leaks in, while the worker store is left
/// untouched and keeps accumulating run-wide state. Dropping the context is
/// the After-hook; the stores own no external resources, so there is nothing
/// to tear down.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    scenario_id: Uuid,
    worker: Store,
    local: Store,
}

impl ScenarioContext {
    /// Context over the process-wide scoped stores.
    pub fn new() -> Self {
        Self::with_stores(Store::worker(), Store::local())
    }

    /// Context over explicitly supplied stores.
    ///
    /// Lets tests isolate themselves from process-wide state by injecting
    /// throwaway instances.
    pub fn with_stores(worker: Store, local: Store) -> Self {
        let scenario_id = Uuid::new_v4();
        local.clear();
        debug!(%scenario_id, "scenario context ready");
        Self {
            scenario_id,
            worker,
            local,
        }
    }

    /// Store that survives across scenarios in this worker process.
    pub fn worker(&self) -> &Store {
        &self.worker
    }

    /// Store local to the current scenario.
    pub fn local(&self) -> &Store {
        &self.local
    }

    pub fn scenario_id(&self) -> Uuid {
        self.scenario_id
    }
}

impl Default for ScenarioContext {
    fn default() -> Self {
        Self::new()
    }
}
