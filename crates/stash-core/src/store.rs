//! Keyed ephemeral store implementation
//!
//! A clonable handle over shared state: clones are cheap and all point at the
//! same entries, which is what lets hooks and step definitions in different
//! call frames talk to one store.

use crate::error::{Result, StashError};
use crate::scope::Scope;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// One key/value pair held by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

static WORKER: Lazy<Store> = Lazy::new(|| Store::new(Scope::Worker));
static LOCAL: Lazy<Store> = Lazy::new(|| Store::new(Scope::Local));

/// Strict key/value container with explicit create/update/delete semantics.
///
/// [`set_item`](Store::set_item) never overwrites and
/// [`update_item`](Store::update_item) never creates; every violation is a
/// typed error raised before any mutation. Entries keep their insertion order
/// for enumeration.
#[derive(Debug, Clone)]
pub struct Store {
    scope: Scope,
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    /// Insertion order of live keys; an update keeps the original position.
    order: Vec<String>,
}

impl Store {
    /// Create an isolated store.
    ///
    /// Test code that wants to stay clear of process-wide state constructs
    /// its own instance and passes it along; the scoped singletons are the
    /// default wiring for suites.
    pub fn new(scope: Scope) -> Self {
        debug!(%scope, "initializing store");
        Self {
            scope,
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Handle to the process-wide worker-scoped store.
    pub fn worker() -> Store {
        WORKER.clone()
    }

    /// Handle to the process-wide scenario-scoped store.
    pub fn local() -> Store {
        LOCAL.clone()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Insert a new entry. An existing key is a conflict, not an update.
    #[instrument(skip(self, value), fields(scope = %self.scope))]
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        require_key(key)?;
        require_value(value)?;

        let mut inner = self.inner.write();
        if inner.entries.contains_key(key) {
            return Err(StashError::Conflict {
                key: key.to_string(),
            });
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.order.push(key.to_string());

        debug!("stored new entry");
        Ok(())
    }

    /// Read the value stored under `key`.
    pub fn get_item(&self, key: &str) -> Result<String> {
        require_key(key)?;

        self.inner.read().entries.get(key).cloned().ok_or_else(|| {
            StashError::NotFound {
                key: key.to_string(),
            }
        })
    }

    /// Overwrite the value of an existing entry.
    #[instrument(skip(self, value), fields(scope = %self.scope))]
    pub fn update_item(&self, key: &str, value: &str) -> Result<()> {
        require_key(key)?;
        require_value(value)?;

        let mut inner = self.inner.write();
        match inner.entries.get_mut(key) {
            Some(stored) => {
                *stored = value.to_string();
                debug!("updated entry");
                Ok(())
            }
            None => Err(StashError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Delete an existing entry.
    #[instrument(skip(self), fields(scope = %self.scope))]
    pub fn remove_item(&self, key: &str) -> Result<()> {
        require_key(key)?;

        let mut inner = self.inner.write();
        if inner.entries.remove(key).is_none() {
            return Err(StashError::NotFound {
                key: key.to_string(),
            });
        }
        inner.order.retain(|k| k != key);

        debug!("removed entry");
        Ok(())
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.entries.clear();
        inner.order.clear();
        debug!(scope = %self.scope, "cleared store");
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Independent copy of the full mapping.
    ///
    /// Mutating the returned map does not touch the store.
    pub fn items(&self) -> HashMap<String, String> {
        self.inner.read().entries.clone()
    }

    /// All entries in insertion order.
    pub fn to_vec(&self) -> Vec<Entry> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .map(|key| Entry {
                key: key.clone(),
                value: inner.entries[key].clone(),
            })
            .collect()
    }
}

fn require_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StashError::empty_key());
    }
    Ok(())
}

fn require_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StashError::empty_value());
    }
    Ok(())
}
