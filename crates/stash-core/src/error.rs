//! Error types for the Stash storage layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StashError>;

/// Failures surfaced by store operations.
///
/// Every violation is raised before the store is touched, so a failed
/// operation never leaves a partial mutation behind. Variants carry the
/// offending key so callers can match on them instead of scraping messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StashError {
    #[error("{reason}")]
    InvalidArgument { reason: String },

    #[error("key \"{key}\" already exists, use update_item to modify existing keys")]
    Conflict { key: String },

    #[error("key \"{key}\" does not exist in storage")]
    NotFound { key: String },
}

impl StashError {
    pub(crate) fn empty_key() -> Self {
        Self::InvalidArgument {
            reason: "key cannot be empty".to_string(),
        }
    }

    pub(crate) fn empty_value() -> Self {
        Self::InvalidArgument {
            reason: "value cannot be empty".to_string(),
        }
    }
}
