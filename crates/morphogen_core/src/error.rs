//! Error types for morphogen_core.
//!
//! The only failures a run can have are configuration failures, and they
//! are all detected before tick 0 is built.

use thiserror::Error;

/// A sentence network that cannot be simulated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two sentences share an id.
    #[error("Duplicate sentence id: {id}")]
    DuplicateId { id: String },

    /// A `target_id` names no sentence of the network.
    #[error("Sentence {sentence} targets unknown sentence {target}")]
    UnresolvedTarget { sentence: String, target: String },

    /// A sentence has an empty id.
    #[error("Sentence at position {index} has an empty id")]
    EmptyId { index: usize },
}

/// Result type alias for morphogen_core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Two sentences share `id`.
    #[must_use]
    pub fn duplicate_id<S: Into<String>>(id: S) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    #[must_use]
    pub fn unresolved_target<S: Into<String>, T: Into<String>>(sentence: S, target: T) -> Self {
        Self::UnresolvedTarget {
            sentence: sentence.into(),
            target: target.into(),
        }
    }
}
