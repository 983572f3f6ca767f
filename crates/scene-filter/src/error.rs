//! Error types for scene filtering.

use thiserror::Error;

/// Errors from a filter pass as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The pass was cancelled before finishing.
    #[error("filter pass cancelled")]
    Cancelled,

    /// The worker thread panicked.
    #[error("filter worker failed: {0}")]
    Worker(String),

    /// A snapshot was computed for a different catalog.
    #[error("snapshot covers {actual} scenes but the catalog has {expected}")]
    SnapshotMismatch { expected: usize, actual: usize },
}

/// Failure evaluating a predicate for one scene.
///
/// Never aborts a pass: the scene is hidden and the failure counted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
    /// The scene lacks metadata the predicate needs.
    #[error("scene {scene} has no {field}")]
    MissingField { scene: String, field: &'static str },

    /// Any other evaluation failure.
    #[error("predicate failed for scene {scene}: {message}")]
    Failed { scene: String, message: String },
}

impl PredicateError {
    /// Create a MissingField error.
    pub fn missing(scene: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            scene: scene.into(),
            field,
        }
    }

    /// Create a Failed error.
    pub fn failed(scene: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            scene: scene.into(),
            message: message.into(),
        }
    }
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
