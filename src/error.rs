use std::path::PathBuf;

use thiserror::Error;

/// Failure to bring a classifier into memory. Never fatal: the affected panel
/// is disabled and the message is shown when the user tries to predict.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read model {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model {} is malformed: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("model {} expects {found} features but the form has {expected}", .path.display())]
    FeatureMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// At least one raw value did not parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("field {index} is not a valid number")]
pub struct InvalidInput {
    /// Position of the first offending field.
    pub index: usize,
}
