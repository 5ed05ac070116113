use thiserror::Error;

use crate::core::{ChartId, DatasetId};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("chart not found: id={id}")]
    ChartNotFound { id: ChartId },

    #[error("dataset not found: id={id}")]
    DatasetNotFound { id: DatasetId },

    /// Failure reported by an extension hook. Returned to callers as-is.
    #[error("hook `{hook_id}` failed: {message}")]
    Hook { hook_id: String, message: String },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ChartError {
    #[must_use]
    pub fn hook(hook_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Hook {
            hook_id: hook_id.into(),
            message: message.into(),
        }
    }
}
