//! Error types for plan orchestration.

use thiserror::Error;

use super::command::HostAction;
use crate::models::InvalidRecord;

/// Orchestration failures. Both variants point at an integration bug rather
/// than a condition the user can fix.
#[derive(Error, Debug)]
pub enum OrchestrationError {
    /// The host sent a clip record the engine cannot use.
    #[error("Invalid clip data: {0}")]
    InvalidClip(#[from] InvalidRecord),

    /// A plan could not be turned into a command payload.
    #[error("Failed to serialize {action} command: {source}")]
    Serialize {
        action: HostAction,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for orchestration.
pub type OrchestrationResult<T> = Result<T, OrchestrationError>;
