//! Commands handed to the host for execution.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{OrchestrationError, OrchestrationResult};

/// Host-side operation a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostAction {
    /// Execute an `InsertionPlan`.
    InsertSounds,
    /// Execute a `MagnetPlan`.
    MagnetClips,
}

impl std::fmt::Display for HostAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostAction::InsertSounds => write!(f, "insertSounds"),
            HostAction::MagnetClips => write!(f, "magnetClips"),
        }
    }
}

/// `{ action, data, requestId }` envelope sent to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCommand {
    pub action: HostAction,
    pub data: serde_json::Value,
    pub request_id: String,
}

impl HostCommand {
    /// Wrap a serializable payload with a fresh request id.
    pub fn new<T: Serialize>(action: HostAction, payload: &T) -> OrchestrationResult<Self> {
        let data = serde_json::to_value(payload)
            .map_err(|source| OrchestrationError::Serialize { action, source })?;
        Ok(Self {
            action,
            data,
            request_id: Uuid::new_v4().to_string(),
        })
    }

    /// Replace the generated request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Serialize the whole envelope.
    pub fn to_json(&self) -> OrchestrationResult<String> {
        serde_json::to_string(self).map_err(|source| OrchestrationError::Serialize {
            action: self.action,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_shape() {
        let command = HostCommand::new(HostAction::MagnetClips, &json!({"movements": []}))
            .unwrap()
            .with_request_id("req-1");
        let value: serde_json::Value = serde_json::from_str(&command.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"action": "magnetClips", "data": {"movements": []}, "requestId": "req-1"})
        );
    }

    #[test]
    fn request_ids_are_unique() {
        let a = HostCommand::new(HostAction::InsertSounds, &1).unwrap();
        let b = HostCommand::new(HostAction::InsertSounds, &1).unwrap();
        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.action.to_string(), "insertSounds");
    }
}
