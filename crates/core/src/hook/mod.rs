//! CodeDeploy lifecycle hook payload.
//!
//! CodeDeploy invokes pre/post traffic hooks with a two-field event. The
//! event is decoded strictly: a missing, empty or non-string field is a
//! [`ValidationError`] instead of a silently empty identifier.

use serde::{Deserialize, Serialize};

use crate::storage::ValidationError;

/// Payload sent by CodeDeploy when running a lifecycle hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentHook {
    #[serde(rename = "DeploymentId")]
    pub deployment_id: String,
    #[serde(rename = "LifecycleEventHookExecutionId")]
    pub lifecycle_event_hook_execution_id: String,
}

impl DeploymentHook {
    /// Decodes a raw Lambda event.
    pub fn from_event(event: serde_json::Value) -> Result<Self, ValidationError> {
        let hook: DeploymentHook =
            serde_json::from_value(event).map_err(|e| ValidationError::Malformed(e.to_string()))?;

        if hook.deployment_id.is_empty() {
            return Err(ValidationError::MissingField("DeploymentId"));
        }
        if hook.lifecycle_event_hook_execution_id.is_empty() {
            return Err(ValidationError::MissingField(
                "LifecycleEventHookExecutionId",
            ));
        }

        Ok(hook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_complete_event() {
        let event = json!({
            "DeploymentId": "d-ABCDEF123",
            "LifecycleEventHookExecutionId": "exec-42"
        });

        let hook = DeploymentHook::from_event(event).unwrap();

        assert_eq!(hook.deployment_id, "d-ABCDEF123");
        assert_eq!(hook.lifecycle_event_hook_execution_id, "exec-42");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let event = json!({ "DeploymentId": "d-ABCDEF123" });

        let result = DeploymentHook::from_event(event);

        assert!(matches!(result, Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn test_mistyped_field_is_malformed() {
        let event = json!({
            "DeploymentId": 12,
            "LifecycleEventHookExecutionId": "exec-42"
        });

        let result = DeploymentHook::from_event(event);

        assert!(matches!(result, Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn test_empty_identifier_is_missing() {
        let event = json!({
            "DeploymentId": "d-ABCDEF123",
            "LifecycleEventHookExecutionId": ""
        });

        assert_eq!(
            DeploymentHook::from_event(event),
            Err(ValidationError::MissingField("LifecycleEventHookExecutionId"))
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let event = json!({
            "DeploymentId": "d-ABCDEF123",
            "LifecycleEventHookExecutionId": "exec-42",
            "Unexpected": true
        });

        assert!(DeploymentHook::from_event(event).is_ok());
    }
}
