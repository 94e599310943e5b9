//! CodeDeploy lifecycle hook.
//!
//! Runs as a pre/post traffic hook and always reports `Succeeded` once the
//! event has been decoded.

use async_trait::async_trait;
use aws_sdk_codedeploy::error::DisplayErrorContext;
use aws_sdk_codedeploy::types::LifecycleEventStatus;
use serde_json::Value;
use thiserror::Error;

use notes_core::hook::DeploymentHook;
use notes_core::storage::ValidationError;

/// Errors returned by the deploy hook.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("invalid lifecycle event: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to report lifecycle hook status: {0}")]
    Report(String),
}

/// Stand-in for `PutLifecycleEventHookExecutionStatus`.
#[async_trait]
pub trait LifecycleHookApi: Send + Sync {
    async fn report_status(
        &self,
        hook: &DeploymentHook,
        status: LifecycleEventStatus,
    ) -> Result<(), HookError>;
}

#[async_trait]
impl LifecycleHookApi for aws_sdk_codedeploy::Client {
    async fn report_status(
        &self,
        hook: &DeploymentHook,
        status: LifecycleEventStatus,
    ) -> Result<(), HookError> {
        self.put_lifecycle_event_hook_execution_status()
            .deployment_id(&hook.deployment_id)
            .lifecycle_event_hook_execution_id(&hook.lifecycle_event_hook_execution_id)
            .status(status)
            .send()
            .await
            .map_err(|e| HookError::Report(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }
}

/// Decodes the CodeDeploy event and reports the hook as succeeded.
pub async fn handle_deployment_hook(
    api: &dyn LifecycleHookApi,
    payload: Value,
    request_id: &str,
) -> Result<(), HookError> {
    let hook = DeploymentHook::from_event(payload).inspect_err(|err| {
        tracing::warn!(request_id, error = %err, "Rejected lifecycle event");
    })?;

    tracing::info!(
        request_id,
        deployment_id = %hook.deployment_id,
        execution_id = %hook.lifecycle_event_hook_execution_id,
        "Reporting lifecycle hook as succeeded"
    );

    api.report_status(&hook, LifecycleEventStatus::Succeeded)
        .await
        .inspect_err(|err| tracing::error!(request_id, error = %err, "Status report failed"))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct FakeCodeDeploy {
        fail: bool,
        reports: Mutex<Vec<(DeploymentHook, LifecycleEventStatus)>>,
    }

    #[async_trait]
    impl LifecycleHookApi for FakeCodeDeploy {
        async fn report_status(
            &self,
            hook: &DeploymentHook,
            status: LifecycleEventStatus,
        ) -> Result<(), HookError> {
            self.reports.lock().unwrap().push((hook.clone(), status));
            if self.fail {
                return Err(HookError::Report("AccessDeniedException".to_string()));
            }
            Ok(())
        }
    }

    fn event() -> Value {
        json!({
            "DeploymentId": "d-ABCDEF123",
            "LifecycleEventHookExecutionId": "exec-42"
        })
    }

    #[tokio::test]
    async fn test_reports_succeeded() {
        let api = FakeCodeDeploy::default();

        handle_deployment_hook(&api, event(), "req-1").await.unwrap();

        let reports = api.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0.deployment_id, "d-ABCDEF123");
        assert_eq!(reports[0].0.lifecycle_event_hook_execution_id, "exec-42");
        assert_eq!(reports[0].1, LifecycleEventStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_malformed_event_is_not_reported() {
        let api = FakeCodeDeploy::default();

        let err = handle_deployment_hook(&api, json!({ "DeploymentId": 7 }), "req-2")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HookError::Validation(ValidationError::Malformed(_))
        ));
        assert!(api.reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_failure_is_returned() {
        let api = FakeCodeDeploy {
            fail: true,
            ..Default::default()
        };

        let err = handle_deployment_hook(&api, event(), "req-3")
            .await
            .unwrap_err();

        assert!(matches!(err, HookError::Report(_)));
    }
}
