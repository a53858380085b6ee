use crate::commands::CommandConfig;
use crate::proto::gateway_protocol as gateway;
use crate::Error;

/// Cancels a running workflow instance.
pub struct CancelInstanceCommand {
    config: CommandConfig,
}

pub struct CancelInstanceCommandStep2 {
    config: CommandConfig,
    request: gateway::CancelWorkflowInstanceRequest,
}

impl CancelInstanceCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn workflow_instance_key(self, workflow_instance_key: i64) -> CancelInstanceCommandStep2 {
        CancelInstanceCommandStep2 {
            config: self.config,
            request: gateway::CancelWorkflowInstanceRequest {
                workflow_instance_key,
            },
        }
    }
}

impl CancelInstanceCommandStep2 {
    pub async fn send(self) -> Result<gateway::CancelWorkflowInstanceResponse, Error> {
        self.config
            .send(self.request, |gateway, request| {
                gateway.cancel_workflow_instance(request)
            })
            .await
            .map_err(Error::CancelWorkflowInstanceError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::never_retry;
    use crate::gateway_mock::{MockGateway, RecordedCall};
    use std::sync::Arc;
    use std::time::Duration;

    fn command(gateway: &MockGateway) -> CancelInstanceCommand {
        CancelInstanceCommand::new(CommandConfig::new(
            Arc::new(gateway.clone()),
            Duration::from_secs(5),
            never_retry(),
        ))
    }

    #[tokio::test]
    async fn cancels_the_instance() {
        let gateway = MockGateway::new();
        gateway.respond_with(gateway::CancelWorkflowInstanceResponse {});

        let response = command(&gateway)
            .workflow_instance_key(5632)
            .send()
            .await
            .unwrap();

        assert_eq!(response, gateway::CancelWorkflowInstanceResponse {});
        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::CancelWorkflowInstance(
                gateway::CancelWorkflowInstanceRequest {
                    workflow_instance_key: 5632
                }
            )]
        );
    }

    #[tokio::test]
    async fn reports_unknown_instances() {
        let gateway = MockGateway::new();
        gateway.fail_with(tonic::Status::not_found("no workflow instance"));

        let err = command(&gateway)
            .workflow_instance_key(1)
            .send()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::CancelWorkflowInstanceError(_)));
    }
}
