use crate::client::client_builder::ClientBuilder;
use crate::commands::*;
use crate::gateway::Gateway;
use std::sync::Arc;
use std::time::Duration;

/// The primary type for interacting with zeebe.
///
/// Cloning is cheap; clones share the gateway connection. Every `new_*_command` method starts a
/// fresh command that inherits the client's request timeout and retry predicate.
#[derive(Clone)]
pub struct Client {
    config: CommandConfig,
}

impl Client {
    /// Start configuring a connection to a gateway.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Wrap an existing gateway implementation. Failed requests are not retried.
    pub fn from_gateway<G: Gateway + 'static>(gateway: G, request_timeout: Duration) -> Self {
        Self::from_config(CommandConfig::new(
            Arc::new(gateway),
            request_timeout,
            never_retry(),
        ))
    }

    pub fn from_config(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn request_timeout(&self) -> Duration {
        self.config.request_timeout()
    }

    pub fn new_topology_command(&self) -> TopologyCommand {
        TopologyCommand::new(self.config.clone())
    }

    pub fn new_deploy_command(&self) -> DeployCommand {
        DeployCommand::new(self.config.clone())
    }

    pub fn new_create_instance_command(&self) -> CreateInstanceCommand {
        CreateInstanceCommand::with_config(self.config.clone())
    }

    pub fn new_cancel_instance_command(&self) -> CancelInstanceCommand {
        CancelInstanceCommand::new(self.config.clone())
    }

    pub fn new_publish_message_command(&self) -> PublishMessageCommand {
        PublishMessageCommand::new(self.config.clone())
    }

    pub fn new_complete_job_command(&self) -> CompleteJobCommand {
        CompleteJobCommand::new(self.config.clone())
    }

    pub fn new_fail_job_command(&self) -> FailJobCommand {
        FailJobCommand::new(self.config.clone())
    }

    pub fn new_update_job_retries_command(&self) -> UpdateJobRetriesCommand {
        UpdateJobRetriesCommand::new(self.config.clone())
    }

    pub fn new_set_variables_command(&self) -> SetVariablesCommand {
        SetVariablesCommand::new(self.config.clone())
    }

    pub fn new_resolve_incident_command(&self) -> ResolveIncidentCommand {
        ResolveIncidentCommand::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway_mock::{MockGateway, RecordedCall};
    use crate::proto::gateway_protocol as gateway;

    #[tokio::test]
    async fn commands_share_the_client_gateway() {
        let gateway = MockGateway::new();
        gateway
            .respond_with(gateway::CreateWorkflowInstanceResponse {
                workflow_instance_key: 5632,
                ..Default::default()
            })
            .respond_with(gateway::CancelWorkflowInstanceResponse {});
        let client = Client::from_gateway(gateway.clone(), Duration::from_secs(5));

        let created = client
            .new_create_instance_command()
            .bpmn_process_id("order-process")
            .latest_version()
            .send()
            .await
            .unwrap();
        client
            .clone()
            .new_cancel_instance_command()
            .workflow_instance_key(created.workflow_instance_key)
            .send()
            .await
            .unwrap();

        assert_eq!(gateway.calls().len(), 2);
        assert_eq!(
            gateway.calls()[1],
            RecordedCall::CancelWorkflowInstance(gateway::CancelWorkflowInstanceRequest {
                workflow_instance_key: 5632
            })
        );
    }

    #[test]
    fn exposes_the_request_timeout() {
        let client = Client::from_gateway(MockGateway::new(), Duration::from_secs(7));
        assert_eq!(client.request_timeout(), Duration::from_secs(7));
    }
}
