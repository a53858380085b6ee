use crate::commands::CommandConfig;
use crate::proto::gateway_protocol as gateway;
use crate::Error;
use std::path::Path;

pub use crate::proto::gateway_protocol::workflow_request_object::ResourceType;

/// Deploys one or more workflow resources. The deployment is atomic: either every resource is
/// deployed or none is.
pub struct DeployCommand {
    config: CommandConfig,
    request: gateway::DeployWorkflowRequest,
}

impl DeployCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self {
            config,
            request: Default::default(),
        }
    }

    pub fn add_resource<S: Into<String>>(
        mut self,
        definition: Vec<u8>,
        name: S,
        resource_type: ResourceType,
    ) -> Self {
        self.request.workflows.push(gateway::WorkflowRequestObject {
            name: name.into(),
            r#type: resource_type as i32,
            definition,
        });
        self
    }

    /// Read a resource from disk. The gateway infers BPMN or YAML from the file extension.
    pub fn add_resource_file<P: AsRef<Path>>(self, path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let definition = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(self.add_resource(definition, name, ResourceType::File))
    }

    pub async fn send(self) -> Result<gateway::DeployWorkflowResponse, Error> {
        self.config
            .send(self.request, |gateway, request| {
                gateway.deploy_workflow(request)
            })
            .await
            .map_err(Error::DeployWorkflowError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::never_retry;
    use crate::gateway_mock::{MockGateway, RecordedCall};
    use std::sync::Arc;
    use std::time::Duration;

    const BPMN: &[u8] = b"<bpmn:definitions/>";

    fn command(gateway: &MockGateway) -> DeployCommand {
        DeployCommand::new(CommandConfig::new(
            Arc::new(gateway.clone()),
            Duration::from_secs(5),
            never_retry(),
        ))
    }

    #[tokio::test]
    async fn deploys_every_added_resource() {
        let gateway = MockGateway::new();
        let stub = gateway::DeployWorkflowResponse {
            key: 1,
            workflows: vec![gateway::WorkflowMetadata {
                bpmn_process_id: "order-process".to_string(),
                version: 1,
                workflow_key: 2,
                resource_name: "order-process.bpmn".to_string(),
            }],
        };
        gateway.respond_with(stub.clone());

        let response = command(&gateway)
            .add_resource(BPMN.to_vec(), "order-process.bpmn", ResourceType::Bpmn)
            .add_resource(b"name: x".to_vec(), "x.yaml", ResourceType::Yaml)
            .send()
            .await
            .unwrap();

        assert_eq!(response, stub);
        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::DeployWorkflow(gateway::DeployWorkflowRequest {
                workflows: vec![
                    gateway::WorkflowRequestObject {
                        name: "order-process.bpmn".to_string(),
                        r#type: ResourceType::Bpmn as i32,
                        definition: BPMN.to_vec(),
                    },
                    gateway::WorkflowRequestObject {
                        name: "x.yaml".to_string(),
                        r#type: ResourceType::Yaml as i32,
                        definition: b"name: x".to_vec(),
                    },
                ],
            })]
        );
    }

    #[test]
    fn reads_resource_files_by_name() {
        let path = std::env::temp_dir().join(format!("deploy-{}.bpmn", std::process::id()));
        std::fs::write(&path, BPMN).unwrap();
        let gateway = MockGateway::new();

        let command = command(&gateway).add_resource_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let resource = &command.request.workflows[0];
        assert_eq!(resource.definition, BPMN);
        assert_eq!(resource.r#type, ResourceType::File as i32);
        assert_eq!(
            resource.name,
            path.file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn missing_resource_files_are_io_errors() {
        let gateway = MockGateway::new();

        let result = command(&gateway).add_resource_file("/does/not/exist.bpmn");

        assert!(matches!(result, Err(Error::StdIoError(_))));
    }
}
