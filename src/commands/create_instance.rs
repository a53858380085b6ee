use crate::commands::{duration_millis, CommandConfig, RetryPredicate, VariablesCommand};
use crate::gateway::Gateway;
use crate::proto::gateway_protocol as gateway;
use crate::Error;
use std::sync::Arc;
use std::time::Duration;

/// The version that selects the latest deployed workflow for a BPMN process id.
pub const LATEST_VERSION: i32 = -1;

/// Added to the request timeout of a command that waits for the workflow result, so the gateway
/// answers with its own timeout before the client gives up.
pub const REQUEST_TIMEOUT_OFFSET: Duration = Duration::from_secs(10);

/// Strongly type the version. `WorkflowVersion::Latest` is translated to `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowVersion {
    Latest,
    Version(i32),
}

impl From<WorkflowVersion> for i32 {
    fn from(version: WorkflowVersion) -> Self {
        match version {
            WorkflowVersion::Latest => LATEST_VERSION,
            WorkflowVersion::Version(v) => v,
        }
    }
}

/// Creates a workflow instance, either from a workflow key or from a BPMN process id and version.
///
/// ```no_run
/// # async fn run(client: zeebe_commands::Client) -> Result<(), zeebe_commands::Error> {
/// use zeebe_commands::VariablesCommand;
///
/// let response = client
///     .new_create_instance_command()
///     .bpmn_process_id("order-process")
///     .latest_version()
///     .variables_from_string(r#"{"orderId":10}"#)?
///     .send()
///     .await?;
/// println!("created instance {}", response.workflow_instance_key);
/// # Ok(())
/// # }
/// ```
pub struct CreateInstanceCommand {
    config: CommandConfig,
    request: gateway::CreateWorkflowInstanceRequest,
}

/// A process id was chosen; the version is still open.
pub struct CreateInstanceCommandStep2 {
    config: CommandConfig,
    request: gateway::CreateWorkflowInstanceRequest,
}

/// The workflow is identified; the command can be sent.
pub struct CreateInstanceCommandStep3 {
    config: CommandConfig,
    request: gateway::CreateWorkflowInstanceRequest,
}

/// Creates a workflow instance and waits until the workflow completes.
pub struct CreateInstanceWithResultCommand {
    config: CommandConfig,
    request: gateway::CreateWorkflowInstanceRequest,
    fetch_variables: Vec<String>,
}

impl CreateInstanceCommand {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        request_timeout: Duration,
        retry_predicate: RetryPredicate,
    ) -> Self {
        Self::with_config(CommandConfig::new(gateway, request_timeout, retry_predicate))
    }

    pub(crate) fn with_config(config: CommandConfig) -> Self {
        Self {
            config,
            request: Default::default(),
        }
    }

    pub fn workflow_key(mut self, workflow_key: i64) -> CreateInstanceCommandStep3 {
        self.request.workflow_key = workflow_key;
        CreateInstanceCommandStep3 {
            config: self.config,
            request: self.request,
        }
    }

    pub fn bpmn_process_id<S: Into<String>>(
        mut self,
        bpmn_process_id: S,
    ) -> CreateInstanceCommandStep2 {
        self.request.bpmn_process_id = bpmn_process_id.into();
        CreateInstanceCommandStep2 {
            config: self.config,
            request: self.request,
        }
    }
}

impl CreateInstanceCommandStep2 {
    pub fn version(mut self, version: i32) -> CreateInstanceCommandStep3 {
        self.request.version = version;
        CreateInstanceCommandStep3 {
            config: self.config,
            request: self.request,
        }
    }

    pub fn latest_version(self) -> CreateInstanceCommandStep3 {
        self.version(LATEST_VERSION)
    }

    pub fn workflow_version(self, version: WorkflowVersion) -> CreateInstanceCommandStep3 {
        self.version(version.into())
    }
}

impl VariablesCommand for CreateInstanceCommandStep3 {
    type Output = Self;

    fn with_variables_document(mut self, document: String) -> Self {
        self.request.variables = document;
        self
    }
}

impl CreateInstanceCommandStep3 {
    /// Override the client's default request timeout for this command.
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.config.set_request_timeout(request_timeout);
        self
    }

    /// Wait for the workflow instance to complete instead of returning once it is created.
    pub fn with_result(self) -> CreateInstanceWithResultCommand {
        CreateInstanceWithResultCommand {
            config: self.config,
            request: self.request,
            fetch_variables: Vec::new(),
        }
    }

    pub async fn send(self) -> Result<gateway::CreateWorkflowInstanceResponse, Error> {
        self.config
            .send(self.request, |gateway, request| {
                gateway.create_workflow_instance(request)
            })
            .await
            .map_err(Error::CreateWorkflowInstanceError)
    }
}

impl CreateInstanceWithResultCommand {
    /// Only return these variables of the completed instance. An empty list returns all of them.
    pub fn fetch_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fetch_variables = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.config.set_request_timeout(request_timeout);
        self
    }

    pub async fn send(self) -> Result<gateway::CreateWorkflowInstanceWithResultResponse, Error> {
        let request_timeout = self.config.request_timeout();
        let request = gateway::CreateWorkflowInstanceWithResultRequest {
            request: Some(self.request),
            request_timeout: duration_millis(request_timeout),
            fetch_variables: self.fetch_variables,
        };
        self.config
            .call(
                request,
                request_timeout.saturating_add(REQUEST_TIMEOUT_OFFSET),
                |gateway, request| gateway.create_workflow_instance_with_result(request),
            )
            .await
            .map_err(Error::CreateWorkflowInstanceWithResultError)
    }
}
