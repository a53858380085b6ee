#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Gateway Error. {0:?}")]
    GatewayError(#[from] tonic::transport::Error),
    #[error("Invalid gateway address {0:?}")]
    InvalidGatewayAddress(String),
    #[error("Topology Error. {0:?}")]
    TopologyError(tonic::Status),
    #[error("Deploy Workflow Error. {0:?}")]
    DeployWorkflowError(tonic::Status),
    #[error("Create Workflow Instance Error. {0:?}")]
    CreateWorkflowInstanceError(tonic::Status),
    #[error("Create Workflow Instance With Result Error. {0:?}")]
    CreateWorkflowInstanceWithResultError(tonic::Status),
    #[error("Cancel Workflow Instance Error. {0:?}")]
    CancelWorkflowInstanceError(tonic::Status),
    #[error("Publish Message Error. {0:?}")]
    PublishMessageError(tonic::Status),
    #[error("Complete Job Error. {0:?}")]
    CompleteJobError(tonic::Status),
    #[error("Fail Job Error. {0:?}")]
    FailJobError(tonic::Status),
    #[error("Update Job Retries Error. {0:?}")]
    UpdateJobRetriesError(tonic::Status),
    #[error("Set Variables Error. {0:?}")]
    SetVariablesError(tonic::Status),
    #[error("Resolve Incident Error. {0:?}")]
    ResolveIncidentError(tonic::Status),
    #[error("Json Payload Serialization Error. {0:?}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid variables document {document:?}: {reason}")]
    InvalidVariables { document: String, reason: String },
    #[error("Std IO Error. {0:?}")]
    StdIoError(#[from] std::io::Error),
}

impl Error {
    /// The gRPC status of a failed RPC, if this error came from one.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Error::TopologyError(status)
            | Error::DeployWorkflowError(status)
            | Error::CreateWorkflowInstanceError(status)
            | Error::CreateWorkflowInstanceWithResultError(status)
            | Error::CancelWorkflowInstanceError(status)
            | Error::PublishMessageError(status)
            | Error::CompleteJobError(status)
            | Error::FailJobError(status)
            | Error::UpdateJobRetriesError(status)
            | Error::SetVariablesError(status)
            | Error::ResolveIncidentError(status) => Some(status),
            _ => None,
        }
    }
}
