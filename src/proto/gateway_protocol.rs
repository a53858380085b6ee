// For a more complete documentation, refer to Zeebe documentation at:
// https://docs.zeebe.io/grpc/reference.html

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelWorkflowInstanceRequest {
    /// the workflow instance key (as, for example, obtained from
    /// CreateWorkflowInstanceResponse)
    #[prost(int64, tag = "1")]
    pub workflow_instance_key: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelWorkflowInstanceResponse {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompleteJobRequest {
    /// the unique job identifier, as obtained from ActivateJobsResponse
    #[prost(int64, tag = "1")]
    pub job_key: i64,
    /// a JSON document representing the variables in the current task scope
    #[prost(string, tag = "2")]
    pub variables: String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompleteJobResponse {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateWorkflowInstanceRequest {
    /// the unique key identifying the workflow definition (e.g. returned from a workflow
    /// in the DeployWorkflowResponse message)
    #[prost(int64, tag = "1")]
    pub workflow_key: i64,
    /// the BPMN process ID of the workflow definition
    #[prost(string, tag = "2")]
    pub bpmn_process_id: String,
    /// the version of the process; set to -1 to use the latest version
    #[prost(int32, tag = "3")]
    pub version: i32,
    /// JSON document that will instantiate the variables for the root variable scope of the
    /// workflow instance; it must be a JSON object, as variables will be mapped in a
    /// key-value fashion. e.g. { "a": 1, "b": 2 } will create two variables, named "a" and
    /// "b" respectively, with their associated values. [{ "a": 1, "b": 2 }] would not be a
    /// valid argument, as the root of the JSON document is an array and not an object.
    #[prost(string, tag = "4")]
    pub variables: String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateWorkflowInstanceResponse {
    /// the key of the workflow definition which was used to create the workflow instance
    #[prost(int64, tag = "1")]
    pub workflow_key: i64,
    /// the BPMN process ID of the workflow definition which was used to create the workflow
    /// instance
    #[prost(string, tag = "2")]
    pub bpmn_process_id: String,
    /// the version of the workflow definition which was used to create the workflow instance
    #[prost(int32, tag = "3")]
    pub version: i32,
    /// the unique identifier of the created workflow instance; to be used wherever a request
    /// needs a workflow instance key (e.g. CancelWorkflowInstanceRequest)
    #[prost(int64, tag = "4")]
    pub workflow_instance_key: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateWorkflowInstanceWithResultRequest {
    #[prost(message, optional, tag = "1")]
    pub request: Option<CreateWorkflowInstanceRequest>,
    /// timeout (in ms). the request will be closed if the workflow is not completed before
    /// the requestTimeout.
    /// if requestTimeout = 0, uses the generic requestTimeout configured in the gateway.
    #[prost(int64, tag = "2")]
    pub request_timeout: i64,
    /// list of names of variables to be included in `CreateWorkflowInstanceWithResultResponse.variables`
    /// if empty, all visible variables in the root scope will be returned.
    #[prost(string, repeated, tag = "3")]
    pub fetch_variables: Vec<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateWorkflowInstanceWithResultResponse {
    /// the key of the workflow definition which was used to create the workflow instance
    #[prost(int64, tag = "1")]
    pub workflow_key: i64,
    /// the BPMN process ID of the workflow definition which was used to create the workflow
    /// instance
    #[prost(string, tag = "2")]
    pub bpmn_process_id: String,
    /// the version of the workflow definition which was used to create the workflow instance
    #[prost(int32, tag = "3")]
    pub version: i32,
    /// the unique identifier of the created workflow instance; to be used wherever a request
    /// needs a workflow instance key (e.g. CancelWorkflowInstanceRequest)
    #[prost(int64, tag = "4")]
    pub workflow_instance_key: i64,
    /// JSON document consists of visible variables in the root scope
    #[prost(string, tag = "5")]
    pub variables: String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeployWorkflowRequest {
    /// List of workflow resources to deploy
    #[prost(message, repeated, tag = "1")]
    pub workflows: Vec<WorkflowRequestObject>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowRequestObject {
    /// the resource basename, e.g. myProcess.bpmn
    #[prost(string, tag = "1")]
    pub name: String,
    /// the resource type; if set to BPMN or YAML then the file extension
    /// is ignored
    #[prost(enumeration = "workflow_request_object::ResourceType", tag = "2")]
    pub r#type: i32,
    /// the process definition as a UTF8-encoded string
    #[prost(bytes, tag = "3")]
    pub definition: Vec<u8>,
}
pub mod workflow_request_object {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ResourceType {
        /// FILE type means the gateway will try to detect the resource type
        /// using the file extension of the name field
        File = 0,
        /// extension 'bpmn'
        Bpmn = 1,
        /// extension 'yaml'
        Yaml = 2,
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeployWorkflowResponse {
    /// the unique key identifying the deployment
    #[prost(int64, tag = "1")]
    pub key: i64,
    /// a list of deployed workflows
    #[prost(message, repeated, tag = "2")]
    pub workflows: Vec<WorkflowMetadata>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowMetadata {
    /// the bpmn process ID, as parsed during deployment; together with the version forms a
    /// unique identifier for a specific workflow definition
    #[prost(string, tag = "1")]
    pub bpmn_process_id: String,
    /// the assigned process version
    #[prost(int32, tag = "2")]
    pub version: i32,
    /// the assigned key, which acts as a unique identifier for this workflow
    #[prost(int64, tag = "3")]
    pub workflow_key: i64,
    /// the resource name (see: WorkflowRequestObject.name) from which this workflow was
    /// parsed
    #[prost(string, tag = "4")]
    pub resource_name: String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FailJobRequest {
    /// the unique job identifier, as obtained when activating the job
    #[prost(int64, tag = "1")]
    pub job_key: i64,
    /// the amount of retries the job should have left
    #[prost(int32, tag = "2")]
    pub retries: i32,
    /// an optional message describing why the job failed
    /// this is particularly useful if a job runs out of retries and an incident is raised,
    /// as it this message can help explain why an incident was raised
    #[prost(string, tag = "3")]
    pub error_message: String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FailJobResponse {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PublishMessageRequest {
    /// the name of the message
    #[prost(string, tag = "1")]
    pub name: String,
    /// the correlation key of the message
    #[prost(string, tag = "2")]
    pub correlation_key: String,
    /// how long the message should be buffered on the broker, in milliseconds
    #[prost(int64, tag = "3")]
    pub time_to_live: i64,
    /// the unique ID of the message; can be omitted. only useful to ensure only one message
    /// with the given ID will ever be published (during its lifetime)
    #[prost(string, tag = "4")]
    pub message_id: String,
    /// the message variables as a JSON document; to be valid, the root of the document must be an
    /// object, e.g. { "a": "foo" }. [ "foo" ] would not be valid.
    #[prost(string, tag = "5")]
    pub variables: String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PublishMessageResponse {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResolveIncidentRequest {
    /// the unique ID of the incident to resolve
    #[prost(int64, tag = "1")]
    pub incident_key: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResolveIncidentResponse {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TopologyRequest {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TopologyResponse {
    /// list of brokers part of this cluster
    #[prost(message, repeated, tag = "1")]
    pub brokers: Vec<BrokerInfo>,
    /// how many nodes are in the cluster
    #[prost(int32, tag = "2")]
    pub cluster_size: i32,
    /// how many partitions are spread across the cluster
    #[prost(int32, tag = "3")]
    pub partitions_count: i32,
    /// configured replication factor for this cluster
    #[prost(int32, tag = "4")]
    pub replication_factor: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrokerInfo {
    /// unique (within a cluster) node ID for the broker
    #[prost(int32, tag = "1")]
    pub node_id: i32,
    /// hostname of the broker
    #[prost(string, tag = "2")]
    pub host: String,
    /// port for the broker
    #[prost(int32, tag = "3")]
    pub port: i32,
    /// list of partitions managed or replicated on this broker
    #[prost(message, repeated, tag = "4")]
    pub partitions: Vec<Partition>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Partition {
    /// the unique ID of this partition
    #[prost(int32, tag = "1")]
    pub partition_id: i32,
    /// the role of the broker for this partition
    #[prost(enumeration = "partition::PartitionBrokerRole", tag = "2")]
    pub role: i32,
}
pub mod partition {
    /// Describes the Raft role of the broker for a given partition
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum PartitionBrokerRole {
        Leader = 0,
        Follower = 1,
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateJobRetriesRequest {
    /// the unique job identifier, as obtained through ActivateJobs
    #[prost(int64, tag = "1")]
    pub job_key: i64,
    /// the new amount of retries for the job; must be positive
    #[prost(int32, tag = "2")]
    pub retries: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateJobRetriesResponse {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetVariablesRequest {
    /// the unique identifier of a particular element; can be the workflow instance key (as
    /// obtained during instance creation), or a given element, such as a service task (see
    /// elementInstanceKey on the job message)
    #[prost(int64, tag = "1")]
    pub element_instance_key: i64,
    /// a JSON serialized document describing variables as key value pairs; the root of the document
    /// must be an object
    #[prost(string, tag = "2")]
    pub variables: String,
    /// if true, the variables will be merged strictly into the local scope (as indicated by
    /// elementInstanceKey); this means the variables is not propagated to upper scopes.
    /// for example, let's say we have two scopes, '1' and '2', with each having effective variables as:
    /// 1 => `{ "foo" : 2 }`, and 2 => `{ "bar" : 1 }`. if we send an update request with
    /// elementInstanceKey = 2, variables `{ "foo" : 5 }`, and local is true, then scope 1 will
    /// be unchanged, and scope 2 will now be `{ "bar" : 1, "foo" 5 }`. if local was false, however,
    /// then scope 1 would be `{ "foo": 5 }`, and scope 2 would be `{ "bar" : 1 }`.
    #[prost(bool, tag = "3")]
    pub local: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetVariablesResponse {}
/// Generated client implementations.
pub mod gateway_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;
    #[derive(Debug, Clone)]
    pub struct GatewayClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GatewayClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GatewayClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Check if the service is ready.
        async fn ready(&mut self) -> std::result::Result<(), tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })
        }
        #[doc = "Cancels a running workflow instance"]
        pub async fn cancel_workflow_instance(
            &mut self,
            request: impl tonic::IntoRequest<super::CancelWorkflowInstanceRequest>,
        ) -> std::result::Result<tonic::Response<super::CancelWorkflowInstanceResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/CancelWorkflowInstance");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "CancelWorkflowInstance"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Completes a job with the given variables, which allows completing the associated service task."]
        pub async fn complete_job(
            &mut self,
            request: impl tonic::IntoRequest<super::CompleteJobRequest>,
        ) -> std::result::Result<tonic::Response<super::CompleteJobResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/CompleteJob");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "CompleteJob"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Creates and starts an instance of the specified workflow. The workflow definition to use to"]
        #[doc = "create the instance can be specified either using its unique key (as returned by"]
        #[doc = "DeployWorkflow), or using the BPMN process ID and a version. Pass -1 as the version to use the"]
        #[doc = "latest deployed version."]
        pub async fn create_workflow_instance(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateWorkflowInstanceRequest>,
        ) -> std::result::Result<tonic::Response<super::CreateWorkflowInstanceResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/CreateWorkflowInstance");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "CreateWorkflowInstance"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Behaves similarly to `CreateWorkflowInstance`, except that a successful response is received when"]
        #[doc = "the workflow completes successfully."]
        pub async fn create_workflow_instance_with_result(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateWorkflowInstanceWithResultRequest>,
        ) -> std::result::Result<tonic::Response<super::CreateWorkflowInstanceWithResultResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/CreateWorkflowInstanceWithResult");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "CreateWorkflowInstanceWithResult"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Deploys one or more workflows to Zeebe. Note that this is an atomic call,"]
        #[doc = "i.e. either all workflows are deployed, or none of them are."]
        pub async fn deploy_workflow(
            &mut self,
            request: impl tonic::IntoRequest<super::DeployWorkflowRequest>,
        ) -> std::result::Result<tonic::Response<super::DeployWorkflowResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/DeployWorkflow");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "DeployWorkflow"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Marks the job as failed; if the retries argument is positive, then the job will be immediately"]
        #[doc = "activatable again, and a worker could try again to process it."]
        pub async fn fail_job(
            &mut self,
            request: impl tonic::IntoRequest<super::FailJobRequest>,
        ) -> std::result::Result<tonic::Response<super::FailJobResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/FailJob");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "FailJob"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Publishes a single message. Messages are published to specific partitions computed from their"]
        #[doc = "correlation keys."]
        pub async fn publish_message(
            &mut self,
            request: impl tonic::IntoRequest<super::PublishMessageRequest>,
        ) -> std::result::Result<tonic::Response<super::PublishMessageResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/PublishMessage");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "PublishMessage"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Resolves a given incident. This simply marks the incident as resolved."]
        pub async fn resolve_incident(
            &mut self,
            request: impl tonic::IntoRequest<super::ResolveIncidentRequest>,
        ) -> std::result::Result<tonic::Response<super::ResolveIncidentResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/ResolveIncident");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "ResolveIncident"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Updates all the variables of a particular scope (e.g. workflow instance, flow element instance)"]
        #[doc = "from the given JSON document."]
        pub async fn set_variables(
            &mut self,
            request: impl tonic::IntoRequest<super::SetVariablesRequest>,
        ) -> std::result::Result<tonic::Response<super::SetVariablesResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/SetVariables");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "SetVariables"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Obtains the current topology of the cluster the gateway is part of."]
        pub async fn topology(
            &mut self,
            request: impl tonic::IntoRequest<super::TopologyRequest>,
        ) -> std::result::Result<tonic::Response<super::TopologyResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/Topology");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "Topology"));
            self.inner.unary(req, path, codec).await
        }
        #[doc = "Updates the number of retries a job has left."]
        pub async fn update_job_retries(
            &mut self,
            request: impl tonic::IntoRequest<super::UpdateJobRetriesRequest>,
        ) -> std::result::Result<tonic::Response<super::UpdateJobRetriesResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway_protocol.Gateway/UpdateJobRetries");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway_protocol.Gateway", "UpdateJobRetries"));
            self.inner.unary(req, path, codec).await
        }
    }
}
