//! The gateway seam every command dispatches through.
//!
//! [`Gateway`] mirrors the unary RPCs of `gateway_protocol.Gateway`. The generated tonic client
//! implements it, and so does anything else a caller wants to put behind a [`Client`], which is
//! how the commands are tested without a running broker.
//!
//! [`Client`]: crate::Client

use crate::proto::gateway_protocol as gateway;
use crate::proto::gateway_protocol::gateway_client::GatewayClient;
use futures::future::BoxFuture;
use futures::FutureExt;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};

/// The future returned by every [`Gateway`] method.
pub type GatewayFuture<T> = BoxFuture<'static, Result<Response<T>, Status>>;

pub trait Gateway: Send + Sync {
    fn topology(&self, request: Request<gateway::TopologyRequest>)
        -> GatewayFuture<gateway::TopologyResponse>;

    fn deploy_workflow(
        &self,
        request: Request<gateway::DeployWorkflowRequest>,
    ) -> GatewayFuture<gateway::DeployWorkflowResponse>;

    fn create_workflow_instance(
        &self,
        request: Request<gateway::CreateWorkflowInstanceRequest>,
    ) -> GatewayFuture<gateway::CreateWorkflowInstanceResponse>;

    fn create_workflow_instance_with_result(
        &self,
        request: Request<gateway::CreateWorkflowInstanceWithResultRequest>,
    ) -> GatewayFuture<gateway::CreateWorkflowInstanceWithResultResponse>;

    fn cancel_workflow_instance(
        &self,
        request: Request<gateway::CancelWorkflowInstanceRequest>,
    ) -> GatewayFuture<gateway::CancelWorkflowInstanceResponse>;

    fn publish_message(
        &self,
        request: Request<gateway::PublishMessageRequest>,
    ) -> GatewayFuture<gateway::PublishMessageResponse>;

    fn complete_job(
        &self,
        request: Request<gateway::CompleteJobRequest>,
    ) -> GatewayFuture<gateway::CompleteJobResponse>;

    fn fail_job(&self, request: Request<gateway::FailJobRequest>)
        -> GatewayFuture<gateway::FailJobResponse>;

    fn update_job_retries(
        &self,
        request: Request<gateway::UpdateJobRetriesRequest>,
    ) -> GatewayFuture<gateway::UpdateJobRetriesResponse>;

    fn set_variables(
        &self,
        request: Request<gateway::SetVariablesRequest>,
    ) -> GatewayFuture<gateway::SetVariablesResponse>;

    fn resolve_incident(
        &self,
        request: Request<gateway::ResolveIncidentRequest>,
    ) -> GatewayFuture<gateway::ResolveIncidentResponse>;
}

// The generated methods take `&mut self`, so each call works on its own clone of the client.
// Clones share the underlying channel.
impl Gateway for GatewayClient<Channel> {
    fn topology(
        &self,
        request: Request<gateway::TopologyRequest>,
    ) -> GatewayFuture<gateway::TopologyResponse> {
        let mut client = self.clone();
        async move { GatewayClient::topology(&mut client, request).await }.boxed()
    }

    fn deploy_workflow(
        &self,
        request: Request<gateway::DeployWorkflowRequest>,
    ) -> GatewayFuture<gateway::DeployWorkflowResponse> {
        let mut client = self.clone();
        async move { GatewayClient::deploy_workflow(&mut client, request).await }.boxed()
    }

    fn create_workflow_instance(
        &self,
        request: Request<gateway::CreateWorkflowInstanceRequest>,
    ) -> GatewayFuture<gateway::CreateWorkflowInstanceResponse> {
        let mut client = self.clone();
        async move { GatewayClient::create_workflow_instance(&mut client, request).await }.boxed()
    }

    fn create_workflow_instance_with_result(
        &self,
        request: Request<gateway::CreateWorkflowInstanceWithResultRequest>,
    ) -> GatewayFuture<gateway::CreateWorkflowInstanceWithResultResponse> {
        let mut client = self.clone();
        async move {
            GatewayClient::create_workflow_instance_with_result(&mut client, request).await
        }
        .boxed()
    }

    fn cancel_workflow_instance(
        &self,
        request: Request<gateway::CancelWorkflowInstanceRequest>,
    ) -> GatewayFuture<gateway::CancelWorkflowInstanceResponse> {
        let mut client = self.clone();
        async move { GatewayClient::cancel_workflow_instance(&mut client, request).await }.boxed()
    }

    fn publish_message(
        &self,
        request: Request<gateway::PublishMessageRequest>,
    ) -> GatewayFuture<gateway::PublishMessageResponse> {
        let mut client = self.clone();
        async move { GatewayClient::publish_message(&mut client, request).await }.boxed()
    }

    fn complete_job(
        &self,
        request: Request<gateway::CompleteJobRequest>,
    ) -> GatewayFuture<gateway::CompleteJobResponse> {
        let mut client = self.clone();
        async move { GatewayClient::complete_job(&mut client, request).await }.boxed()
    }

    fn fail_job(
        &self,
        request: Request<gateway::FailJobRequest>,
    ) -> GatewayFuture<gateway::FailJobResponse> {
        let mut client = self.clone();
        async move { GatewayClient::fail_job(&mut client, request).await }.boxed()
    }

    fn update_job_retries(
        &self,
        request: Request<gateway::UpdateJobRetriesRequest>,
    ) -> GatewayFuture<gateway::UpdateJobRetriesResponse> {
        let mut client = self.clone();
        async move { GatewayClient::update_job_retries(&mut client, request).await }.boxed()
    }

    fn set_variables(
        &self,
        request: Request<gateway::SetVariablesRequest>,
    ) -> GatewayFuture<gateway::SetVariablesResponse> {
        let mut client = self.clone();
        async move { GatewayClient::set_variables(&mut client, request).await }.boxed()
    }

    fn resolve_incident(
        &self,
        request: Request<gateway::ResolveIncidentRequest>,
    ) -> GatewayFuture<gateway::ResolveIncidentResponse> {
        let mut client = self.clone();
        async move { GatewayClient::resolve_incident(&mut client, request).await }.boxed()
    }
}
