use crate::gateway::{Gateway, GatewayFuture};
use crate::proto::gateway_protocol as gateway;
use futures::FutureExt;
use std::any::Any;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tonic::{Request, Response, Status};

/// A request as it reached the mock gateway.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCall {
    Topology(gateway::TopologyRequest),
    DeployWorkflow(gateway::DeployWorkflowRequest),
    CreateWorkflowInstance(gateway::CreateWorkflowInstanceRequest),
    CreateWorkflowInstanceWithResult(gateway::CreateWorkflowInstanceWithResultRequest),
    CancelWorkflowInstance(gateway::CancelWorkflowInstanceRequest),
    PublishMessage(gateway::PublishMessageRequest),
    CompleteJob(gateway::CompleteJobRequest),
    FailJob(gateway::FailJobRequest),
    UpdateJobRetries(gateway::UpdateJobRetriesRequest),
    SetVariables(gateway::SetVariablesRequest),
    ResolveIncident(gateway::ResolveIncidentRequest),
}

enum Reply {
    Respond(Box<dyn Any + Send>),
    Fail(Status),
    Hang,
}

#[derive(Default)]
struct MockState {
    calls: Vec<(RecordedCall, Option<String>)>,
    replies: VecDeque<Reply>,
}

/// A gateway that records every request and answers from a queue of stubbed replies.
///
/// An empty queue, or a stub of the wrong message type, answers `UNIMPLEMENTED`.
#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with<T: Send + 'static>(&self, response: T) -> &Self {
        self.push(Reply::Respond(Box::new(response)))
    }

    pub fn fail_with(&self, status: Status) -> &Self {
        self.push(Reply::Fail(status))
    }

    /// The next call never completes.
    pub fn hang(&self) -> &Self {
        self.push(Reply::Hang)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        let state = self.state.lock().unwrap();
        state.calls.iter().map(|(call, _)| call.clone()).collect()
    }

    /// The `grpc-timeout` header of every recorded request.
    pub fn timeouts(&self) -> Vec<Option<String>> {
        let state = self.state.lock().unwrap();
        state.calls.iter().map(|(_, timeout)| timeout.clone()).collect()
    }

    fn push(&self, reply: Reply) -> &Self {
        self.state.lock().unwrap().replies.push_back(reply);
        self
    }

    fn record<T, R, F>(&self, request: Request<T>, wrap: F) -> GatewayFuture<R>
    where
        R: Send + 'static,
        F: FnOnce(T) -> RecordedCall,
    {
        let timeout = request
            .metadata()
            .get("grpc-timeout")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let mut state = self.state.lock().unwrap();
        state.calls.push((wrap(request.into_inner()), timeout));
        match state.replies.pop_front() {
            Some(Reply::Respond(response)) => match response.downcast::<R>() {
                Ok(response) => futures::future::ok(Response::new(*response)).boxed(),
                Err(_) => futures::future::err(Status::unimplemented("stub has the wrong type"))
                    .boxed(),
            },
            Some(Reply::Fail(status)) => futures::future::err(status).boxed(),
            Some(Reply::Hang) => futures::future::pending().boxed(),
            None => futures::future::err(Status::unimplemented("no stubbed reply")).boxed(),
        }
    }
}

impl Gateway for MockGateway {
    fn topology(
        &self,
        request: Request<gateway::TopologyRequest>,
    ) -> GatewayFuture<gateway::TopologyResponse> {
        self.record(request, RecordedCall::Topology)
    }

    fn deploy_workflow(
        &self,
        request: Request<gateway::DeployWorkflowRequest>,
    ) -> GatewayFuture<gateway::DeployWorkflowResponse> {
        self.record(request, RecordedCall::DeployWorkflow)
    }

    fn create_workflow_instance(
        &self,
        request: Request<gateway::CreateWorkflowInstanceRequest>,
    ) -> GatewayFuture<gateway::CreateWorkflowInstanceResponse> {
        self.record(request, RecordedCall::CreateWorkflowInstance)
    }

    fn create_workflow_instance_with_result(
        &self,
        request: Request<gateway::CreateWorkflowInstanceWithResultRequest>,
    ) -> GatewayFuture<gateway::CreateWorkflowInstanceWithResultResponse> {
        self.record(request, RecordedCall::CreateWorkflowInstanceWithResult)
    }

    fn cancel_workflow_instance(
        &self,
        request: Request<gateway::CancelWorkflowInstanceRequest>,
    ) -> GatewayFuture<gateway::CancelWorkflowInstanceResponse> {
        self.record(request, RecordedCall::CancelWorkflowInstance)
    }

    fn publish_message(
        &self,
        request: Request<gateway::PublishMessageRequest>,
    ) -> GatewayFuture<gateway::PublishMessageResponse> {
        self.record(request, RecordedCall::PublishMessage)
    }

    fn complete_job(
        &self,
        request: Request<gateway::CompleteJobRequest>,
    ) -> GatewayFuture<gateway::CompleteJobResponse> {
        self.record(request, RecordedCall::CompleteJob)
    }

    fn fail_job(
        &self,
        request: Request<gateway::FailJobRequest>,
    ) -> GatewayFuture<gateway::FailJobResponse> {
        self.record(request, RecordedCall::FailJob)
    }

    fn update_job_retries(
        &self,
        request: Request<gateway::UpdateJobRetriesRequest>,
    ) -> GatewayFuture<gateway::UpdateJobRetriesResponse> {
        self.record(request, RecordedCall::UpdateJobRetries)
    }

    fn set_variables(
        &self,
        request: Request<gateway::SetVariablesRequest>,
    ) -> GatewayFuture<gateway::SetVariablesResponse> {
        self.record(request, RecordedCall::SetVariables)
    }

    fn resolve_incident(
        &self,
        request: Request<gateway::ResolveIncidentRequest>,
    ) -> GatewayFuture<gateway::ResolveIncidentResponse> {
        self.record(request, RecordedCall::ResolveIncident)
    }
}
