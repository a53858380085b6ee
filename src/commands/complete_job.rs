use crate::commands::{CommandConfig, VariablesCommand};
use crate::proto::gateway_protocol as gateway;
use crate::Error;

/// Completes an activated job, optionally with variables for the task scope.
pub struct CompleteJobCommand {
    config: CommandConfig,
}

pub struct CompleteJobCommandStep2 {
    config: CommandConfig,
    request: gateway::CompleteJobRequest,
}

impl CompleteJobCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn job_key(self, job_key: i64) -> CompleteJobCommandStep2 {
        CompleteJobCommandStep2 {
            config: self.config,
            request: gateway::CompleteJobRequest {
                job_key,
                ..Default::default()
            },
        }
    }
}

impl VariablesCommand for CompleteJobCommandStep2 {
    type Output = Self;

    fn with_variables_document(mut self, document: String) -> Self {
        self.request.variables = document;
        self
    }
}

impl CompleteJobCommandStep2 {
    pub async fn send(self) -> Result<gateway::CompleteJobResponse, Error> {
        self.config
            .send(self.request, |gateway, request| gateway.complete_job(request))
            .await
            .map_err(Error::CompleteJobError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::never_retry;
    use crate::gateway_mock::{MockGateway, RecordedCall};
    use std::sync::Arc;
    use std::time::Duration;

    fn command(gateway: &MockGateway) -> CompleteJobCommand {
        CompleteJobCommand::new(CommandConfig::new(
            Arc::new(gateway.clone()),
            Duration::from_secs(5),
            never_retry(),
        ))
    }

    #[tokio::test]
    async fn completes_the_job() {
        let gateway = MockGateway::new();
        gateway.respond_with(gateway::CompleteJobResponse {});

        command(&gateway).job_key(100).send().await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::CompleteJob(gateway::CompleteJobRequest {
                job_key: 100,
                variables: String::new(),
            })]
        );
    }

    #[tokio::test]
    async fn completes_the_job_with_variables() {
        let gateway = MockGateway::new();
        gateway.respond_with(gateway::CompleteJobResponse {});

        command(&gateway)
            .job_key(100)
            .variables_from_object(&serde_json::json!({ "paid": true }))
            .unwrap()
            .send()
            .await
            .unwrap();

        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::CompleteJob(gateway::CompleteJobRequest {
                job_key: 100,
                variables: r#"{"paid":true}"#.to_string(),
            })]
        );
    }
}
