use crate::commands::CommandConfig;
use crate::proto::gateway_protocol as gateway;
use crate::Error;

/// Marks an activated job as failed.
///
/// With positive `retries` the job can be activated again right away. At zero an incident is
/// raised with the error message, and the job stays inactive until the incident is resolved.
pub struct FailJobCommand {
    config: CommandConfig,
}

pub struct FailJobCommandStep2 {
    config: CommandConfig,
    job_key: i64,
}

pub struct FailJobCommandStep3 {
    config: CommandConfig,
    request: gateway::FailJobRequest,
}

impl FailJobCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn job_key(self, job_key: i64) -> FailJobCommandStep2 {
        FailJobCommandStep2 {
            config: self.config,
            job_key,
        }
    }
}

impl FailJobCommandStep2 {
    pub fn retries(self, retries: i32) -> FailJobCommandStep3 {
        FailJobCommandStep3 {
            config: self.config,
            request: gateway::FailJobRequest {
                job_key: self.job_key,
                retries,
                ..Default::default()
            },
        }
    }
}

impl FailJobCommandStep3 {
    pub fn error_message<S: Into<String>>(mut self, error_message: S) -> Self {
        self.request.error_message = error_message.into();
        self
    }

    pub async fn send(self) -> Result<gateway::FailJobResponse, Error> {
        self.config
            .send(self.request, |gateway, request| gateway.fail_job(request))
            .await
            .map_err(Error::FailJobError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::never_retry;
    use crate::gateway_mock::{MockGateway, RecordedCall};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn fails_the_job_with_a_message() {
        let gateway = MockGateway::new();
        gateway.respond_with(gateway::FailJobResponse {});
        let config = CommandConfig::new(
            Arc::new(gateway.clone()),
            Duration::from_secs(5),
            never_retry(),
        );

        FailJobCommand::new(config)
            .job_key(100)
            .retries(2)
            .error_message("payment service unreachable")
            .send()
            .await
            .unwrap();

        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::FailJob(gateway::FailJobRequest {
                job_key: 100,
                retries: 2,
                error_message: "payment service unreachable".to_string(),
            })]
        );
    }
}
