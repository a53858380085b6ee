use crate::commands::CommandConfig;
use crate::proto::gateway_protocol as gateway;
use crate::Error;

/// Retries given to a job when [`UpdateJobRetriesCommandStep2::retries`] is not called.
pub const DEFAULT_JOB_RETRIES: i32 = 3;

/// Updates the number of retries a job has left, typically for a job that ran out of them.
pub struct UpdateJobRetriesCommand {
    config: CommandConfig,
}

pub struct UpdateJobRetriesCommandStep2 {
    config: CommandConfig,
    request: gateway::UpdateJobRetriesRequest,
}

impl UpdateJobRetriesCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn job_key(self, job_key: i64) -> UpdateJobRetriesCommandStep2 {
        UpdateJobRetriesCommandStep2 {
            config: self.config,
            request: gateway::UpdateJobRetriesRequest {
                job_key,
                retries: DEFAULT_JOB_RETRIES,
            },
        }
    }
}

impl UpdateJobRetriesCommandStep2 {
    pub fn retries(mut self, retries: i32) -> Self {
        self.request.retries = retries;
        self
    }

    pub async fn send(self) -> Result<gateway::UpdateJobRetriesResponse, Error> {
        self.config
            .send(self.request, |gateway, request| {
                gateway.update_job_retries(request)
            })
            .await
            .map_err(Error::UpdateJobRetriesError)
    }
}
