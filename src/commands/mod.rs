//! One builder per gateway RPC.
//!
//! Every command is a chain of steps ending in `send`. The steps only shape the protobuf request;
//! `send` hands it to [`CommandConfig::call`], which applies the request timeout and the retry
//! predicate the command was created with.

mod cancel_instance;
mod complete_job;
mod create_instance;
mod deploy;
mod fail_job;
mod publish_message;
mod resolve_incident;
mod set_variables;
mod topology;
mod update_job_retries;
mod variables;

pub use cancel_instance::*;
pub use complete_job::*;
pub use create_instance::*;
pub use deploy::*;
pub use fail_job::*;
pub use publish_message::*;
pub use resolve_incident::*;
pub use set_variables::*;
pub use topology::*;
pub use update_job_retries::*;
pub use variables::VariablesCommand;

use crate::gateway::{Gateway, GatewayFuture};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Decides whether a failed RPC is sent again.
pub type RetryPredicate = Arc<dyn Fn(&tonic::Status) -> bool + Send + Sync>;

/// A predicate that never retries.
pub fn never_retry() -> RetryPredicate {
    Arc::new(|_| false)
}

/// The largest timeout the `grpc-timeout` header can carry: eight digits of hours.
const MAX_GRPC_TIMEOUT: Duration = Duration::from_secs(99_999_999 * 60 * 60);

/// Milliseconds as the gateway reads them, clamped to `i64::MAX`.
pub(crate) fn duration_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// What every command needs to dispatch its request.
#[derive(Clone)]
pub struct CommandConfig {
    gateway: Arc<dyn Gateway>,
    request_timeout: Duration,
    retry_predicate: RetryPredicate,
}

impl CommandConfig {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        request_timeout: Duration,
        retry_predicate: RetryPredicate,
    ) -> Self {
        Self {
            gateway,
            request_timeout,
            retry_predicate,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub(crate) fn set_request_timeout(&mut self, request_timeout: Duration) {
        self.request_timeout = request_timeout;
    }

    /// Send `message` through `rpc` with the configured request timeout.
    pub(crate) async fn send<T, R, F>(&self, message: T, rpc: F) -> Result<R, tonic::Status>
    where
        T: Clone,
        F: Fn(&dyn Gateway, tonic::Request<T>) -> GatewayFuture<R>,
    {
        self.call(message, self.request_timeout, rpc).await
    }

    /// Send `message` through `rpc`, giving up after `timeout`.
    ///
    /// The timeout travels as the `grpc-timeout` header, capped to what the header can express,
    /// and also bounds the wait on this side.
    /// Failed calls are sent again for as long as the retry predicate accepts the status.
    pub(crate) async fn call<T, R, F>(
        &self,
        message: T,
        timeout: Duration,
        rpc: F,
    ) -> Result<R, tonic::Status>
    where
        T: Clone,
        F: Fn(&dyn Gateway, tonic::Request<T>) -> GatewayFuture<R>,
    {
        let mut attempt: u32 = 1;
        loop {
            let mut request = tonic::Request::new(message.clone());
            request.set_timeout(timeout.min(MAX_GRPC_TIMEOUT));
            debug!(attempt, ?timeout, "sending gateway request");
            let outcome = match tokio::time::timeout(timeout, rpc(self.gateway.as_ref(), request))
                .await
            {
                Ok(result) => result.map(tonic::Response::into_inner),
                Err(_) => Err(tonic::Status::deadline_exceeded(format!(
                    "no response from gateway within {timeout:?}"
                ))),
            };
            match outcome {
                Err(status) if (self.retry_predicate)(&status) => {
                    debug!(attempt, code = ?status.code(), "retrying gateway request");
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_durations_to_milliseconds() {
        assert_eq!(duration_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(duration_millis(Duration::from_micros(999)), 0);
    }

    #[test]
    fn clamps_milliseconds_that_overflow() {
        assert_eq!(duration_millis(Duration::MAX), i64::MAX);
        assert_eq!(
            duration_millis(Duration::from_millis(u64::MAX)),
            i64::MAX
        );
    }
}
