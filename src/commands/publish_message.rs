use crate::commands::{duration_millis, CommandConfig, VariablesCommand};
use crate::proto::gateway_protocol as gateway;
use crate::Error;
use std::time::Duration;

/// Publishes a message that can be correlated to a workflow instance.
pub struct PublishMessageCommand {
    config: CommandConfig,
}

pub struct PublishMessageCommandStep2 {
    config: CommandConfig,
    name: String,
}

pub struct PublishMessageCommandStep3 {
    config: CommandConfig,
    request: gateway::PublishMessageRequest,
}

impl PublishMessageCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn message_name<S: Into<String>>(self, name: S) -> PublishMessageCommandStep2 {
        PublishMessageCommandStep2 {
            config: self.config,
            name: name.into(),
        }
    }
}

impl PublishMessageCommandStep2 {
    pub fn correlation_key<S: Into<String>>(self, correlation_key: S) -> PublishMessageCommandStep3 {
        PublishMessageCommandStep3 {
            config: self.config,
            request: gateway::PublishMessageRequest {
                name: self.name,
                correlation_key: correlation_key.into(),
                ..Default::default()
            },
        }
    }
}

impl VariablesCommand for PublishMessageCommandStep3 {
    type Output = Self;

    fn with_variables_document(mut self, document: String) -> Self {
        self.request.variables = document;
        self
    }
}

impl PublishMessageCommandStep3 {
    /// Only one message with a given id is published while it is alive.
    pub fn message_id<S: Into<String>>(mut self, message_id: S) -> Self {
        self.request.message_id = message_id.into();
        self
    }

    /// How long the broker buffers the message. Sent with millisecond precision.
    pub fn time_to_live(mut self, time_to_live: Duration) -> Self {
        self.request.time_to_live = duration_millis(time_to_live);
        self
    }

    pub async fn send(self) -> Result<gateway::PublishMessageResponse, Error> {
        self.config
            .send(self.request, |gateway, request| {
                gateway.publish_message(request)
            })
            .await
            .map_err(Error::PublishMessageError)
    }
}
