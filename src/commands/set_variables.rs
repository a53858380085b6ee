use crate::commands::{CommandConfig, VariablesCommand};
use crate::proto::gateway_protocol as gateway;
use crate::Error;

/// Updates the variables of a scope: a workflow instance or one of its element instances.
pub struct SetVariablesCommand {
    config: CommandConfig,
}

/// The scope is chosen; a variables document is required before sending.
pub struct SetVariablesCommandStep2 {
    config: CommandConfig,
    element_instance_key: i64,
}

pub struct SetVariablesCommandStep3 {
    config: CommandConfig,
    request: gateway::SetVariablesRequest,
}

impl SetVariablesCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn element_instance_key(self, element_instance_key: i64) -> SetVariablesCommandStep2 {
        SetVariablesCommandStep2 {
            config: self.config,
            element_instance_key,
        }
    }
}

impl VariablesCommand for SetVariablesCommandStep2 {
    type Output = SetVariablesCommandStep3;

    fn with_variables_document(self, variables: String) -> SetVariablesCommandStep3 {
        SetVariablesCommandStep3 {
            config: self.config,
            request: gateway::SetVariablesRequest {
                element_instance_key: self.element_instance_key,
                variables,
                local: false,
            },
        }
    }
}

impl SetVariablesCommandStep3 {
    /// Merge the variables strictly into the given scope instead of propagating them upwards.
    pub fn local(mut self, local: bool) -> Self {
        self.request.local = local;
        self
    }

    pub async fn send(self) -> Result<gateway::SetVariablesResponse, Error> {
        self.config
            .send(self.request, |gateway, request| gateway.set_variables(request))
            .await
            .map_err(Error::SetVariablesError)
    }
}
