use crate::commands::CommandConfig;
use crate::proto::gateway_protocol as gateway;
use crate::Error;

/// Marks an incident as resolved. Usually follows an [`UpdateJobRetriesCommand`] or a
/// [`SetVariablesCommand`] that fixed the underlying problem.
///
/// [`UpdateJobRetriesCommand`]: crate::UpdateJobRetriesCommand
/// [`SetVariablesCommand`]: crate::SetVariablesCommand
pub struct ResolveIncidentCommand {
    config: CommandConfig,
}

pub struct ResolveIncidentCommandStep2 {
    config: CommandConfig,
    request: gateway::ResolveIncidentRequest,
}

impl ResolveIncidentCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub fn incident_key(self, incident_key: i64) -> ResolveIncidentCommandStep2 {
        ResolveIncidentCommandStep2 {
            config: self.config,
            request: gateway::ResolveIncidentRequest { incident_key },
        }
    }
}

impl ResolveIncidentCommandStep2 {
    pub async fn send(self) -> Result<gateway::ResolveIncidentResponse, Error> {
        self.config
            .send(self.request, |gateway, request| {
                gateway.resolve_incident(request)
            })
            .await
            .map_err(Error::ResolveIncidentError)
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
    async fn resolves_the_incident() {
        let gateway = MockGateway::new();
        gateway.respond_with(gateway::ResolveIncidentResponse {});
        let config = CommandConfig::new(
            Arc::new(gateway.clone()),
            Duration::from_secs(5),
            never_retry(),
        );

        ResolveIncidentCommand::new(config)
            .incident_key(42)
            .send()
            .await
            .unwrap();

        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::ResolveIncident(
                gateway::ResolveIncidentRequest { incident_key: 42 }
            )]
        );
    }
}
