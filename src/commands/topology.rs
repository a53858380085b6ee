use crate::commands::CommandConfig;
use crate::proto::gateway_protocol as gateway;
use crate::Error;

/// Get the topology. The response is similar to what is printed when running `zbctl status`.
pub struct TopologyCommand {
    config: CommandConfig,
}

impl TopologyCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    pub async fn send(self) -> Result<gateway::TopologyResponse, Error> {
        self.config
            .send(gateway::TopologyRequest {}, |gateway, request| {
                gateway.topology(request)
            })
            .await
            .map_err(Error::TopologyError)
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
    async fn returns_the_cluster_topology() {
        let gateway = MockGateway::new();
        let stub = gateway::TopologyResponse {
            brokers: vec![gateway::BrokerInfo {
                node_id: 0,
                host: "broker-0".to_string(),
                port: 26501,
                partitions: vec![gateway::Partition {
                    partition_id: 1,
                    role: gateway::partition::PartitionBrokerRole::Leader as i32,
                }],
            }],
            cluster_size: 1,
            partitions_count: 1,
            replication_factor: 1,
        };
        gateway.respond_with(stub.clone());
        let config = CommandConfig::new(
            Arc::new(gateway.clone()),
            Duration::from_secs(5),
            never_retry(),
        );

        let response = TopologyCommand::new(config).send().await.unwrap();

        assert_eq!(response, stub);
        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::Topology(gateway::TopologyRequest {})]
        );
    }
}
