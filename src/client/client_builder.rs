use crate::client::client::Client;
use crate::commands::{never_retry, CommandConfig, RetryPredicate};
use crate::proto::gateway_protocol::gateway_client::GatewayClient;
use crate::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::{Certificate, ClientTlsConfig, Endpoint};
use tracing::info;

pub const DEFAULT_GATEWAY_ADDRESS: &str = "0.0.0.0:26500";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const GATEWAY_ADDRESS_ENV: &str = "ZEEBE_ADDRESS";
pub const INSECURE_CONNECTION_ENV: &str = "ZEEBE_INSECURE_CONNECTION";
pub const CA_CERTIFICATE_PATH_ENV: &str = "ZEEBE_CA_CERTIFICATE_PATH";

/// Configures and opens the connection to a zeebe gateway.
///
/// Connections use TLS unless [`use_plaintext`](Self::use_plaintext) is set. Without a CA
/// certificate the platform's native roots are trusted.
#[derive(Clone)]
pub struct ClientBuilder {
    gateway_address: String,
    use_plaintext: bool,
    ca_certificate_path: Option<PathBuf>,
    request_timeout: Duration,
    retry_predicate: RetryPredicate,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            gateway_address: DEFAULT_GATEWAY_ADDRESS.to_string(),
            use_plaintext: false,
            ca_certificate_path: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_predicate: never_retry(),
        }
    }
}

impl ClientBuilder {
    /// The gateway as `host:port`.
    pub fn gateway_address<S: Into<String>>(&mut self, gateway_address: S) -> &mut Self {
        self.gateway_address = gateway_address.into();
        self
    }

    pub fn use_plaintext(&mut self, use_plaintext: bool) -> &mut Self {
        self.use_plaintext = use_plaintext;
        self
    }

    /// A PEM encoded certificate to trust instead of the native roots.
    pub fn ca_certificate_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.ca_certificate_path = Some(path.into());
        self
    }

    /// The timeout every command starts with.
    pub fn request_timeout(&mut self, request_timeout: Duration) -> &mut Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn retry_predicate<F>(&mut self, retry_predicate: F) -> &mut Self
    where
        F: Fn(&tonic::Status) -> bool + Send + Sync + 'static,
    {
        self.retry_predicate = Arc::new(retry_predicate);
        self
    }

    /// Override the configuration with `ZEEBE_ADDRESS`, `ZEEBE_INSECURE_CONNECTION` and
    /// `ZEEBE_CA_CERTIFICATE_PATH`, where set.
    pub fn from_env(&mut self) -> &mut Self {
        self.apply_env(|name| std::env::var(name).ok())
    }

    fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) -> &mut Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());
        if let Some(address) = non_empty(GATEWAY_ADDRESS_ENV) {
            self.gateway_address = address;
        }
        if let Some(insecure) = non_empty(INSECURE_CONNECTION_ENV) {
            self.use_plaintext = insecure.eq_ignore_ascii_case("true");
        }
        if let Some(path) = non_empty(CA_CERTIFICATE_PATH_ENV) {
            self.ca_certificate_path = Some(PathBuf::from(path));
        }
        self
    }

    fn endpoint_uri(&self) -> Result<String, Error> {
        if self.gateway_address.contains("://") {
            return Err(Error::InvalidGatewayAddress(self.gateway_address.clone()));
        }
        let scheme = if self.use_plaintext { "http" } else { "https" };
        Ok(format!("{}://{}", scheme, self.gateway_address))
    }

    /// The TLS server name: the address without its port, and without brackets for IPv6.
    fn host(&self) -> &str {
        let address = self.gateway_address.as_str();
        if let Some(bracketed) = address.strip_prefix('[') {
            return bracketed
                .split_once(']')
                .map(|(host, _port)| host)
                .unwrap_or(bracketed);
        }
        address
            .rsplit_once(':')
            .map(|(host, _port)| host)
            .unwrap_or(address)
    }

    pub async fn connect(&self) -> Result<Client, Error> {
        let mut endpoint = Endpoint::from_shared(self.endpoint_uri()?)
            .map_err(|_| Error::InvalidGatewayAddress(self.gateway_address.clone()))?;

        if !self.use_plaintext {
            let tls_config = ClientTlsConfig::new().domain_name(self.host());
            let tls_config = match &self.ca_certificate_path {
                Some(path) => {
                    let pem = tokio::fs::read(path).await?;
                    tls_config.ca_certificate(Certificate::from_pem(pem))
                }
                None => tls_config.with_native_roots(),
            };
            endpoint = endpoint.tls_config(tls_config)?;
        }

        let channel = endpoint.connect().await?;
        info!(
            gateway_address = %self.gateway_address,
            plaintext = self.use_plaintext,
            "connected to zeebe gateway"
        );
        Ok(Client::from_config(CommandConfig::new(
            Arc::new(GatewayClient::new(channel)),
            self.request_timeout,
            self.retry_predicate.clone(),
        )))
    }
}
