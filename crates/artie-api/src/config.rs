// ── Client configuration ──
//
// Describes *where* and *as whom* to talk to the control plane. Built once
// by the caller and handed to `ArtieClient::new`; nothing here is global,
// so independently configured clients can coexist in one process.

use secrecy::SecretString;
use url::Url;

use crate::transport::TransportConfig;

/// Production control-plane endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.artie.com";

/// Immutable configuration for one [`ArtieClient`](crate::ArtieClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every resource path is joined onto.
    pub endpoint: Url,
    /// Raw API key. Validated (`arsk_` prefix) when the client is built.
    pub api_key: SecretString,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Config pointing at the production endpoint.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key,
            transport: TransportConfig::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

/// The parsed [`DEFAULT_ENDPOINT`].
pub fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}
