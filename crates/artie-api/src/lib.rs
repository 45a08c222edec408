// artie-api: Async Rust client for the Artie control-plane API

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod transport;
pub mod types;

pub use auth::{API_KEY_PREFIX, ApiKey};
pub use client::ArtieClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::Error;
pub use resources::{
    ConnectorClient, DeploymentClient, DestinationClient, PipelineClient, PrivateLinkClient,
    SourceReaderClient, SshTunnelClient,
};
pub use transport::TransportConfig;
pub use types::ValidationOutcome;
