// Resource sub-clients
//
// Each sub-client borrows an `ArtieClient` and pins a base path. They add
// no state of their own; building one is free, so callers can do
// `client.connectors().get(&id)` inline.

mod connectors;
mod deployments;
mod destinations;
mod pipelines;
mod private_links;
mod source_readers;
mod ssh_tunnels;

pub use connectors::ConnectorClient;
pub use deployments::DeploymentClient;
pub use destinations::DestinationClient;
pub use pipelines::PipelineClient;
pub use private_links::PrivateLinkClient;
pub use source_readers::SourceReaderClient;
pub use ssh_tunnels::SshTunnelClient;

use crate::client::ArtieClient;

impl ArtieClient {
    pub fn connectors(&self) -> ConnectorClient<'_> {
        ConnectorClient::new(self)
    }

    pub fn destinations(&self) -> DestinationClient<'_> {
        DestinationClient::new(self)
    }

    pub fn source_readers(&self) -> SourceReaderClient<'_> {
        SourceReaderClient::new(self)
    }

    pub fn pipelines(&self) -> PipelineClient<'_> {
        PipelineClient::new(self)
    }

    pub fn ssh_tunnels(&self) -> SshTunnelClient<'_> {
        SshTunnelClient::new(self)
    }

    pub fn private_links(&self) -> PrivateLinkClient<'_> {
        PrivateLinkClient::new(self)
    }

    pub fn deployments(&self) -> DeploymentClient<'_> {
        DeploymentClient::new(self)
    }
}
