//! Wire types for the Artie control-plane API.
//!
//! These mirror the JSON bodies exactly (camelCase, acronyms upper-cased as
//! the API spells them: `sshTunnelUUID`, `projectID`, ...). Optional wire
//! fields are `Option<T>` and are omitted when `None`, so fields irrelevant
//! to a resource's type never reach the server as zero values.
//!
//! Create endpoints take the `Base*` shape; server-assigned fields (UUID,
//! status, computed keys) only exist on the full shape.

mod connector;
mod deployment;
mod destination;
mod pipeline;
mod private_link;
mod source_reader;
mod ssh_tunnel;
mod validation;

pub use connector::{BaseConnector, Connector, ConnectorSharedConfig};
pub use deployment::{Deployment, DeploymentEnvelope, DeploymentSource, DeploymentTable};
pub use destination::{BaseDestination, Destination, DestinationSharedConfig};
pub use pipeline::{
    AdvancedSettings, BasePipeline, DestinationConfig, MergePredicate, Pipeline,
    PipelineEnvelope, Table, TableAdvancedSettings,
};
pub use private_link::{BasePrivateLinkConnection, PrivateLinkConnection};
pub use source_reader::{BaseSourceReader, SourceReader, SourceReaderSettings};
pub use ssh_tunnel::{BaseSshTunnel, SshTunnel};
pub use validation::{ValidationOutcome, ValidationResponse};

use serde::{Deserialize, Serialize};

/// List response shape shared by every `GET {base}` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}
