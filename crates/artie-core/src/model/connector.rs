// ── Connector and destination domain types ──

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::{ConnectorConfig, DestinationConnectionConfig};
use super::kind::{ConnectorType, DestinationType};

/// A source database the platform can read change events from.
///
/// `uuid` is `None` until the connector has been created server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub uuid: Option<Uuid>,
    pub label: String,
    pub data_plane_name: String,
    pub ssh_tunnel_uuid: Option<Uuid>,
    pub config: ConnectorConfig,
}

impl Connector {
    pub fn connector_type(&self) -> ConnectorType {
        self.config.connector_type()
    }
}

/// A warehouse or lake that pipelines write into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub uuid: Option<Uuid>,
    pub label: String,
    pub data_plane_name: String,
    pub ssh_tunnel_uuid: Option<Uuid>,
    pub config: DestinationConnectionConfig,
}

impl Destination {
    pub fn destination_type(&self) -> DestinationType {
        self.config.destination_type()
    }
}
