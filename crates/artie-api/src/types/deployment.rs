//! Legacy deployment model, superseded by pipelines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTable {
    pub name: String,
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub enable_history_mode: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSource {
    /// Source connector type, e.g. `postgresql`.
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub tables: Vec<DeploymentTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub uuid: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    pub source: DeploymentSource,
    #[serde(rename = "destinationUUID", default, skip_serializing_if = "Option::is_none")]
    pub destination_uuid: Option<Uuid>,
    #[serde(rename = "sshTunnelUUID", default, skip_serializing_if = "Option::is_none")]
    pub ssh_tunnel_uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
}

/// Every deployment response wraps the entity in a `deploy` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentEnvelope {
    pub deploy: Deployment,
}
