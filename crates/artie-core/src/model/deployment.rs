// ── Legacy deployment domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::ConnectorType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTable {
    pub name: String,
    pub schema: String,
    pub enable_history_mode: bool,
}

/// Pre-pipeline bundle of source, tables and destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub uuid: Option<Uuid>,
    pub name: String,
    pub status: Option<String>,
    pub source_type: ConnectorType,
    pub tables: Vec<DeploymentTable>,
    pub destination_uuid: Option<Uuid>,
    pub ssh_tunnel_uuid: Option<Uuid>,
    pub last_updated_at: Option<DateTime<Utc>>,
}
