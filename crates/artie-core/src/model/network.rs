// ── Network access domain types ──

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bastion host the data plane tunnels through to reach a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshTunnel {
    pub uuid: Option<Uuid>,
    pub name: String,
    pub data_plane_name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Generated server-side; add it to the bastion's `authorized_keys`.
    pub public_key: Option<String>,
}

/// An AWS PrivateLink endpoint into the customer's VPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateLinkConnection {
    pub uuid: Option<Uuid>,
    pub name: String,
    pub data_plane_name: String,
    pub vpc_service_name: String,
    pub aws_account_id: Option<String>,
    pub region: String,
    pub vpc_endpoint_id: Option<String>,

    // Server-populated
    pub status: Option<String>,
    pub dns_entry: Option<String>,
}
