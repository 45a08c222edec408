use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Union of every destination configuration field across sink types
/// (BigQuery, Redshift, Snowflake, MSSQL, S3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSharedConfig {
    // ── MSSQL / Redshift ──
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    // ── BigQuery ──
    #[serde(rename = "projectID", default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_data: Option<String>,

    // ── S3 ──
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(rename = "awsAccessKeyID", default, skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<String>,

    // ── Snowflake ──
    #[serde(rename = "accountURL", default, skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
    #[serde(rename = "virtualDWH", default, skip_serializing_if = "Option::is_none")]
    pub virtual_dwh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

/// Creation-relevant destination fields: body of `POST destinations` and
/// `POST destinations/ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseDestination {
    /// Discriminator: `bigquery`, `redshift`, `snowflake`, `mssql` or `s3`.
    #[serde(rename = "type")]
    pub destination_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data_plane_name: String,
    #[serde(rename = "sshTunnelUUID", default, skip_serializing_if = "Option::is_none")]
    pub ssh_tunnel_uuid: Option<Uuid>,
    #[serde(default)]
    pub config: DestinationSharedConfig,
}

/// Destination as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub uuid: Uuid,
    #[serde(flatten)]
    pub base: BaseDestination,
}
