use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Union of every connector configuration field across all connector types.
///
/// Which subset is meaningful depends on the owning connector's `type`;
/// everything else stays `None` and is left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorSharedConfig {
    // ── Relational databases (MySQL, PostgreSQL, MSSQL, Oracle, Redshift) ──
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Separate replica used for the initial snapshot (MySQL, PostgreSQL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Oracle service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Redshift cluster endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    // ── BigQuery ──
    #[serde(rename = "projectID", default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Service-account JSON document, sent as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_data: Option<String>,

    // ── AWS (DynamoDB, S3) ──
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(rename = "awsAccessKeyID", default, skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams_arn: Option<String>,

    // ── Snowflake ──
    #[serde(rename = "accountURL", default, skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
    #[serde(rename = "virtualDWH", default, skip_serializing_if = "Option::is_none")]
    pub virtual_dwh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

/// Creation-relevant connector fields: body of `POST connectors` and
/// `POST connectors/ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConnector {
    /// Discriminator: `bigquery`, `dynamodb`, `mongodb`, `mysql`, `mssql`,
    /// `oracle`, `postgresql`, `redshift`, `s3` or `snowflake`.
    #[serde(rename = "type")]
    pub connector_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data_plane_name: String,
    #[serde(rename = "sshTunnelUUID", default, skip_serializing_if = "Option::is_none")]
    pub ssh_tunnel_uuid: Option<Uuid>,
    #[serde(default)]
    pub config: ConnectorSharedConfig,
}

/// Connector as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub uuid: Uuid,
    #[serde(flatten)]
    pub base: BaseConnector,
}
