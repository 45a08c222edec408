// ── Per-technology connection settings ──
//
// Each connector or destination type has its own settings struct, and the
// enums below tie a type to exactly one of them. The wire format flattens
// all of these into one bag of optional fields; see `crate::convert`.

use serde::{Deserialize, Serialize};

use super::kind::{ConnectorType, DestinationType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigQueryConfig {
    pub project_id: String,
    pub location: String,
    /// Service-account key, as JSON text.
    pub credentials_data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamoDbConfig {
    pub region: String,
    pub streams_arn: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MongoDbConfig {
    /// Connection string host, e.g. `mongodb+srv://cluster0.example.net`.
    pub host: String,
    pub user: String,
    pub password: String,
}

/// MySQL and PostgreSQL share one shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlConfig {
    pub host: String,
    /// Read replica used for backfills instead of `host`.
    pub snapshot_host: Option<String>,
    pub port: u16,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsSqlConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub service: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedshiftConfig {
    pub endpoint: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    pub region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
}

/// Snowflake accepts either a password or a key pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnowflakeConfig {
    pub account_url: String,
    pub virtual_dwh: String,
    pub user: String,
    pub password: Option<String>,
    pub private_key: Option<String>,
}

// ── Connector settings ─────────────────────────────────────────────

/// Connection settings for a source connector, one variant per type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConnectorConfig {
    BigQuery(BigQueryConfig),
    DynamoDb(DynamoDbConfig),
    MongoDb(MongoDbConfig),
    MySql(SqlConfig),
    MsSql(MsSqlConfig),
    Oracle(OracleConfig),
    PostgreSql(SqlConfig),
    Redshift(RedshiftConfig),
    S3(S3Config),
    Snowflake(SnowflakeConfig),
}

impl ConnectorConfig {
    pub fn connector_type(&self) -> ConnectorType {
        match self {
            Self::BigQuery(_) => ConnectorType::BigQuery,
            Self::DynamoDb(_) => ConnectorType::DynamoDb,
            Self::MongoDb(_) => ConnectorType::MongoDb,
            Self::MySql(_) => ConnectorType::MySql,
            Self::MsSql(_) => ConnectorType::MsSql,
            Self::Oracle(_) => ConnectorType::Oracle,
            Self::PostgreSql(_) => ConnectorType::PostgreSql,
            Self::Redshift(_) => ConnectorType::Redshift,
            Self::S3(_) => ConnectorType::S3,
            Self::Snowflake(_) => ConnectorType::Snowflake,
        }
    }
}

// ── Destination settings ───────────────────────────────────────────

/// Connection settings for a destination, one variant per type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DestinationConnectionConfig {
    BigQuery(BigQueryConfig),
    Redshift(RedshiftConfig),
    Snowflake(SnowflakeConfig),
    MsSql(MsSqlConfig),
    S3(S3Config),
}

impl DestinationConnectionConfig {
    pub fn destination_type(&self) -> DestinationType {
        match self {
            Self::BigQuery(_) => DestinationType::BigQuery,
            Self::Redshift(_) => DestinationType::Redshift,
            Self::Snowflake(_) => DestinationType::Snowflake,
            Self::MsSql(_) => DestinationType::MsSql,
            Self::S3(_) => DestinationType::S3,
        }
    }
}
