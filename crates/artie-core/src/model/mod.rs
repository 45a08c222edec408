// ── Domain model ──
//
// Types the provider layer works with. They differ from the wire types in
// `artie_api::types` where the API's shape is awkward to manage as state:
// one settings struct per connector type instead of a flat bag of optional
// fields, tables keyed by name, and optional UUIDs for not-yet-created
// resources.

pub mod config;
pub mod connector;
pub mod deployment;
pub mod kind;
pub mod network;
pub mod pipeline;
pub mod source_reader;

pub use config::{
    BigQueryConfig, ConnectorConfig, DestinationConnectionConfig, DynamoDbConfig, MongoDbConfig,
    MsSqlConfig, OracleConfig, RedshiftConfig, S3Config, SnowflakeConfig, SqlConfig,
};
pub use connector::{Connector, Destination};
pub use deployment::{Deployment, DeploymentTable};
pub use kind::{ConnectorType, DestinationType, PublicationMode};
pub use network::{PrivateLinkConnection, SshTunnel};
pub use pipeline::{AdvancedSettings, DestinationConfig, MergePredicate, Pipeline, Table, table_key};
pub use source_reader::{SourceReader, SourceReaderSettings};
