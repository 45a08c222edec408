//! Domain model and translation layer for Artie resources.
//!
//! Sits between `artie-api` (raw HTTP and wire types) and whatever manages
//! resource state, such as an infrastructure-as-code provider:
//!
//! - **Domain model** ([`model`]): one settings struct per connector and
//!   destination type, tables keyed by `schema.name`, optional UUIDs for
//!   resources that have not been created yet.
//!
//! - **Conversions**: `From` / `TryFrom` impls in both
//!   directions between [`model`] and `artie_api::types`.
//!
//! - **[`ArtieService`]**: domain-typed CRUD, connection tests, pipeline
//!   activation and validation.

mod convert;
pub mod error;
pub mod model;
pub mod service;

pub use error::CoreError;
pub use service::ArtieService;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AdvancedSettings, BigQueryConfig, Connector, ConnectorConfig, ConnectorType, Deployment,
    DeploymentTable, Destination, DestinationConfig, DestinationConnectionConfig,
    DestinationType, DynamoDbConfig, MergePredicate, MongoDbConfig, MsSqlConfig, OracleConfig,
    Pipeline, PrivateLinkConnection, PublicationMode, RedshiftConfig, S3Config, SnowflakeConfig,
    SourceReader, SourceReaderSettings, SqlConfig, SshTunnel, Table,
};

// The wire-level crate, for callers that need the raw client.
pub use artie_api;
