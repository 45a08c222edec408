// ── Resource type discriminators ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::CoreError;

/// Source database technology behind a connector.
///
/// The lowercase form (`"postgresql"`, `"dynamodb"`, ...) is what the API
/// expects in the `type` field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConnectorType {
    BigQuery,
    DynamoDb,
    MongoDb,
    MySql,
    MsSql,
    Oracle,
    PostgreSql,
    Redshift,
    S3,
    Snowflake,
}

impl ConnectorType {
    /// Parse the API's `type` string.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        raw.parse()
            .map_err(|_| CoreError::unknown_type("connector", raw))
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Warehouse or lake a pipeline writes into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DestinationType {
    BigQuery,
    Redshift,
    Snowflake,
    MsSql,
    S3,
}

impl DestinationType {
    /// Parse the API's `type` string.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        raw.parse()
            .map_err(|_| CoreError::unknown_type("destination", raw))
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// How a Postgres source reader scopes its publication.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PublicationMode {
    /// Only the tables the pipelines replicate.
    Filtered,
    /// Every table in the database.
    AllTables,
}

impl PublicationMode {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        raw.parse()
            .map_err(|_| CoreError::unknown_type("publication mode", raw))
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
