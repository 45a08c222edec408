use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Replication knobs for a source reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReaderSettings {
    /// Fan out into one Kafka topic per schema instead of per table.
    #[serde(default)]
    pub one_topic_per_schema: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postgres_publication_name_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postgres_replication_slot_override: Option<String>,
    /// `filtered` or `all_tables`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postgres_publication_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backfill_batch_size: Option<u32>,
}

/// Creation-relevant source reader fields: body of `POST source-readers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSourceReader {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data_plane_name: String,
    #[serde(rename = "connectorUUID")]
    pub connector_uuid: Uuid,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub database_name: String,
    /// Oracle pluggable database (container) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    #[serde(default)]
    pub settings: SourceReaderSettings,
}

/// Source reader as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReader {
    pub uuid: Uuid,
    #[serde(flatten)]
    pub base: BaseSourceReader,
}
