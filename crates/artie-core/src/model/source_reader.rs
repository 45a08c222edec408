// ── Source reader domain types ──

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::PublicationMode;

/// Reader tuning. The Postgres fields are ignored for other sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReaderSettings {
    pub one_topic_per_schema: bool,
    pub publication_name_override: Option<String>,
    pub replication_slot_override: Option<String>,
    pub publication_mode: Option<PublicationMode>,
    pub backfill_batch_size: Option<u32>,
}

/// A reader process attached to one connector and one database.
///
/// A shared reader can feed several pipelines from a single replication
/// slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReader {
    pub uuid: Option<Uuid>,
    pub name: String,
    pub data_plane_name: String,
    pub connector_uuid: Uuid,
    pub is_shared: bool,
    pub database_name: String,
    pub container_name: Option<String>,
    pub settings: SourceReaderSettings,
}
