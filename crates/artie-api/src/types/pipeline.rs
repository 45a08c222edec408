use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Tables ───────────────────────────────────────────────────────────

/// Merge predicate used when the destination table is partitioned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePredicate {
    pub partition_field: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub partition_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub partition_by: String,
}

/// Per-table overrides, nested under `advancedSettings` on the wire.
///
/// Lists distinguish "absent" (`None`) from "present but empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAdvancedSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_to_hash: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_predicates: Option<Vec<MergePredicate>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Assigned by the server once the pipeline is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub enable_history_mode: bool,
    #[serde(default)]
    pub individual_deployment: bool,
    #[serde(default)]
    pub is_partitioned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<TableAdvancedSettings>,
}

// ── Pipeline-level settings ──────────────────────────────────────────

/// Where and how the destination lays out replicated tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationConfig {
    /// BigQuery dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_same_schema_as_source: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_name_prefix: Option<String>,
    /// S3 bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Flush thresholds and column-handling toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_interval_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_rows: Option<u32>,
    #[serde(rename = "flushSizeKB", default, skip_serializing_if = "Option::is_none")]
    pub flush_size_kb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_deleted_columns: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_artie_updated_at_column: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_database_updated_at_column: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_soft_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_events_by_type: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_source_schema: Option<String>,
}

// ── Pipeline ─────────────────────────────────────────────────────────

/// Creation-relevant pipeline fields: body of `POST pipelines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePipeline {
    pub name: String,
    #[serde(default)]
    pub data_plane_name: String,
    #[serde(rename = "sourceReaderUUID", default, skip_serializing_if = "Option::is_none")]
    pub source_reader_uuid: Option<Uuid>,
    #[serde(rename = "destinationUUID", default, skip_serializing_if = "Option::is_none")]
    pub destination_uuid: Option<Uuid>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub destination_config: DestinationConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<AdvancedSettings>,
}

/// Pipeline as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub uuid: Uuid,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub base: BasePipeline,
}

/// `GET pipelines/{id}` wraps the entity in a `pipeline` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEnvelope {
    pub pipeline: Pipeline,
}
