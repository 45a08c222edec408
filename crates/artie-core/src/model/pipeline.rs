// ── Pipeline domain types ──

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partition hint used when merging rows into a partitioned table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePredicate {
    pub partition_field: String,
    pub partition_type: String,
    pub partition_by: String,
}

/// One replicated table.
///
/// The API nests the per-table overrides under `advancedSettings`; here they
/// sit directly on the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub uuid: Option<Uuid>,
    pub name: String,
    pub schema: String,
    pub enable_history_mode: bool,
    pub individual_deployment: bool,
    pub is_partitioned: bool,

    // Overrides
    pub alias: Option<String>,
    pub exclude_columns: Option<Vec<String>>,
    pub include_columns: Option<Vec<String>>,
    pub columns_to_hash: Option<Vec<String>>,
    pub skip_deletes: Option<bool>,
    pub merge_predicates: Option<Vec<MergePredicate>>,
}

impl Table {
    /// Map key for this table: `schema.name`, or bare `name` when the
    /// source has no schemas.
    pub fn key(&self) -> String {
        table_key(&self.schema, &self.name)
    }

    /// `true` if no override is set at all.
    pub fn has_no_overrides(&self) -> bool {
        self.alias.is_none()
            && self.exclude_columns.is_none()
            && self.include_columns.is_none()
            && self.columns_to_hash.is_none()
            && self.skip_deletes.is_none()
            && self.merge_predicates.is_none()
    }
}

pub fn table_key(schema: &str, name: &str) -> String {
    if schema.is_empty() {
        name.to_owned()
    } else {
        format!("{schema}.{name}")
    }
}

/// Where in the destination the pipeline writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub dataset: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub use_same_schema_as_source: Option<bool>,
    pub schema_name_prefix: Option<String>,
    pub bucket: Option<String>,
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    pub flush_interval_seconds: Option<u32>,
    pub buffer_rows: Option<u32>,
    pub flush_size_kb: Option<u32>,
    pub drop_deleted_columns: Option<bool>,
    pub include_artie_updated_at_column: Option<bool>,
    pub include_database_updated_at_column: Option<bool>,
    pub enable_soft_delete: Option<bool>,
    pub split_events_by_type: Option<bool>,
    pub default_source_schema: Option<String>,
}

/// A replication job from one source reader into one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub uuid: Option<Uuid>,
    pub name: String,
    pub status: Option<String>,
    pub data_plane_name: String,
    pub source_reader_uuid: Option<Uuid>,
    pub destination_uuid: Option<Uuid>,
    /// Keyed by [`Table::key`], in the order the API returned them.
    pub tables: IndexMap<String, Table>,
    pub destination_config: DestinationConfig,
    pub advanced_settings: Option<AdvancedSettings>,
}

impl Pipeline {
    /// Insert a table under its computed key, replacing any previous entry.
    pub fn insert_table(&mut self, table: Table) -> Option<Table> {
        self.tables.insert(table.key(), table)
    }
}
