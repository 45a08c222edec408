// ── Pipeline conversions ──
//
// Tables arrive as a list with the per-table overrides nested under
// `advancedSettings`; the domain keys them by `schema.name` and lifts the
// overrides onto the table. List overrides always come back as a list
// (empty when the API sent nothing) so a missing settings object and one
// full of nulls read the same.

use artie_api::types as wire;
use indexmap::IndexMap;

use super::{present, require_uuid};
use crate::error::CoreError;
use crate::model::{AdvancedSettings, DestinationConfig, MergePredicate, Pipeline, Table};

// ── Merge predicates ───────────────────────────────────────────────

impl From<wire::MergePredicate> for MergePredicate {
    fn from(p: wire::MergePredicate) -> Self {
        Self {
            partition_field: p.partition_field,
            partition_type: p.partition_type,
            partition_by: p.partition_by,
        }
    }
}

impl From<&MergePredicate> for wire::MergePredicate {
    fn from(p: &MergePredicate) -> Self {
        Self {
            partition_field: p.partition_field.clone(),
            partition_type: p.partition_type.clone(),
            partition_by: p.partition_by.clone(),
        }
    }
}

// ── Tables ─────────────────────────────────────────────────────────

impl From<wire::Table> for Table {
    fn from(t: wire::Table) -> Self {
        let settings = t.advanced_settings.unwrap_or_default();
        Self {
            uuid: t.uuid,
            name: t.name,
            schema: t.schema,
            enable_history_mode: t.enable_history_mode,
            individual_deployment: t.individual_deployment,
            is_partitioned: t.is_partitioned,
            alias: settings.alias,
            exclude_columns: Some(settings.exclude_columns.unwrap_or_default()),
            include_columns: Some(settings.include_columns.unwrap_or_default()),
            columns_to_hash: Some(settings.columns_to_hash.unwrap_or_default()),
            skip_deletes: settings.skip_delete,
            merge_predicates: Some(
                settings
                    .merge_predicates
                    .unwrap_or_default()
                    .into_iter()
                    .map(MergePredicate::from)
                    .collect(),
            ),
        }
    }
}

impl From<&Table> for wire::Table {
    fn from(t: &Table) -> Self {
        let advanced_settings = (!t.has_no_overrides()).then(|| wire::TableAdvancedSettings {
            alias: t.alias.clone(),
            exclude_columns: t.exclude_columns.clone(),
            include_columns: t.include_columns.clone(),
            columns_to_hash: t.columns_to_hash.clone(),
            skip_delete: t.skip_deletes,
            merge_predicates: t
                .merge_predicates
                .as_ref()
                .map(|preds| preds.iter().map(wire::MergePredicate::from).collect()),
        });
        Self {
            uuid: t.uuid,
            name: t.name.clone(),
            schema: t.schema.clone(),
            enable_history_mode: t.enable_history_mode,
            individual_deployment: t.individual_deployment,
            is_partitioned: t.is_partitioned,
            advanced_settings,
        }
    }
}

// ── Pipeline-level settings ────────────────────────────────────────

impl From<wire::DestinationConfig> for DestinationConfig {
    fn from(c: wire::DestinationConfig) -> Self {
        Self {
            dataset: c.dataset,
            database: c.database,
            schema: c.schema,
            use_same_schema_as_source: c.use_same_schema_as_source,
            schema_name_prefix: c.schema_name_prefix,
            bucket: c.bucket,
            folder: c.folder,
        }
    }
}

impl From<&DestinationConfig> for wire::DestinationConfig {
    fn from(c: &DestinationConfig) -> Self {
        Self {
            dataset: c.dataset.clone(),
            database: c.database.clone(),
            schema: c.schema.clone(),
            use_same_schema_as_source: c.use_same_schema_as_source,
            schema_name_prefix: c.schema_name_prefix.clone(),
            bucket: c.bucket.clone(),
            folder: c.folder.clone(),
        }
    }
}

impl From<wire::AdvancedSettings> for AdvancedSettings {
    fn from(s: wire::AdvancedSettings) -> Self {
        Self {
            flush_interval_seconds: s.flush_interval_seconds,
            buffer_rows: s.buffer_rows,
            flush_size_kb: s.flush_size_kb,
            drop_deleted_columns: s.drop_deleted_columns,
            include_artie_updated_at_column: s.include_artie_updated_at_column,
            include_database_updated_at_column: s.include_database_updated_at_column,
            enable_soft_delete: s.enable_soft_delete,
            split_events_by_type: s.split_events_by_type,
            default_source_schema: s.default_source_schema,
        }
    }
}

impl From<&AdvancedSettings> for wire::AdvancedSettings {
    fn from(s: &AdvancedSettings) -> Self {
        Self {
            flush_interval_seconds: s.flush_interval_seconds,
            buffer_rows: s.buffer_rows,
            flush_size_kb: s.flush_size_kb,
            drop_deleted_columns: s.drop_deleted_columns,
            include_artie_updated_at_column: s.include_artie_updated_at_column,
            include_database_updated_at_column: s.include_database_updated_at_column,
            enable_soft_delete: s.enable_soft_delete,
            split_events_by_type: s.split_events_by_type,
            default_source_schema: s.default_source_schema.clone(),
        }
    }
}

// ── Pipeline ───────────────────────────────────────────────────────

impl From<wire::Pipeline> for Pipeline {
    fn from(p: wire::Pipeline) -> Self {
        let base = p.base;

        // Later duplicates win but keep the first one's position.
        let mut tables = IndexMap::with_capacity(base.tables.len());
        for table in base.tables.into_iter().map(Table::from) {
            tables.insert(table.key(), table);
        }

        Self {
            uuid: Some(p.uuid),
            name: base.name,
            status: present(p.status),
            data_plane_name: base.data_plane_name,
            source_reader_uuid: base.source_reader_uuid,
            destination_uuid: base.destination_uuid,
            tables,
            destination_config: base.destination_config.into(),
            advanced_settings: base.advanced_settings.map(AdvancedSettings::from),
        }
    }
}

impl From<&Pipeline> for wire::BasePipeline {
    fn from(p: &Pipeline) -> Self {
        Self {
            name: p.name.clone(),
            data_plane_name: p.data_plane_name.clone(),
            source_reader_uuid: p.source_reader_uuid,
            destination_uuid: p.destination_uuid,
            tables: p.tables.values().map(wire::Table::from).collect(),
            destination_config: (&p.destination_config).into(),
            advanced_settings: p.advanced_settings.as_ref().map(wire::AdvancedSettings::from),
        }
    }
}

impl TryFrom<&Pipeline> for wire::Pipeline {
    type Error = CoreError;

    fn try_from(p: &Pipeline) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: require_uuid(p.uuid, "pipeline")?,
            status: p.status.clone().unwrap_or_default(),
            base: p.into(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn wire_pipeline(tables: serde_json::Value) -> wire::Pipeline {
        serde_json::from_value(json!({
            "uuid": Uuid::new_v4(),
            "name": "orders-to-snowflake",
            "status": "running",
            "dataPlaneName": "aws-us-east-1",
            "sourceReaderUUID": Uuid::new_v4(),
            "destinationUUID": Uuid::new_v4(),
            "tables": tables,
            "destinationConfig": { "database": "ANALYTICS", "schema": "PUBLIC" }
        }))
        .unwrap()
    }

    #[test]
    fn tables_are_keyed_by_schema_and_name() {
        let pipeline = Pipeline::from(wire_pipeline(json!([
            { "name": "orders", "schema": "public" },
            { "name": "events", "schema": "" },
            { "name": "users", "schema": "public" }
        ])));

        let keys: Vec<&str> = pipeline.tables.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["public.orders", "events", "public.users"]);
        assert_eq!(pipeline.status.as_deref(), Some("running"));
    }

    #[test]
    fn absent_table_settings_become_empty_lists() {
        let pipeline = Pipeline::from(wire_pipeline(json!([
            { "name": "orders", "schema": "public" }
        ])));
        let table = &pipeline.tables["public.orders"];

        assert_eq!(table.exclude_columns, Some(vec![]));
        assert_eq!(table.include_columns, Some(vec![]));
        assert_eq!(table.columns_to_hash, Some(vec![]));
        assert_eq!(table.merge_predicates, Some(vec![]));
        assert_eq!(table.alias, None);
        assert_eq!(table.skip_deletes, None);
    }

    #[test]
    fn null_lists_inside_settings_become_empty_lists() {
        let pipeline = Pipeline::from(wire_pipeline(json!([{
            "name": "orders",
            "schema": "public",
            "advancedSettings": {
                "alias": "orders_v2",
                "excludeColumns": null,
                "columnsToHash": ["email"],
                "skipDelete": true
            }
        }])));
        let table = &pipeline.tables["public.orders"];

        assert_eq!(table.alias.as_deref(), Some("orders_v2"));
        assert_eq!(table.exclude_columns, Some(vec![]));
        assert_eq!(table.columns_to_hash, Some(vec!["email".to_owned()]));
        assert_eq!(table.skip_deletes, Some(true));
    }

    #[test]
    fn empty_merge_predicates_survive_a_round_trip() {
        let table = Table {
            name: "orders".into(),
            schema: "public".into(),
            merge_predicates: Some(vec![]),
            ..Table::default()
        };

        let sent = serde_json::to_value(wire::Table::from(&table)).unwrap();
        assert_eq!(sent["advancedSettings"], json!({ "mergePredicates": [] }));

        let back = Table::from(serde_json::from_value::<wire::Table>(sent).unwrap());
        assert_eq!(back.merge_predicates, Some(vec![]));
    }

    #[test]
    fn table_without_overrides_sends_no_settings() {
        let table = Table {
            name: "orders".into(),
            ..Table::default()
        };
        let sent = serde_json::to_value(wire::Table::from(&table)).unwrap();
        assert!(sent.get("advancedSettings").is_none());
    }

    #[test]
    fn merge_predicates_carry_over() {
        let pipeline = Pipeline::from(wire_pipeline(json!([{
            "name": "events",
            "schema": "public",
            "isPartitioned": true,
            "advancedSettings": {
                "mergePredicates": [{ "partitionField": "created_at", "partitionType": "time", "partitionBy": "daily" }]
            }
        }])));
        let table = &pipeline.tables["public.events"];

        assert!(table.is_partitioned);
        assert_eq!(
            table.merge_predicates,
            Some(vec![MergePredicate {
                partition_field: "created_at".into(),
                partition_type: "time".into(),
                partition_by: "daily".into(),
            }])
        );
    }

    #[test]
    fn pipeline_round_trips_through_wire_model() {
        let original = Pipeline::from(wire_pipeline(json!([
            { "name": "orders", "schema": "public", "enableHistoryMode": true },
            { "name": "users", "schema": "public", "advancedSettings": { "alias": "people" } }
        ])));

        let back = Pipeline::from(wire::Pipeline::try_from(&original).unwrap());
        assert_eq!(back, original);
    }

    #[test]
    fn update_model_needs_uuid() {
        let pipeline = Pipeline {
            name: "draft".into(),
            ..Pipeline::default()
        };
        let base = wire::BasePipeline::from(&pipeline);
        assert_eq!(base.name, "draft");
        assert!(wire::Pipeline::try_from(&pipeline).is_err());
    }
}
