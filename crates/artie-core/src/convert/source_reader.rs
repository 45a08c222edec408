// ── Source reader conversions ──

use artie_api::types as wire;

use super::require_uuid;
use crate::error::CoreError;
use crate::model::{PublicationMode, SourceReader, SourceReaderSettings};

impl TryFrom<wire::SourceReaderSettings> for SourceReaderSettings {
    type Error = CoreError;

    fn try_from(s: wire::SourceReaderSettings) -> Result<Self, Self::Error> {
        let publication_mode = s
            .postgres_publication_mode
            .filter(|mode| !mode.is_empty())
            .map(|mode| PublicationMode::parse(&mode))
            .transpose()?;
        Ok(Self {
            one_topic_per_schema: s.one_topic_per_schema,
            publication_name_override: s.postgres_publication_name_override,
            replication_slot_override: s.postgres_replication_slot_override,
            publication_mode,
            backfill_batch_size: s.backfill_batch_size,
        })
    }
}

impl From<&SourceReaderSettings> for wire::SourceReaderSettings {
    fn from(s: &SourceReaderSettings) -> Self {
        Self {
            one_topic_per_schema: s.one_topic_per_schema,
            postgres_publication_name_override: s.publication_name_override.clone(),
            postgres_replication_slot_override: s.replication_slot_override.clone(),
            postgres_publication_mode: s.publication_mode.map(|m| m.as_str().to_owned()),
            backfill_batch_size: s.backfill_batch_size,
        }
    }
}

impl TryFrom<wire::SourceReader> for SourceReader {
    type Error = CoreError;

    fn try_from(r: wire::SourceReader) -> Result<Self, Self::Error> {
        let base = r.base;
        Ok(Self {
            uuid: Some(r.uuid),
            name: base.name,
            data_plane_name: base.data_plane_name,
            connector_uuid: base.connector_uuid,
            is_shared: base.is_shared,
            database_name: base.database_name,
            container_name: base.container_name,
            settings: base.settings.try_into()?,
        })
    }
}

impl From<&SourceReader> for wire::BaseSourceReader {
    fn from(r: &SourceReader) -> Self {
        Self {
            name: r.name.clone(),
            data_plane_name: r.data_plane_name.clone(),
            connector_uuid: r.connector_uuid,
            is_shared: r.is_shared,
            database_name: r.database_name.clone(),
            container_name: r.container_name.clone(),
            settings: (&r.settings).into(),
        }
    }
}

impl TryFrom<&SourceReader> for wire::SourceReader {
    type Error = CoreError;

    fn try_from(r: &SourceReader) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: require_uuid(r.uuid, "source reader")?,
            base: r.into(),
        })
    }
}
