// ── Deployment conversions ──

use artie_api::types as wire;

use super::{present, require_uuid};
use crate::error::CoreError;
use crate::model::{ConnectorType, Deployment, DeploymentTable};

impl From<wire::DeploymentTable> for DeploymentTable {
    fn from(t: wire::DeploymentTable) -> Self {
        Self {
            name: t.name,
            schema: t.schema,
            enable_history_mode: t.enable_history_mode,
        }
    }
}

impl From<&DeploymentTable> for wire::DeploymentTable {
    fn from(t: &DeploymentTable) -> Self {
        Self {
            name: t.name.clone(),
            schema: t.schema.clone(),
            enable_history_mode: t.enable_history_mode,
        }
    }
}

impl TryFrom<wire::Deployment> for Deployment {
    type Error = CoreError;

    fn try_from(d: wire::Deployment) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: Some(d.uuid),
            name: d.name,
            status: present(d.status),
            source_type: ConnectorType::parse(&d.source.source_type)?,
            tables: d.source.tables.into_iter().map(DeploymentTable::from).collect(),
            destination_uuid: d.destination_uuid,
            ssh_tunnel_uuid: d.ssh_tunnel_uuid,
            last_updated_at: d.last_updated_at,
        })
    }
}

impl TryFrom<&Deployment> for wire::Deployment {
    type Error = CoreError;

    fn try_from(d: &Deployment) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: require_uuid(d.uuid, "deployment")?,
            name: d.name.clone(),
            status: d.status.clone().unwrap_or_default(),
            source: wire::DeploymentSource {
                source_type: d.source_type.as_str().to_owned(),
                tables: d.tables.iter().map(wire::DeploymentTable::from).collect(),
            },
            destination_uuid: d.destination_uuid,
            ssh_tunnel_uuid: d.ssh_tunnel_uuid,
            last_updated_at: d.last_updated_at,
        })
    }
}
