// ── SSH tunnel / PrivateLink conversions ──

use artie_api::types as wire;

use super::{present, require_uuid};
use crate::error::CoreError;
use crate::model::{PrivateLinkConnection, SshTunnel};

impl From<wire::SshTunnel> for SshTunnel {
    fn from(t: wire::SshTunnel) -> Self {
        Self {
            uuid: Some(t.uuid),
            name: t.base.name,
            data_plane_name: t.base.data_plane_name,
            host: t.base.host,
            port: t.base.port,
            username: t.base.username,
            public_key: present(t.public_key),
        }
    }
}

impl From<&SshTunnel> for wire::BaseSshTunnel {
    fn from(t: &SshTunnel) -> Self {
        Self {
            name: t.name.clone(),
            data_plane_name: t.data_plane_name.clone(),
            host: t.host.clone(),
            port: t.port,
            username: t.username.clone(),
        }
    }
}

impl TryFrom<&SshTunnel> for wire::SshTunnel {
    type Error = CoreError;

    fn try_from(t: &SshTunnel) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: require_uuid(t.uuid, "SSH tunnel")?,
            public_key: t.public_key.clone().unwrap_or_default(),
            base: t.into(),
        })
    }
}

impl From<wire::PrivateLinkConnection> for PrivateLinkConnection {
    fn from(c: wire::PrivateLinkConnection) -> Self {
        let base = c.base;
        Self {
            uuid: Some(c.uuid),
            name: base.name,
            data_plane_name: base.data_plane_name,
            vpc_service_name: base.vpc_service_name,
            aws_account_id: base.aws_account_id,
            region: base.region,
            vpc_endpoint_id: base.vpc_endpoint_id,
            status: present(c.status),
            dns_entry: present(c.dns_entry),
        }
    }
}

impl From<&PrivateLinkConnection> for wire::BasePrivateLinkConnection {
    fn from(c: &PrivateLinkConnection) -> Self {
        Self {
            name: c.name.clone(),
            data_plane_name: c.data_plane_name.clone(),
            vpc_service_name: c.vpc_service_name.clone(),
            aws_account_id: c.aws_account_id.clone(),
            region: c.region.clone(),
            vpc_endpoint_id: c.vpc_endpoint_id.clone(),
        }
    }
}

impl TryFrom<&PrivateLinkConnection> for wire::PrivateLinkConnection {
    type Error = CoreError;

    fn try_from(c: &PrivateLinkConnection) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: require_uuid(c.uuid, "PrivateLink connection")?,
            status: c.status.clone().unwrap_or_default(),
            dns_entry: c.dns_entry.clone().unwrap_or_default(),
            base: c.into(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn ssh_tunnel_round_trips() {
        let wire_model = wire::SshTunnel {
            uuid: Uuid::new_v4(),
            public_key: "ssh-ed25519 AAAA artie".into(),
            base: wire::BaseSshTunnel {
                name: "bastion".into(),
                data_plane_name: "aws-us-east-1".into(),
                host: "bastion.example.com".into(),
                port: 22,
                username: "artie".into(),
            },
        };

        let tunnel = SshTunnel::from(wire_model.clone());
        assert_eq!(tunnel.public_key.as_deref(), Some("ssh-ed25519 AAAA artie"));
        assert_eq!(wire::SshTunnel::try_from(&tunnel).unwrap(), wire_model);
    }

    #[test]
    fn unset_server_fields_read_as_none() {
        let wire_model = wire::PrivateLinkConnection {
            uuid: Uuid::new_v4(),
            status: String::new(),
            dns_entry: String::new(),
            base: wire::BasePrivateLinkConnection {
                name: "vpc".into(),
                data_plane_name: "aws-us-east-1".into(),
                vpc_service_name: "com.amazonaws.vpce.us-east-1.vpce-svc-123".into(),
                aws_account_id: None,
                region: "us-east-1".into(),
                vpc_endpoint_id: None,
            },
        };

        let link = PrivateLinkConnection::from(wire_model);
        assert_eq!(link.status, None);
        assert_eq!(link.dns_entry, None);
    }
}
