use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSshTunnel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data_plane_name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
}

/// SSH tunnel as returned by the API. `public_key` is generated server-side
/// and must be installed on the bastion host by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshTunnel {
    pub uuid: Uuid,
    #[serde(default)]
    pub public_key: String,
    #[serde(flatten)]
    pub base: BaseSshTunnel,
}
