use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePrivateLinkConnection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data_plane_name: String,
    #[serde(default)]
    pub vpc_service_name: String,
    #[serde(rename = "awsAccountID", default, skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(default)]
    pub region: String,
    #[serde(rename = "vpcEndpointID", default, skip_serializing_if = "Option::is_none")]
    pub vpc_endpoint_id: Option<String>,
}

/// Private-link connection as returned by the API. `status` and `dns_entry`
/// are computed server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateLinkConnection {
    pub uuid: Uuid,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub dns_entry: String,
    #[serde(flatten)]
    pub base: BasePrivateLinkConnection,
}
