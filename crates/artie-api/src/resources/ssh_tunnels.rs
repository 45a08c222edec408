// SSH tunnel endpoints

use tracing::debug;
use uuid::Uuid;

use crate::client::ArtieClient;
use crate::error::Error;
use crate::types::{BaseSshTunnel, ItemList, SshTunnel};

const BASE: &str = "ssh-tunnels";

pub struct SshTunnelClient<'a> {
    client: &'a ArtieClient,
}

impl<'a> SshTunnelClient<'a> {
    pub(crate) fn new(client: &'a ArtieClient) -> Self {
        Self { client }
    }

    /// `GET ssh-tunnels`
    pub async fn list(&self) -> Result<Vec<SshTunnel>, Error> {
        let list: ItemList<SshTunnel> = self.client.get(BASE).await?;
        Ok(list.items)
    }

    /// `GET ssh-tunnels/{id}`
    pub async fn get(&self, id: &Uuid) -> Result<SshTunnel, Error> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    /// `POST ssh-tunnels`
    pub async fn create(&self, tunnel: &BaseSshTunnel) -> Result<SshTunnel, Error> {
        debug!(host = %tunnel.host, port = tunnel.port, "creating ssh tunnel");
        self.client.post(BASE, tunnel).await
    }

    /// `POST ssh-tunnels/{id}`
    pub async fn update(&self, tunnel: &SshTunnel) -> Result<SshTunnel, Error> {
        debug!(uuid = %tunnel.uuid, "updating ssh tunnel");
        self.client
            .post(&format!("{BASE}/{}", tunnel.uuid), tunnel)
            .await
    }

    /// `DELETE ssh-tunnels/{id}`
    pub async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deleting ssh tunnel");
        self.client.delete(&format!("{BASE}/{id}")).await
    }
}
