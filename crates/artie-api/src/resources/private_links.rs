// Private-link connection endpoints

use tracing::debug;
use uuid::Uuid;

use crate::client::ArtieClient;
use crate::error::Error;
use crate::types::{BasePrivateLinkConnection, ItemList, PrivateLinkConnection};

const BASE: &str = "privatelink-connections";

pub struct PrivateLinkClient<'a> {
    client: &'a ArtieClient,
}

impl<'a> PrivateLinkClient<'a> {
    pub(crate) fn new(client: &'a ArtieClient) -> Self {
        Self { client }
    }

    /// `GET privatelink-connections`
    pub async fn list(&self) -> Result<Vec<PrivateLinkConnection>, Error> {
        let list: ItemList<PrivateLinkConnection> = self.client.get(BASE).await?;
        Ok(list.items)
    }

    /// `GET privatelink-connections/{id}`
    pub async fn get(&self, id: &Uuid) -> Result<PrivateLinkConnection, Error> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    /// `POST privatelink-connections`
    pub async fn create(
        &self,
        link: &BasePrivateLinkConnection,
    ) -> Result<PrivateLinkConnection, Error> {
        debug!(vpc_service_name = %link.vpc_service_name, "creating private link connection");
        self.client.post(BASE, link).await
    }

    /// `POST privatelink-connections/{id}`
    pub async fn update(
        &self,
        link: &PrivateLinkConnection,
    ) -> Result<PrivateLinkConnection, Error> {
        debug!(uuid = %link.uuid, "updating private link connection");
        self.client
            .post(&format!("{BASE}/{}", link.uuid), link)
            .await
    }

    /// `DELETE privatelink-connections/{id}`
    pub async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deleting private link connection");
        self.client.delete(&format!("{BASE}/{id}")).await
    }
}
