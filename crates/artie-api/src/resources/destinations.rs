// Destination endpoints
//
// Mirrors the connector endpoints, including the `ping` check.

use tracing::debug;
use uuid::Uuid;

use crate::client::ArtieClient;
use crate::error::Error;
use crate::types::{
    BaseDestination, Destination, ItemList, ValidationOutcome, ValidationResponse,
};

const BASE: &str = "destinations";

pub struct DestinationClient<'a> {
    client: &'a ArtieClient,
}

impl<'a> DestinationClient<'a> {
    pub(crate) fn new(client: &'a ArtieClient) -> Self {
        Self { client }
    }

    /// `GET destinations`
    pub async fn list(&self) -> Result<Vec<Destination>, Error> {
        let list: ItemList<Destination> = self.client.get(BASE).await?;
        Ok(list.items)
    }

    /// `GET destinations/{id}`
    pub async fn get(&self, id: &Uuid) -> Result<Destination, Error> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    /// `POST destinations`
    pub async fn create(&self, destination: &BaseDestination) -> Result<Destination, Error> {
        debug!(destination_type = %destination.destination_type, "creating destination");
        self.client.post(BASE, destination).await
    }

    /// `POST destinations/{id}`
    pub async fn update(&self, destination: &Destination) -> Result<Destination, Error> {
        debug!(uuid = %destination.uuid, "updating destination");
        self.client
            .post(&format!("{BASE}/{}", destination.uuid), destination)
            .await
    }

    /// `DELETE destinations/{id}`
    pub async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deleting destination");
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    /// `POST destinations/ping`
    pub async fn test_connection(
        &self,
        destination: &BaseDestination,
    ) -> Result<ValidationOutcome, Error> {
        debug!(destination_type = %destination.destination_type, "testing destination connection");
        let resp: ValidationResponse = self
            .client
            .post(&format!("{BASE}/ping"), destination)
            .await?;
        Ok(resp.into())
    }
}
