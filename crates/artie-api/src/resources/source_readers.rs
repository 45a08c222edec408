// Source reader endpoints

use tracing::debug;
use uuid::Uuid;

use crate::client::ArtieClient;
use crate::error::Error;
use crate::types::{BaseSourceReader, ItemList, SourceReader};

const BASE: &str = "source-readers";

pub struct SourceReaderClient<'a> {
    client: &'a ArtieClient,
}

impl<'a> SourceReaderClient<'a> {
    pub(crate) fn new(client: &'a ArtieClient) -> Self {
        Self { client }
    }

    /// `GET source-readers`
    pub async fn list(&self) -> Result<Vec<SourceReader>, Error> {
        let list: ItemList<SourceReader> = self.client.get(BASE).await?;
        Ok(list.items)
    }

    /// `GET source-readers/{id}`
    pub async fn get(&self, id: &Uuid) -> Result<SourceReader, Error> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    /// `POST source-readers`
    pub async fn create(&self, reader: &BaseSourceReader) -> Result<SourceReader, Error> {
        debug!(connector_uuid = %reader.connector_uuid, "creating source reader");
        self.client.post(BASE, reader).await
    }

    /// `POST source-readers/{id}`
    pub async fn update(&self, reader: &SourceReader) -> Result<SourceReader, Error> {
        debug!(uuid = %reader.uuid, "updating source reader");
        self.client
            .post(&format!("{BASE}/{}", reader.uuid), reader)
            .await
    }

    /// `DELETE source-readers/{id}`
    pub async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deleting source reader");
        self.client.delete(&format!("{BASE}/{id}")).await
    }
}
