// Connector endpoints
//
// `connectors` plus the `connectors/ping` connectivity check.

use tracing::debug;
use uuid::Uuid;

use crate::client::ArtieClient;
use crate::error::Error;
use crate::types::{
    BaseConnector, Connector, ItemList, ValidationOutcome, ValidationResponse,
};

const BASE: &str = "connectors";

pub struct ConnectorClient<'a> {
    client: &'a ArtieClient,
}

impl<'a> ConnectorClient<'a> {
    pub(crate) fn new(client: &'a ArtieClient) -> Self {
        Self { client }
    }

    /// `GET connectors`
    pub async fn list(&self) -> Result<Vec<Connector>, Error> {
        let list: ItemList<Connector> = self.client.get(BASE).await?;
        Ok(list.items)
    }

    /// `GET connectors/{id}`: a missing connector is [`Error::NotFound`].
    pub async fn get(&self, id: &Uuid) -> Result<Connector, Error> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    /// `POST connectors`
    pub async fn create(&self, connector: &BaseConnector) -> Result<Connector, Error> {
        debug!(connector_type = %connector.connector_type, "creating connector");
        self.client.post(BASE, connector).await
    }

    /// `POST connectors/{id}`
    pub async fn update(&self, connector: &Connector) -> Result<Connector, Error> {
        debug!(uuid = %connector.uuid, "updating connector");
        self.client
            .post(&format!("{BASE}/{}", connector.uuid), connector)
            .await
    }

    /// `DELETE connectors/{id}`
    pub async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deleting connector");
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    /// `POST connectors/ping`: check that the data plane can reach the
    /// source with these credentials.
    ///
    /// A check that ran and failed comes back as
    /// [`ValidationOutcome::Failed`], not as an `Err`.
    pub async fn test_connection(
        &self,
        connector: &BaseConnector,
    ) -> Result<ValidationOutcome, Error> {
        debug!(connector_type = %connector.connector_type, "testing connector connection");
        let resp: ValidationResponse = self.client.post(&format!("{BASE}/ping"), connector).await?;
        Ok(resp.into())
    }
}
