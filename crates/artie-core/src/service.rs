// ── Resource service ──
//
// Domain-level CRUD over the API. Each method translates the domain model
// into its wire shape, performs exactly one API call (two for deployment
// creation), and translates the response back. No state is held between
// calls, so a service can be cloned into as many tasks as needed.

use artie_api::types as wire;
use artie_api::{ArtieClient, ClientConfig, ValidationOutcome};
use tracing::debug;
use uuid::Uuid;

use crate::error::CoreError;
use crate::model::{
    Connector, Deployment, Destination, Pipeline, PrivateLinkConnection, SourceReader, SshTunnel,
};

fn uuid_for(
    uuid: Option<Uuid>,
    resource: &'static str,
    operation: &'static str,
) -> Result<Uuid, CoreError> {
    uuid.ok_or(CoreError::MissingUuid {
        resource,
        operation,
    })
}

/// Domain-typed facade over [`ArtieClient`].
#[derive(Debug, Clone)]
pub struct ArtieService {
    client: ArtieClient,
}

impl ArtieService {
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        Ok(Self {
            client: ArtieClient::new(config)?,
        })
    }

    pub fn from_client(client: ArtieClient) -> Self {
        Self { client }
    }

    /// The underlying wire-level client.
    pub fn client(&self) -> &ArtieClient {
        &self.client
    }

    // ── Connectors ───────────────────────────────────────────────────

    pub async fn list_connectors(&self) -> Result<Vec<Connector>, CoreError> {
        self.client
            .connectors()
            .list()
            .await?
            .into_iter()
            .map(Connector::try_from)
            .collect()
    }

    pub async fn get_connector(&self, id: &Uuid) -> Result<Connector, CoreError> {
        self.client.connectors().get(id).await?.try_into()
    }

    pub async fn create_connector(&self, connector: &Connector) -> Result<Connector, CoreError> {
        let body = wire::BaseConnector::try_from(connector)?;
        debug!(connector_type = %body.connector_type, "creating connector");
        self.client.connectors().create(&body).await?.try_into()
    }

    pub async fn update_connector(&self, connector: &Connector) -> Result<Connector, CoreError> {
        let body = wire::Connector::try_from(connector)?;
        self.client.connectors().update(&body).await?.try_into()
    }

    pub async fn delete_connector(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.connectors().delete(id).await?)
    }

    /// Ask the data plane to connect with these settings. The connector
    /// does not need to exist yet.
    pub async fn test_connector(
        &self,
        connector: &Connector,
    ) -> Result<ValidationOutcome, CoreError> {
        let body = wire::BaseConnector::try_from(connector)?;
        Ok(self.client.connectors().test_connection(&body).await?)
    }

    // ── Destinations ─────────────────────────────────────────────────

    pub async fn list_destinations(&self) -> Result<Vec<Destination>, CoreError> {
        self.client
            .destinations()
            .list()
            .await?
            .into_iter()
            .map(Destination::try_from)
            .collect()
    }

    pub async fn get_destination(&self, id: &Uuid) -> Result<Destination, CoreError> {
        self.client.destinations().get(id).await?.try_into()
    }

    pub async fn create_destination(
        &self,
        destination: &Destination,
    ) -> Result<Destination, CoreError> {
        let body = wire::BaseDestination::try_from(destination)?;
        debug!(destination_type = %body.destination_type, "creating destination");
        self.client.destinations().create(&body).await?.try_into()
    }

    pub async fn update_destination(
        &self,
        destination: &Destination,
    ) -> Result<Destination, CoreError> {
        let body = wire::Destination::try_from(destination)?;
        self.client.destinations().update(&body).await?.try_into()
    }

    pub async fn delete_destination(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.destinations().delete(id).await?)
    }

    pub async fn test_destination(
        &self,
        destination: &Destination,
    ) -> Result<ValidationOutcome, CoreError> {
        let body = wire::BaseDestination::try_from(destination)?;
        Ok(self.client.destinations().test_connection(&body).await?)
    }

    // ── Source readers ───────────────────────────────────────────────

    pub async fn list_source_readers(&self) -> Result<Vec<SourceReader>, CoreError> {
        self.client
            .source_readers()
            .list()
            .await?
            .into_iter()
            .map(SourceReader::try_from)
            .collect()
    }

    pub async fn get_source_reader(&self, id: &Uuid) -> Result<SourceReader, CoreError> {
        self.client.source_readers().get(id).await?.try_into()
    }

    pub async fn create_source_reader(
        &self,
        reader: &SourceReader,
    ) -> Result<SourceReader, CoreError> {
        let body = wire::BaseSourceReader::from(reader);
        self.client.source_readers().create(&body).await?.try_into()
    }

    pub async fn update_source_reader(
        &self,
        reader: &SourceReader,
    ) -> Result<SourceReader, CoreError> {
        let body = wire::SourceReader::try_from(reader)?;
        self.client.source_readers().update(&body).await?.try_into()
    }

    pub async fn delete_source_reader(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.source_readers().delete(id).await?)
    }

    // ── Pipelines ────────────────────────────────────────────────────

    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>, CoreError> {
        let pipelines = self.client.pipelines().list().await?;
        Ok(pipelines.into_iter().map(Pipeline::from).collect())
    }

    pub async fn get_pipeline(&self, id: &Uuid) -> Result<Pipeline, CoreError> {
        Ok(self.client.pipelines().get(id).await?.into())
    }

    pub async fn create_pipeline(&self, pipeline: &Pipeline) -> Result<Pipeline, CoreError> {
        let body = wire::BasePipeline::from(pipeline);
        Ok(self.client.pipelines().create(&body).await?.into())
    }

    pub async fn update_pipeline(&self, pipeline: &Pipeline) -> Result<Pipeline, CoreError> {
        let body = wire::Pipeline::try_from(pipeline)?;
        Ok(self.client.pipelines().update(&body).await?.into())
    }

    pub async fn delete_pipeline(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.pipelines().delete(id).await?)
    }

    /// Activate a created pipeline.
    ///
    /// Refused locally when neither the source reader nor the destination
    /// is set.
    pub async fn start_pipeline(&self, pipeline: &Pipeline) -> Result<(), CoreError> {
        let id = uuid_for(pipeline.uuid, "pipeline", "start")?;
        if pipeline.source_reader_uuid.is_none() && pipeline.destination_uuid.is_none() {
            return Err(CoreError::Validation {
                message: format!(
                    "pipeline {id} needs a source reader or destination before it can start"
                ),
            });
        }
        Ok(self.client.pipelines().start(&id).await?)
    }

    pub async fn deactivate_pipeline(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.pipelines().deactivate(id).await?)
    }

    /// Check the source side of a pipeline before create or update.
    pub async fn validate_pipeline_source(
        &self,
        pipeline: &Pipeline,
    ) -> Result<ValidationOutcome, CoreError> {
        let body = wire::BasePipeline::from(pipeline);
        Ok(self.client.pipelines().validate_source(&body).await?)
    }

    /// Check the destination side of a pipeline before create or update.
    pub async fn validate_pipeline_destination(
        &self,
        pipeline: &Pipeline,
    ) -> Result<ValidationOutcome, CoreError> {
        let body = wire::BasePipeline::from(pipeline);
        Ok(self.client.pipelines().validate_destination(&body).await?)
    }

    // ── SSH tunnels ──────────────────────────────────────────────────

    pub async fn list_ssh_tunnels(&self) -> Result<Vec<SshTunnel>, CoreError> {
        let tunnels = self.client.ssh_tunnels().list().await?;
        Ok(tunnels.into_iter().map(SshTunnel::from).collect())
    }

    pub async fn get_ssh_tunnel(&self, id: &Uuid) -> Result<SshTunnel, CoreError> {
        Ok(self.client.ssh_tunnels().get(id).await?.into())
    }

    pub async fn create_ssh_tunnel(&self, tunnel: &SshTunnel) -> Result<SshTunnel, CoreError> {
        let body = wire::BaseSshTunnel::from(tunnel);
        Ok(self.client.ssh_tunnels().create(&body).await?.into())
    }

    pub async fn update_ssh_tunnel(&self, tunnel: &SshTunnel) -> Result<SshTunnel, CoreError> {
        let body = wire::SshTunnel::try_from(tunnel)?;
        Ok(self.client.ssh_tunnels().update(&body).await?.into())
    }

    pub async fn delete_ssh_tunnel(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.ssh_tunnels().delete(id).await?)
    }

    // ── PrivateLink connections ──────────────────────────────────────

    pub async fn list_private_links(&self) -> Result<Vec<PrivateLinkConnection>, CoreError> {
        let links = self.client.private_links().list().await?;
        Ok(links.into_iter().map(PrivateLinkConnection::from).collect())
    }

    pub async fn get_private_link(&self, id: &Uuid) -> Result<PrivateLinkConnection, CoreError> {
        Ok(self.client.private_links().get(id).await?.into())
    }

    pub async fn create_private_link(
        &self,
        link: &PrivateLinkConnection,
    ) -> Result<PrivateLinkConnection, CoreError> {
        let body = wire::BasePrivateLinkConnection::from(link);
        Ok(self.client.private_links().create(&body).await?.into())
    }

    pub async fn update_private_link(
        &self,
        link: &PrivateLinkConnection,
    ) -> Result<PrivateLinkConnection, CoreError> {
        let body = wire::PrivateLinkConnection::try_from(link)?;
        Ok(self.client.private_links().update(&body).await?.into())
    }

    pub async fn delete_private_link(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.private_links().delete(id).await?)
    }

    // ── Deployments (legacy) ─────────────────────────────────────────

    pub async fn get_deployment(&self, id: &Uuid) -> Result<Deployment, CoreError> {
        self.client.deployments().get(id).await?.try_into()
    }

    /// Create a deployment and fill it in.
    ///
    /// The API only takes the source type on create, so this is a create
    /// followed by an update. If the update fails the empty shell stays
    /// behind and its UUID is logged at debug level.
    pub async fn create_deployment(
        &self,
        deployment: &Deployment,
    ) -> Result<Deployment, CoreError> {
        let shell = self
            .client
            .deployments()
            .create(deployment.source_type.as_str())
            .await?;
        debug!(uuid = %shell.uuid, "deployment shell created, filling in");

        let mut body = wire::Deployment::try_from(&Deployment {
            uuid: Some(shell.uuid),
            ..deployment.clone()
        })?;
        if body.status.is_empty() {
            body.status = shell.status;
        }

        match self.client.deployments().update(&body).await {
            Ok(updated) => updated.try_into(),
            Err(e) => {
                debug!(uuid = %shell.uuid, error = %e, "deployment update failed after create");
                Err(e.into())
            }
        }
    }

    pub async fn delete_deployment(&self, id: &Uuid) -> Result<(), CoreError> {
        Ok(self.client.deployments().delete(id).await?)
    }
}
