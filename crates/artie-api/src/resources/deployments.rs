// Legacy deployment endpoints
//
// `POST deployments` only accepts the source type; everything else has to
// be filled in with a follow-up `update`. Callers own that two-step
// sequence and whatever state is left behind if the second call fails.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::client::ArtieClient;
use crate::error::Error;
use crate::types::{Deployment, DeploymentEnvelope};

const BASE: &str = "deployments";

#[derive(Serialize)]
struct CreateBody<'a> {
    source: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    deploy: &'a Deployment,
    update_deployment_only: bool,
}

pub struct DeploymentClient<'a> {
    client: &'a ArtieClient,
}

impl<'a> DeploymentClient<'a> {
    pub(crate) fn new(client: &'a ArtieClient) -> Self {
        Self { client }
    }

    /// `GET deployments/{id}`
    pub async fn get(&self, id: &Uuid) -> Result<Deployment, Error> {
        let envelope: DeploymentEnvelope = self.client.get(&format!("{BASE}/{id}")).await?;
        Ok(envelope.deploy)
    }

    /// `POST deployments` with `{"source": "<type>"}`.
    ///
    /// The returned deployment is a bare shell; follow up with
    /// [`update`](Self::update) to provision it.
    pub async fn create(&self, source_type: &str) -> Result<Deployment, Error> {
        debug!(source_type, "creating deployment");
        let envelope: DeploymentEnvelope = self
            .client
            .post(
                BASE,
                &CreateBody {
                    source: source_type,
                },
            )
            .await?;
        Ok(envelope.deploy)
    }

    /// `POST deployments/{id}` with `{"deploy": ..., "updateDeploymentOnly": true}`.
    pub async fn update(&self, deployment: &Deployment) -> Result<Deployment, Error> {
        debug!(uuid = %deployment.uuid, "updating deployment");
        let envelope: DeploymentEnvelope = self
            .client
            .post(
                &format!("{BASE}/{}", deployment.uuid),
                &UpdateBody {
                    deploy: deployment,
                    update_deployment_only: true,
                },
            )
            .await?;
        Ok(envelope.deploy)
    }

    /// `DELETE deployments/{id}`
    pub async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deleting deployment");
        self.client.delete(&format!("{BASE}/{id}")).await
    }
}
