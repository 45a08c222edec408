// Pipeline endpoints
//
// Reads come back wrapped in `{"pipeline": ...}`; updates are sent wrapped
// with `updatePipelineOnly` so saving a config change does not redeploy.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::client::ArtieClient;
use crate::error::Error;
use crate::types::{
    BasePipeline, ItemList, Pipeline, PipelineEnvelope, ValidationOutcome, ValidationResponse,
};

const BASE: &str = "pipelines";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    pipeline: &'a Pipeline,
    update_pipeline_only: bool,
}

pub struct PipelineClient<'a> {
    client: &'a ArtieClient,
}

impl<'a> PipelineClient<'a> {
    pub(crate) fn new(client: &'a ArtieClient) -> Self {
        Self { client }
    }

    /// `GET pipelines`
    pub async fn list(&self) -> Result<Vec<Pipeline>, Error> {
        let list: ItemList<Pipeline> = self.client.get(BASE).await?;
        Ok(list.items)
    }

    /// `GET pipelines/{id}` (unwraps the `pipeline` envelope).
    pub async fn get(&self, id: &Uuid) -> Result<Pipeline, Error> {
        let envelope: PipelineEnvelope = self.client.get(&format!("{BASE}/{id}")).await?;
        Ok(envelope.pipeline)
    }

    /// `POST pipelines`
    pub async fn create(&self, pipeline: &BasePipeline) -> Result<Pipeline, Error> {
        debug!(name = %pipeline.name, tables = pipeline.tables.len(), "creating pipeline");
        self.client.post(BASE, pipeline).await
    }

    /// `POST pipelines/{id}` with `{"pipeline": ..., "updatePipelineOnly": true}`.
    pub async fn update(&self, pipeline: &Pipeline) -> Result<Pipeline, Error> {
        debug!(uuid = %pipeline.uuid, "updating pipeline");
        self.client
            .post(
                &format!("{BASE}/{}", pipeline.uuid),
                &UpdateBody {
                    pipeline,
                    update_pipeline_only: true,
                },
            )
            .await
    }

    /// `DELETE pipelines/{id}`
    pub async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deleting pipeline");
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    /// `POST pipelines/{id}/start` (no body).
    pub async fn start(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "starting pipeline");
        self.client.post_empty(&format!("{BASE}/{id}/start")).await
    }

    /// `POST pipelines/{id}/deactivate` (no body).
    pub async fn deactivate(&self, id: &Uuid) -> Result<(), Error> {
        debug!(uuid = %id, "deactivating pipeline");
        self.client
            .post_empty(&format!("{BASE}/{id}/deactivate"))
            .await
    }

    /// `POST pipelines/validate-source`: check the pipeline's source side
    /// before it is created or updated.
    pub async fn validate_source(
        &self,
        pipeline: &BasePipeline,
    ) -> Result<ValidationOutcome, Error> {
        debug!(name = %pipeline.name, "validating pipeline source");
        let resp: ValidationResponse = self
            .client
            .post(&format!("{BASE}/validate-source"), pipeline)
            .await?;
        Ok(resp.into())
    }

    /// `POST pipelines/validate-destination`
    pub async fn validate_destination(
        &self,
        pipeline: &BasePipeline,
    ) -> Result<ValidationOutcome, Error> {
        debug!(name = %pipeline.name, "validating pipeline destination");
        let resp: ValidationResponse = self
            .client
            .post(&format!("{BASE}/validate-destination"), pipeline)
            .await?;
        Ok(resp.into())
    }
}
