#![allow(clippy::unwrap_used)]
// End-to-end tests for `ArtieService` against a wiremock API.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use artie_core::artie_api::{ClientConfig, ValidationOutcome};
use artie_core::{
    ArtieService, Connector, ConnectorConfig, ConnectorType, CoreError, Deployment,
    DeploymentTable, Pipeline, SqlConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ArtieService) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(SecretString::from("arsk_test_key".to_string()))
        .with_endpoint(Url::parse(&server.uri()).unwrap());
    let service = ArtieService::new(&config).unwrap();
    (server, service)
}

fn postgres_connector(uuid: Option<Uuid>) -> Connector {
    Connector {
        uuid,
        label: "primary".into(),
        data_plane_name: "aws-us-east-1".into(),
        ssh_tunnel_uuid: None,
        config: ConnectorConfig::PostgreSql(SqlConfig {
            host: "db.internal".into(),
            snapshot_host: None,
            port: 5432,
            user: "artie".into(),
            password: "hunter2".into(),
        }),
    }
}

// ── Connectors ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_connector_sends_only_its_type_fields() {
    let (server, service) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/connectors"))
        .and(body_json(json!({
            "type": "postgresql",
            "label": "primary",
            "dataPlaneName": "aws-us-east-1",
            "config": {
                "host": "db.internal",
                "port": 5432,
                "user": "artie",
                "password": "hunter2"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": id,
            "type": "postgresql",
            "label": "primary",
            "dataPlaneName": "aws-us-east-1",
            "config": { "host": "db.internal", "port": 5432, "user": "artie" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = service
        .create_connector(&postgres_connector(None))
        .await
        .unwrap();

    assert_eq!(created.uuid, Some(id));
    assert_eq!(created.connector_type(), ConnectorType::PostgreSql);
    match created.config {
        ConnectorConfig::PostgreSql(c) => {
            assert_eq!(c.port, 5432);
            assert_eq!(c.password, "");
        }
        other => panic!("expected PostgreSql config, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_without_uuid_makes_no_request() {
    let (server, service) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service
        .update_connector(&postgres_connector(None))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::MissingUuid { resource: "connector", .. }));
}

#[tokio::test]
async fn test_unknown_connector_type_from_api_is_translation_error() {
    let (server, service) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/connectors/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": id,
            "type": "cassandra",
            "config": {}
        })))
        .mount(&server)
        .await;

    let err = service.get_connector(&id).await.unwrap_err();

    assert!(err.is_translation(), "got: {err:?}");
}

#[tokio::test]
async fn test_missing_connector_is_not_found() {
    let (server, service) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/connectors/{id}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = service.get_connector(&id).await.unwrap_err();

    assert!(err.is_not_found(), "got: {err:?}");
}

#[tokio::test]
async fn test_connector_test_reports_logical_failure() {
    let (server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/connectors/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": "password authentication failed" })),
        )
        .mount(&server)
        .await;

    let outcome = service
        .test_connector(&postgres_connector(None))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ValidationOutcome::Failed {
            message: "password authentication failed".into()
        }
    );
}

// ── Pipelines ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_pipeline_keys_tables() {
    let (server, service) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/pipelines/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pipeline": {
                "uuid": id,
                "name": "orders",
                "status": "draft",
                "tables": [
                    { "name": "orders", "schema": "public" },
                    { "name": "audit", "schema": "" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let pipeline = service.get_pipeline(&id).await.unwrap();

    let keys: Vec<&str> = pipeline.tables.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["public.orders", "audit"]);
    assert_eq!(pipeline.tables["audit"].exclude_columns, Some(vec![]));
}

#[tokio::test]
async fn test_start_pipeline_needs_source_or_destination() {
    let (server, service) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let pipeline = Pipeline {
        uuid: Some(Uuid::new_v4()),
        name: "orphan".into(),
        ..Pipeline::default()
    };
    let err = service.start_pipeline(&pipeline).await.unwrap_err();
    assert!(err.is_validation(), "got: {err:?}");

    let draft = Pipeline {
        uuid: None,
        destination_uuid: Some(Uuid::new_v4()),
        ..pipeline
    };
    let err = service.start_pipeline(&draft).await.unwrap_err();
    assert!(matches!(
        err,
        CoreError::MissingUuid {
            resource: "pipeline",
            operation: "start"
        }
    ));
}

#[tokio::test]
async fn test_start_pipeline_posts_to_start() {
    let (server, service) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/pipelines/{id}/start")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = Pipeline {
        uuid: Some(id),
        source_reader_uuid: Some(Uuid::new_v4()),
        ..Pipeline::default()
    };
    service.start_pipeline(&pipeline).await.unwrap();
}

// ── Deployments ─────────────────────────────────────────────────────

fn deployment() -> Deployment {
    Deployment {
        uuid: None,
        name: "inventory".into(),
        status: None,
        source_type: ConnectorType::MySql,
        tables: vec![DeploymentTable {
            name: "items".into(),
            schema: String::new(),
            enable_history_mode: false,
        }],
        destination_uuid: None,
        ssh_tunnel_uuid: None,
        last_updated_at: None,
    }
}

#[tokio::test]
async fn test_create_deployment_creates_then_updates() {
    let (server, service) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/deployments"))
        .and(body_json(json!({ "source": "mysql" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deploy": { "uuid": id, "status": "draft", "source": { "type": "mysql" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = json!({
        "uuid": id,
        "name": "inventory",
        "status": "draft",
        "source": {
            "type": "mysql",
            "tables": [{ "name": "items", "schema": "", "enableHistoryMode": false }]
        }
    });
    Mock::given(method("POST"))
        .and(path(format!("/deployments/{id}")))
        .and(body_json(json!({ "deploy": updated, "updateDeploymentOnly": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deploy": updated })))
        .expect(1)
        .mount(&server)
        .await;

    let created = service.create_deployment(&deployment()).await.unwrap();

    assert_eq!(created.uuid, Some(id));
    assert_eq!(created.status.as_deref(), Some("draft"));
    assert_eq!(created.tables.len(), 1);
}

#[tokio::test]
async fn test_create_deployment_surfaces_update_failure() {
    let (server, service) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deploy": { "uuid": id, "source": { "type": "mysql" } }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/deployments/{id}")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "bad table" })))
        .mount(&server)
        .await;

    let err = service.create_deployment(&deployment()).await.unwrap_err();

    match err {
        CoreError::Api(api) => assert_eq!(api.status(), Some(400)),
        other => panic!("expected API error, got: {other:?}"),
    }
}
