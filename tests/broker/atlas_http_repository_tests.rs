use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use atlas_service_broker::broker::{
    domain::model::{
        entities::{
            cluster::{Cluster, ProviderSettings},
            database_user::DatabaseUser,
            last_operation::LastOperation,
        },
        enums::{
            backend_error::BackendError, cluster_state::ClusterState,
            last_operation_state::LastOperationState, operation_kind::OperationKind,
        },
    },
    infrastructure::atlas::repositories::{
        atlas_cluster_repository::AtlasClusterRepository,
        atlas_database_user_repository::AtlasDatabaseUserRepository,
        http::{
            atlas_http_client::{AtlasCredentials, AtlasHttpClient},
            reqwest_atlas_cluster_repository_impl::ReqwestAtlasClusterRepositoryImpl,
            reqwest_atlas_database_user_repository_impl::ReqwestAtlasDatabaseUserRepositoryImpl,
        },
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{delete, get, post},
};
use serde_json::{Value, json};

use crate::support::cluster_name_for;

const GROUP_ID: &str = "5f1a2b3c4d5e6f7a8b9c0d1e";

#[derive(Default)]
struct FakeAtlasState {
    clusters: HashMap<String, Value>,
    users: HashMap<String, Value>,
    authorization: Vec<String>,
    cluster_bodies: Vec<Value>,
    user_bodies: Vec<Value>,
    fail_with_server_error: bool,
    group_missing: bool,
    bare_not_found: bool,
}

type SharedState = Arc<Mutex<FakeAtlasState>>;

type FakeResponse = (StatusCode, Json<Value>);

fn atlas_error(status: StatusCode, error_code: &str, detail: &str) -> FakeResponse {
    (
        status,
        Json(json!({
            "error": status.as_u16(),
            "errorCode": error_code,
            "detail": detail,
            "reason": status.canonical_reason(),
        })),
    )
}

fn group_not_found() -> FakeResponse {
    atlas_error(
        StatusCode::NOT_FOUND,
        "GROUP_NOT_FOUND",
        "No group with that ID exists",
    )
}

fn record_authorization(state: &mut FakeAtlasState, headers: &HeaderMap) {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.authorization.push(value);
}

async fn get_cluster(
    State(state): State<SharedState>,
    Path((_group_id, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> FakeResponse {
    let mut state = state.lock().expect("mutex poisoned");
    record_authorization(&mut state, &headers);

    if state.fail_with_server_error {
        return atlas_error(StatusCode::INTERNAL_SERVER_ERROR, "UNEXPECTED_ERROR", "boom");
    }
    if state.group_missing {
        return group_not_found();
    }
    if state.bare_not_found {
        return (StatusCode::NOT_FOUND, Json(json!({})));
    }

    match state.clusters.get(&name) {
        Some(cluster) => (StatusCode::OK, Json(cluster.clone())),
        None => atlas_error(
            StatusCode::NOT_FOUND,
            "CLUSTER_NOT_FOUND",
            "No cluster with that name exists",
        ),
    }
}

async fn delete_cluster(
    State(state): State<SharedState>,
    Path((_group_id, name)): Path<(String, String)>,
) -> FakeResponse {
    let mut state = state.lock().expect("mutex poisoned");
    match state.clusters.get_mut(&name) {
        Some(cluster) => {
            cluster["stateName"] = json!("DELETING");
            (StatusCode::ACCEPTED, Json(json!({})))
        }
        None => atlas_error(
            StatusCode::NOT_FOUND,
            "CLUSTER_NOT_FOUND",
            "No cluster with that name exists",
        ),
    }
}

async fn create_cluster(
    State(state): State<SharedState>,
    Path(_group_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> FakeResponse {
    let mut state = state.lock().expect("mutex poisoned");
    record_authorization(&mut state, &headers);
    state.cluster_bodies.push(body.clone());

    let name = body["name"].as_str().unwrap_or_default().to_string();
    if state.clusters.contains_key(&name) {
        return atlas_error(
            StatusCode::CONFLICT,
            "DUPLICATE_CLUSTER_NAME",
            "A cluster with that name already exists",
        );
    }

    let mut cluster = body;
    cluster["stateName"] = json!("CREATING");
    cluster["srvAddress"] = json!(format!("mongodb+srv://{name}.abcde.mongodb.net"));
    state.clusters.insert(name, cluster.clone());

    (StatusCode::CREATED, Json(cluster))
}

async fn create_user(
    State(state): State<SharedState>,
    Path(_group_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> FakeResponse {
    let mut state = state.lock().expect("mutex poisoned");
    record_authorization(&mut state, &headers);
    state.user_bodies.push(body.clone());

    let username = body["username"].as_str().unwrap_or_default().to_string();
    if state.users.contains_key(&username) {
        return atlas_error(
            StatusCode::CONFLICT,
            "USER_ALREADY_EXISTS",
            "The specified user already exists",
        );
    }

    let mut user = body;
    if let Some(user) = user.as_object_mut() {
        user.remove("password");
    }
    state.users.insert(username, user.clone());

    (StatusCode::CREATED, Json(user))
}

async fn delete_user(
    State(state): State<SharedState>,
    Path((_group_id, _database, username)): Path<(String, String, String)>,
) -> FakeResponse {
    let mut state = state.lock().expect("mutex poisoned");
    if state.group_missing {
        return group_not_found();
    }

    match state.users.remove(&username) {
        Some(_) => (StatusCode::ACCEPTED, Json(json!({}))),
        None => atlas_error(
            StatusCode::NOT_FOUND,
            "USERNAME_NOT_FOUND",
            "No user with that name exists",
        ),
    }
}

struct FakeAtlas {
    state: SharedState,
    base_url: String,
}

impl FakeAtlas {
    async fn start() -> Self {
        let state = SharedState::default();
        let app = Router::new()
            .route("/api/atlas/v1.0/groups/:group_id/clusters", post(create_cluster))
            .route(
                "/api/atlas/v1.0/groups/:group_id/clusters/:name",
                get(get_cluster).delete(delete_cluster),
            )
            .route("/api/atlas/v1.0/groups/:group_id/databaseUsers", post(create_user))
            .route(
                "/api/atlas/v1.0/groups/:group_id/databaseUsers/:database/:username",
                delete(delete_user),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake atlas");
        let address = listener.local_addr().expect("local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake atlas");
        });

        Self {
            state,
            base_url: format!("http://{address}/api/atlas/v1.0"),
        }
    }

    fn client(&self, credentials: AtlasCredentials) -> Arc<AtlasHttpClient> {
        Arc::new(
            AtlasHttpClient::new(
                format!("{}/", self.base_url),
                GROUP_ID,
                credentials,
                Duration::from_secs(5),
            )
            .expect("client should build"),
        )
    }

    fn api_key_client(&self) -> Arc<AtlasHttpClient> {
        self.client(AtlasCredentials::ApiKey {
            public_key: "public".to_string(),
            private_key: "private".to_string(),
        })
    }

    fn authorization(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .authorization
            .clone()
    }
}

fn definition(name: &str) -> Cluster {
    Cluster {
        name: name.to_string(),
        disk_size_gb: Some(10.0),
        provider_settings: Some(ProviderSettings {
            provider_name: Some("AWS".to_string()),
            instance_size_name: Some("M10".to_string()),
            region_name: Some("US_EAST_1".to_string()),
            ..Default::default()
        }),
        srv_address: Some("should-not-be-sent".to_string()),
        state_name: ClusterState::Idle,
        ..Default::default()
    }
}

#[tokio::test]
async fn create_cluster_posts_definition_without_read_only_fields() {
    let atlas = FakeAtlas::start().await;
    let repository = ReqwestAtlasClusterRepositoryImpl::new(atlas.api_key_client());

    let created = repository
        .create_cluster(&definition("instance-1"))
        .await
        .expect("create should succeed");

    assert_eq!(created.state_name, ClusterState::Creating);
    assert_eq!(
        created.srv_address.as_deref(),
        Some("mongodb+srv://instance-1.abcde.mongodb.net")
    );

    let bodies = atlas.state.lock().expect("mutex poisoned").cluster_bodies.clone();
    assert_eq!(
        bodies,
        vec![json!({
            "name": "instance-1",
            "diskSizeGB": 10.0,
            "providerSettings": {
                "providerName": "AWS",
                "instanceSizeName": "M10",
                "regionName": "US_EAST_1"
            }
        })]
    );
    assert_eq!(atlas.authorization(), vec!["Basic cHVibGljOnByaXZhdGU=".to_string()]);
}

#[tokio::test]
async fn duplicate_cluster_maps_to_already_exists() {
    let atlas = FakeAtlas::start().await;
    let repository = ReqwestAtlasClusterRepositoryImpl::new(atlas.api_key_client());
    repository
        .create_cluster(&definition("instance-1"))
        .await
        .expect("first create should succeed");

    let result = repository.create_cluster(&definition("instance-1")).await;

    assert!(matches!(result, Err(BackendError::ClusterAlreadyExists(ref name)) if name == "instance-1"));
}

#[tokio::test]
async fn get_cluster_reads_state_and_maps_missing_clusters() {
    let atlas = FakeAtlas::start().await;
    let repository = ReqwestAtlasClusterRepositoryImpl::new(atlas.api_key_client());
    let name = cluster_name_for("instance-1");

    let missing = repository.get_cluster(&name).await;
    assert!(matches!(missing, Err(BackendError::ClusterNotFound(_))));

    repository
        .create_cluster(&definition(name.value()))
        .await
        .expect("create should succeed");
    let cluster = repository.get_cluster(&name).await.expect("cluster exists");
    assert_eq!(cluster.state_name, ClusterState::Creating);

    repository
        .delete_cluster(&name)
        .await
        .expect("delete should succeed");
    let cluster = repository.get_cluster(&name).await.expect("cluster exists");
    assert_eq!(cluster.state_name, ClusterState::Deleting);
}

#[tokio::test]
async fn unexpected_atlas_errors_keep_status_and_code() {
    let atlas = FakeAtlas::start().await;
    atlas.state.lock().expect("mutex poisoned").fail_with_server_error = true;
    let repository = ReqwestAtlasClusterRepositoryImpl::new(atlas.api_key_client());

    let result = repository.get_cluster(&cluster_name_for("instance-1")).await;

    match result {
        Err(BackendError::Api {
            status,
            error_code,
            detail,
        }) => {
            assert_eq!(status, 500);
            assert_eq!(error_code, "UNEXPECTED_ERROR");
            assert_eq!(detail, "boom");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_atlas_is_a_transport_error() {
    let client = Arc::new(
        AtlasHttpClient::new(
            "http://127.0.0.1:9/api/atlas/v1.0",
            GROUP_ID,
            AtlasCredentials::AccessToken("token".to_string()),
            Duration::from_secs(2),
        )
        .expect("client should build"),
    );
    let repository = ReqwestAtlasClusterRepositoryImpl::new(client);

    let result = repository.get_cluster(&cluster_name_for("instance-1")).await;

    assert!(matches!(result, Err(BackendError::Transport(_))));
}

#[tokio::test]
async fn database_users_are_created_in_the_project_and_deleted_by_name() {
    let atlas = FakeAtlas::start().await;
    let client = atlas.client(AtlasCredentials::AccessToken("service-token".to_string()));
    let repository = ReqwestAtlasDatabaseUserRepositoryImpl::new(client);
    let user = DatabaseUser {
        username: "binding-1".to_string(),
        password: "secret".to_string(),
        database_name: "admin".to_string(),
        ..Default::default()
    };

    let created = repository
        .create_user(&user)
        .await
        .expect("create should succeed");
    assert_eq!(created.username, "binding-1");
    assert!(created.password.is_empty());

    let body = atlas.state.lock().expect("mutex poisoned").user_bodies[0].clone();
    assert_eq!(body["groupId"], GROUP_ID);
    assert_eq!(body["password"], "secret");
    assert_eq!(atlas.authorization(), vec!["Bearer service-token".to_string()]);

    let duplicate = repository.create_user(&user).await;
    assert!(matches!(duplicate, Err(BackendError::UserAlreadyExists(_))));

    repository
        .delete_user("binding-1")
        .await
        .expect("delete should succeed");
    let missing = repository.delete_user("binding-1").await;
    assert!(matches!(missing, Err(BackendError::UserNotFound(ref name)) if name == "binding-1"));
}

#[tokio::test]
async fn missing_project_is_not_mistaken_for_a_deleted_cluster() {
    let atlas = FakeAtlas::start().await;
    atlas.state.lock().expect("mutex poisoned").group_missing = true;
    let repository = ReqwestAtlasClusterRepositoryImpl::new(atlas.api_key_client());

    let result = repository.get_cluster(&cluster_name_for("instance-1")).await;

    let error = result.expect_err("project does not exist");
    assert!(matches!(
        error,
        BackendError::Api { status: 404, ref error_code, .. } if error_code == "GROUP_NOT_FOUND"
    ));
    let last_operation = LastOperation::derive(OperationKind::Deprovision, Err(&error));
    assert_eq!(last_operation.state(), LastOperationState::Failed);
}

#[tokio::test]
async fn missing_project_is_not_mistaken_for_a_deleted_user() {
    let atlas = FakeAtlas::start().await;
    atlas.state.lock().expect("mutex poisoned").group_missing = true;
    let repository = ReqwestAtlasDatabaseUserRepositoryImpl::new(atlas.api_key_client());

    let result = repository.delete_user("binding-1").await;

    assert!(matches!(
        result,
        Err(BackendError::Api { status: 404, ref error_code, .. }) if error_code == "GROUP_NOT_FOUND"
    ));
}

#[tokio::test]
async fn not_found_without_an_error_code_means_the_cluster_is_gone() {
    let atlas = FakeAtlas::start().await;
    atlas.state.lock().expect("mutex poisoned").bare_not_found = true;
    let repository = ReqwestAtlasClusterRepositoryImpl::new(atlas.api_key_client());

    let result = repository.get_cluster(&cluster_name_for("instance-1")).await;

    assert!(matches!(result, Err(BackendError::ClusterNotFound(ref name)) if name == "instance-1"));
}
