use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::broker::{
    domain::model::{
        entities::cluster::Cluster, enums::backend_error::BackendError,
        value_objects::cluster_name::ClusterName,
    },
    infrastructure::atlas::repositories::{
        atlas_cluster_repository::AtlasClusterRepository,
        http::atlas_http_client::{AtlasHttpClient, encode_path_segment},
    },
};

pub struct ReqwestAtlasClusterRepositoryImpl {
    client: Arc<AtlasHttpClient>,
}

impl ReqwestAtlasClusterRepositoryImpl {
    pub fn new(client: Arc<AtlasHttpClient>) -> Self {
        Self { client }
    }
}

/// A 404 only means the cluster is gone when Atlas says so, or says nothing.
/// `GROUP_NOT_FOUND` and other coded 404s stay `Api` errors.
fn map_cluster_error(name: &str, error: BackendError) -> BackendError {
    match error {
        BackendError::Api {
            status, error_code, ..
        } if error_code == "CLUSTER_NOT_FOUND" || (status == 404 && error_code.is_empty()) => {
            BackendError::ClusterNotFound(name.to_string())
        }
        BackendError::Api { error_code, .. } if error_code == "DUPLICATE_CLUSTER_NAME" => {
            BackendError::ClusterAlreadyExists(name.to_string())
        }
        other => other,
    }
}

#[async_trait]
impl AtlasClusterRepository for ReqwestAtlasClusterRepositoryImpl {
    async fn get_cluster(&self, name: &ClusterName) -> Result<Cluster, BackendError> {
        let request = self.client.request(
            Method::GET,
            &format!("/clusters/{}", encode_path_segment(name.value())),
        );

        self.client
            .execute_json(request)
            .await
            .map_err(|error| map_cluster_error(name.value(), error))
    }

    async fn create_cluster(&self, definition: &Cluster) -> Result<Cluster, BackendError> {
        let request = self
            .client
            .request(Method::POST, "/clusters")
            .json(definition);

        self.client
            .execute_json(request)
            .await
            .map_err(|error| map_cluster_error(&definition.name, error))
    }

    async fn update_cluster(
        &self,
        name: &ClusterName,
        definition: &Cluster,
    ) -> Result<Cluster, BackendError> {
        let request = self
            .client
            .request(
                Method::PATCH,
                &format!("/clusters/{}", encode_path_segment(name.value())),
            )
            .json(definition);

        self.client
            .execute_json(request)
            .await
            .map_err(|error| map_cluster_error(name.value(), error))
    }

    async fn delete_cluster(&self, name: &ClusterName) -> Result<(), BackendError> {
        let request = self.client.request(
            Method::DELETE,
            &format!("/clusters/{}", encode_path_segment(name.value())),
        );

        self.client
            .execute(request)
            .await
            .map(|_| ())
            .map_err(|error| map_cluster_error(name.value(), error))
    }
}
