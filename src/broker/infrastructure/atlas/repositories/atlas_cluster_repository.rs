use async_trait::async_trait;

use crate::broker::domain::model::{
    entities::cluster::Cluster, enums::backend_error::BackendError,
    value_objects::cluster_name::ClusterName,
};

#[async_trait]
pub trait AtlasClusterRepository: Send + Sync {
    async fn get_cluster(&self, name: &ClusterName) -> Result<Cluster, BackendError>;

    async fn create_cluster(&self, definition: &Cluster) -> Result<Cluster, BackendError>;

    async fn update_cluster(
        &self,
        name: &ClusterName,
        definition: &Cluster,
    ) -> Result<Cluster, BackendError>;

    async fn delete_cluster(&self, name: &ClusterName) -> Result<(), BackendError>;
}
