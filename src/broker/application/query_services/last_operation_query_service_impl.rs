use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::broker::{
    domain::{
        model::{
            entities::last_operation::LastOperation,
            enums::broker_domain_error::BrokerDomainError,
            queries::last_operation_query::LastOperationQuery,
            value_objects::cluster_name::ClusterName,
        },
        services::last_operation_query_service::LastOperationQueryService,
    },
    infrastructure::atlas::repositories::atlas_cluster_repository::AtlasClusterRepository,
};

pub struct LastOperationQueryServiceImpl {
    cluster_repository: Arc<dyn AtlasClusterRepository>,
}

impl LastOperationQueryServiceImpl {
    pub fn new(cluster_repository: Arc<dyn AtlasClusterRepository>) -> Self {
        Self { cluster_repository }
    }
}

#[async_trait]
impl LastOperationQueryService for LastOperationQueryServiceImpl {
    async fn handle_last_operation(
        &self,
        query: LastOperationQuery,
    ) -> Result<LastOperation, BrokerDomainError> {
        let instance_id = query.instance_id().value();
        let operation = query.operation().as_str();
        debug!(instance_id, operation, "Fetching state of last operation");

        let cluster_name = ClusterName::from_instance_id(query.instance_id());
        let observation = self.cluster_repository.get_cluster(&cluster_name).await;
        let last_operation = LastOperation::derive(query.operation(), observation.as_ref());

        info!(
            instance_id,
            operation,
            state = last_operation.state().as_str(),
            description = last_operation.description(),
            "Found state of last operation"
        );

        Ok(last_operation)
    }
}
