use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::broker::{
    domain::{
        model::{
            commands::{
                deprovision_service_instance_command::DeprovisionServiceInstanceCommand,
                provision_service_instance_command::ProvisionServiceInstanceCommand,
                update_service_instance_command::UpdateServiceInstanceCommand,
            },
            entities::service_catalog::ServiceCatalog,
            enums::{broker_domain_error::BrokerDomainError, operation_kind::OperationKind},
            parameters::cluster_parameters::cluster_from_params,
            value_objects::cluster_name::ClusterName,
        },
        services::service_instance_command_service::ServiceInstanceCommandService,
    },
    infrastructure::atlas::repositories::atlas_cluster_repository::AtlasClusterRepository,
};

pub struct ServiceInstanceCommandServiceImpl {
    cluster_repository: Arc<dyn AtlasClusterRepository>,
    catalog: Arc<ServiceCatalog>,
}

impl ServiceInstanceCommandServiceImpl {
    pub fn new(
        cluster_repository: Arc<dyn AtlasClusterRepository>,
        catalog: Arc<ServiceCatalog>,
    ) -> Self {
        Self {
            cluster_repository,
            catalog,
        }
    }
}

#[async_trait]
impl ServiceInstanceCommandService for ServiceInstanceCommandServiceImpl {
    async fn handle_provision(
        &self,
        command: ProvisionServiceInstanceCommand,
    ) -> Result<OperationKind, BrokerDomainError> {
        let instance_id = command.instance_id().value();
        info!(
            instance_id,
            service_id = command.service_id(),
            plan_id = command.plan_id(),
            "Provisioning service instance"
        );

        let service = self.catalog.find_service(command.service_id())?;
        let plan = service.find_plan(command.plan_id())?;

        let cluster_name = ClusterName::from_instance_id(command.instance_id());
        let definition = cluster_from_params(
            command.raw_parameters(),
            &cluster_name,
            service.provider_name(),
            Some(plan),
        )?;

        self.cluster_repository
            .create_cluster(&definition)
            .await
            .map_err(|e| {
                error!(instance_id, cluster_name = cluster_name.value(), error = %e, "Failed to create Atlas cluster");
                e
            })?;

        info!(
            instance_id,
            cluster_name = cluster_name.value(),
            "Started Atlas cluster creation"
        );

        Ok(OperationKind::Provision)
    }

    async fn handle_update(
        &self,
        command: UpdateServiceInstanceCommand,
    ) -> Result<OperationKind, BrokerDomainError> {
        let instance_id = command.instance_id().value();
        info!(
            instance_id,
            service_id = command.service_id(),
            plan_id = ?command.plan_id(),
            "Updating service instance"
        );

        let service = self.catalog.find_service(command.service_id())?;
        let plan = command
            .plan_id()
            .map(|plan_id| service.find_plan(plan_id))
            .transpose()?;

        let cluster_name = ClusterName::from_instance_id(command.instance_id());
        let definition = cluster_from_params(
            command.raw_parameters(),
            &cluster_name,
            service.provider_name(),
            plan,
        )?;

        self.cluster_repository
            .update_cluster(&cluster_name, &definition)
            .await
            .map_err(|e| {
                error!(instance_id, cluster_name = cluster_name.value(), error = %e, "Failed to update Atlas cluster");
                e
            })?;

        info!(
            instance_id,
            cluster_name = cluster_name.value(),
            "Started Atlas cluster update"
        );

        Ok(OperationKind::Update)
    }

    async fn handle_deprovision(
        &self,
        command: DeprovisionServiceInstanceCommand,
    ) -> Result<OperationKind, BrokerDomainError> {
        let instance_id = command.instance_id().value();
        info!(instance_id, "Deprovisioning service instance");

        let cluster_name = ClusterName::from_instance_id(command.instance_id());

        self.cluster_repository
            .delete_cluster(&cluster_name)
            .await
            .map_err(|e| {
                error!(instance_id, cluster_name = cluster_name.value(), error = %e, "Failed to delete Atlas cluster");
                e
            })?;

        info!(
            instance_id,
            cluster_name = cluster_name.value(),
            "Started Atlas cluster deletion"
        );

        Ok(OperationKind::Deprovision)
    }
}
