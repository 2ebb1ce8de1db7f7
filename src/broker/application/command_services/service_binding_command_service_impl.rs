use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::broker::{
    domain::{
        model::{
            commands::{
                bind_service_command::BindServiceCommand,
                unbind_service_command::UnbindServiceCommand,
            },
            entities::{binding_credentials::BindingCredentials, service_catalog::ServiceCatalog},
            enums::broker_domain_error::BrokerDomainError,
            parameters::{
                connection_string_parameters::ConnectionStringParameters,
                user_parameters::user_from_params,
            },
            value_objects::{
                binding_password::BindingPassword, cluster_name::ClusterName,
                connection_string::ConnectionString,
            },
        },
        services::service_binding_command_service::ServiceBindingCommandService,
    },
    infrastructure::atlas::repositories::{
        atlas_cluster_repository::AtlasClusterRepository,
        atlas_database_user_repository::AtlasDatabaseUserRepository,
    },
};

pub struct ServiceBindingCommandServiceImpl {
    cluster_repository: Arc<dyn AtlasClusterRepository>,
    user_repository: Arc<dyn AtlasDatabaseUserRepository>,
    catalog: Arc<ServiceCatalog>,
}

impl ServiceBindingCommandServiceImpl {
    pub fn new(
        cluster_repository: Arc<dyn AtlasClusterRepository>,
        user_repository: Arc<dyn AtlasDatabaseUserRepository>,
        catalog: Arc<ServiceCatalog>,
    ) -> Self {
        Self {
            cluster_repository,
            user_repository,
            catalog,
        }
    }
}

#[async_trait]
impl ServiceBindingCommandService for ServiceBindingCommandServiceImpl {
    /// Every local step that can fail runs before the Atlas user is created,
    /// so a failed bind never leaves an orphaned user behind.
    async fn handle_bind(
        &self,
        command: BindServiceCommand,
    ) -> Result<BindingCredentials, BrokerDomainError> {
        let instance_id = command.instance_id().value();
        let binding_id = command.binding_id().value();
        info!(instance_id, binding_id, "Creating binding");

        // Bindings don't use the service or plan, but both must be in the catalog.
        let service = self.catalog.find_service(command.service_id())?;
        service.find_plan(command.plan_id())?;

        let cluster_name = ClusterName::from_instance_id(command.instance_id());
        let cluster = self
            .cluster_repository
            .get_cluster(&cluster_name)
            .await
            .map_err(|e| {
                error!(instance_id, error = %e, "Failed to get existing cluster");
                e
            })?;

        let password = BindingPassword::generate().map_err(|e| {
            error!(instance_id, binding_id, error = %e, "Failed to generate password");
            e
        })?;

        let user = user_from_params(command.binding_id(), &password, command.raw_parameters())?;
        let connection_string_parameters =
            ConnectionStringParameters::from_params(command.raw_parameters())?;
        debug!(
            skip_credentials = connection_string_parameters.skip_credentials,
            database = %connection_string_parameters.database,
            format = ?connection_string_parameters.format,
            "Read connection string parameters"
        );

        let connection_string = ConnectionString::build(
            &connection_string_parameters,
            &cluster,
            binding_id,
            password.value(),
        )
        .map_err(|e| {
            error!(instance_id, binding_id, error = %e, "Couldn't build connection string");
            e
        })?;

        self.user_repository.create_user(&user).await.map_err(|e| {
            error!(instance_id, binding_id, error = %e, "Failed to create Atlas database user");
            e
        })?;

        info!(instance_id, binding_id, "Successfully created Atlas database user");

        Ok(BindingCredentials::new(
            binding_id.to_string(),
            password,
            cluster.srv_address.clone().unwrap_or_default(),
            connection_string,
        ))
    }

    async fn handle_unbind(&self, command: UnbindServiceCommand) -> Result<(), BrokerDomainError> {
        let instance_id = command.instance_id().value();
        let binding_id = command.binding_id().value();
        info!(instance_id, binding_id, "Releasing binding");

        let cluster_name = ClusterName::from_instance_id(command.instance_id());
        self.cluster_repository
            .get_cluster(&cluster_name)
            .await
            .map_err(|e| {
                error!(instance_id, error = %e, "Failed to get existing cluster");
                e
            })?;

        self.user_repository
            .delete_user(binding_id)
            .await
            .map_err(|e| {
                error!(instance_id, binding_id, error = %e, "Failed to delete Atlas database user");
                e
            })?;

        info!(instance_id, binding_id, "Successfully deleted Atlas database user");

        Ok(())
    }
}
