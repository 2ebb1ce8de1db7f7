use async_trait::async_trait;

use crate::broker::domain::model::{
    commands::{
        deprovision_service_instance_command::DeprovisionServiceInstanceCommand,
        provision_service_instance_command::ProvisionServiceInstanceCommand,
        update_service_instance_command::UpdateServiceInstanceCommand,
    },
    enums::{broker_domain_error::BrokerDomainError, operation_kind::OperationKind},
};

/// Instance verbs start an Atlas operation and return the operation token the
/// platform polls with.
#[async_trait]
pub trait ServiceInstanceCommandService: Send + Sync {
    async fn handle_provision(
        &self,
        command: ProvisionServiceInstanceCommand,
    ) -> Result<OperationKind, BrokerDomainError>;

    async fn handle_update(
        &self,
        command: UpdateServiceInstanceCommand,
    ) -> Result<OperationKind, BrokerDomainError>;

    async fn handle_deprovision(
        &self,
        command: DeprovisionServiceInstanceCommand,
    ) -> Result<OperationKind, BrokerDomainError>;
}
