use async_trait::async_trait;

use crate::broker::domain::model::{
    commands::{
        bind_service_command::BindServiceCommand, unbind_service_command::UnbindServiceCommand,
    },
    entities::binding_credentials::BindingCredentials,
    enums::broker_domain_error::BrokerDomainError,
};

#[async_trait]
pub trait ServiceBindingCommandService: Send + Sync {
    async fn handle_bind(
        &self,
        command: BindServiceCommand,
    ) -> Result<BindingCredentials, BrokerDomainError>;

    async fn handle_unbind(&self, command: UnbindServiceCommand) -> Result<(), BrokerDomainError>;
}
