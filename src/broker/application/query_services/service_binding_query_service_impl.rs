use async_trait::async_trait;
use tracing::info;

use crate::broker::domain::{
    model::{
        entities::binding_credentials::BindingCredentials,
        enums::broker_domain_error::BrokerDomainError, queries::get_binding_query::GetBindingQuery,
    },
    services::service_binding_query_service::ServiceBindingQueryService,
};

/// Binding passwords are never stored, so an existing binding can't be read
/// back. The catalog advertises `bindings_retrievable: false`.
#[derive(Default)]
pub struct ServiceBindingQueryServiceImpl;

impl ServiceBindingQueryServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceBindingQueryService for ServiceBindingQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetBindingQuery,
    ) -> Result<BindingCredentials, BrokerDomainError> {
        info!(
            instance_id = query.instance_id().value(),
            binding_id = query.binding_id().value(),
            "Retrieving binding"
        );

        Err(BrokerDomainError::NotRetrievable {
            binding_id: query.binding_id().value().to_string(),
        })
    }
}
