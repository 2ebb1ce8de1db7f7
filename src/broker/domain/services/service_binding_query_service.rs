use async_trait::async_trait;

use crate::broker::domain::model::{
    entities::binding_credentials::BindingCredentials,
    enums::broker_domain_error::BrokerDomainError, queries::get_binding_query::GetBindingQuery,
};

#[async_trait]
pub trait ServiceBindingQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetBindingQuery,
    ) -> Result<BindingCredentials, BrokerDomainError>;
}
