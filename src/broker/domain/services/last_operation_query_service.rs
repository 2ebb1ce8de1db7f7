use async_trait::async_trait;

use crate::broker::domain::model::{
    entities::last_operation::LastOperation, enums::broker_domain_error::BrokerDomainError,
    queries::last_operation_query::LastOperationQuery,
};

#[async_trait]
pub trait LastOperationQueryService: Send + Sync {
    async fn handle_last_operation(
        &self,
        query: LastOperationQuery,
    ) -> Result<LastOperation, BrokerDomainError>;
}
