use crate::broker::domain::model::{
    enums::{broker_domain_error::BrokerDomainError, operation_kind::OperationKind},
    value_objects::instance_id::InstanceId,
};

#[derive(Clone, Debug)]
pub struct LastOperationQuery {
    instance_id: InstanceId,
    operation: OperationKind,
}

impl LastOperationQuery {
    /// `operation` is the token handed out when the operation was accepted.
    pub fn new(instance_id: String, operation: Option<String>) -> Result<Self, BrokerDomainError> {
        let operation = operation.unwrap_or_default();
        let operation = operation.parse::<OperationKind>().map_err(|_| {
            BrokerDomainError::ValidationError(format!("unknown operation {operation:?}"))
        })?;

        Ok(Self {
            instance_id: InstanceId::new(instance_id)?,
            operation,
        })
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }
}
