use crate::broker::domain::model::{
    enums::broker_domain_error::BrokerDomainError,
    value_objects::{binding_id::BindingId, instance_id::InstanceId},
};

#[derive(Clone, Debug)]
pub struct GetBindingQuery {
    instance_id: InstanceId,
    binding_id: BindingId,
}

impl GetBindingQuery {
    pub fn new(instance_id: String, binding_id: String) -> Result<Self, BrokerDomainError> {
        Ok(Self {
            instance_id: InstanceId::new(instance_id)?,
            binding_id: BindingId::new(binding_id)?,
        })
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn binding_id(&self) -> &BindingId {
        &self.binding_id
    }
}
