use crate::broker::domain::model::{
    enums::broker_domain_error::BrokerDomainError,
    value_objects::{binding_id::BindingId, instance_id::InstanceId},
};

#[derive(Clone, Debug)]
pub struct BindServiceCommand {
    instance_id: InstanceId,
    binding_id: BindingId,
    service_id: String,
    plan_id: String,
    raw_parameters: Vec<u8>,
}

impl BindServiceCommand {
    pub fn new(
        instance_id: String,
        binding_id: String,
        service_id: String,
        plan_id: String,
        raw_parameters: Vec<u8>,
    ) -> Result<Self, BrokerDomainError> {
        Ok(Self {
            instance_id: InstanceId::new(instance_id)?,
            binding_id: BindingId::new(binding_id)?,
            service_id,
            plan_id,
            raw_parameters,
        })
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn binding_id(&self) -> &BindingId {
        &self.binding_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn raw_parameters(&self) -> &[u8] {
        &self.raw_parameters
    }
}
