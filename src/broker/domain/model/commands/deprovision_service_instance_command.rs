use crate::broker::domain::model::{
    enums::broker_domain_error::BrokerDomainError, value_objects::instance_id::InstanceId,
};

#[derive(Clone, Debug)]
pub struct DeprovisionServiceInstanceCommand {
    instance_id: InstanceId,
}

impl DeprovisionServiceInstanceCommand {
    pub fn new(instance_id: String) -> Result<Self, BrokerDomainError> {
        Ok(Self {
            instance_id: InstanceId::new(instance_id)?,
        })
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }
}
