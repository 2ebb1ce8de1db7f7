use crate::broker::domain::model::{
    enums::broker_domain_error::BrokerDomainError, value_objects::instance_id::InstanceId,
};

#[derive(Clone, Debug)]
pub struct UpdateServiceInstanceCommand {
    instance_id: InstanceId,
    service_id: String,
    plan_id: Option<String>,
    raw_parameters: Vec<u8>,
}

impl UpdateServiceInstanceCommand {
    pub fn new(
        instance_id: String,
        service_id: String,
        plan_id: Option<String>,
        raw_parameters: Vec<u8>,
    ) -> Result<Self, BrokerDomainError> {
        Ok(Self {
            instance_id: InstanceId::new(instance_id)?,
            service_id,
            plan_id: plan_id.filter(|plan_id| !plan_id.is_empty()),
            raw_parameters,
        })
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn plan_id(&self) -> Option<&str> {
        self.plan_id.as_deref()
    }

    pub fn raw_parameters(&self) -> &[u8] {
        &self.raw_parameters
    }
}
