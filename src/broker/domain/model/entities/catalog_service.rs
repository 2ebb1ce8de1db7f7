use crate::broker::domain::model::{
    entities::service_plan::ServicePlan, enums::broker_domain_error::BrokerDomainError,
};

/// A catalog service. Each service deploys clusters on one cloud provider.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogService {
    id: String,
    name: String,
    description: String,
    provider_name: String,
    plans: Vec<ServicePlan>,
}

impl CatalogService {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        provider_name: impl Into<String>,
        plans: Vec<ServicePlan>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            provider_name: provider_name.into(),
            plans,
        }
    }

    pub fn find_plan(&self, plan_id: &str) -> Result<&ServicePlan, BrokerDomainError> {
        self.plans
            .iter()
            .find(|plan| plan.id() == plan_id)
            .ok_or_else(|| {
                BrokerDomainError::ValidationError(format!(
                    "plan {plan_id:?} is not offered by service {:?}",
                    self.id
                ))
            })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn plans(&self) -> &[ServicePlan] {
        &self.plans
    }
}
