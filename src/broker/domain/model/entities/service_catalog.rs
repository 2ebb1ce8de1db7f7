use crate::broker::domain::model::{
    entities::{catalog_service::CatalogService, service_plan::ServicePlan},
    enums::broker_domain_error::BrokerDomainError,
};

const PROVIDERS: [(&str, &str); 3] = [
    ("AWS", "Amazon Web Services"),
    ("GCP", "Google Cloud Platform"),
    ("AZURE", "Microsoft Azure"),
];

const INSTANCE_SIZES: [&str; 7] = ["M10", "M20", "M30", "M40", "M50", "M60", "M80"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceCatalog {
    services: Vec<CatalogService>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<CatalogService>) -> Self {
        Self { services }
    }

    /// One service per cloud provider with one plan per dedicated instance
    /// size, e.g. `aosb-cluster-service-aws` / `aosb-cluster-plan-aws-m10`.
    pub fn atlas_default() -> Self {
        let services = PROVIDERS
            .iter()
            .map(|(provider_name, provider_title)| {
                let provider_slug = provider_name.to_lowercase();
                let plans = INSTANCE_SIZES
                    .iter()
                    .map(|size| {
                        ServicePlan::new(
                            format!("aosb-cluster-plan-{provider_slug}-{}", size.to_lowercase()),
                            size.to_string(),
                            format!("Instance size \"{size}\""),
                            *size,
                        )
                    })
                    .collect();

                CatalogService::new(
                    format!("aosb-cluster-service-{provider_slug}"),
                    format!("mongodb-atlas-{provider_slug}"),
                    format!("MongoDB Atlas clusters hosted on \"{provider_title}\""),
                    *provider_name,
                    plans,
                )
            })
            .collect();

        Self::new(services)
    }

    pub fn find_service(&self, service_id: &str) -> Result<&CatalogService, BrokerDomainError> {
        self.services
            .iter()
            .find(|service| service.id() == service_id)
            .ok_or_else(|| {
                BrokerDomainError::ValidationError(format!("unknown service ID {service_id:?}"))
            })
    }

    pub fn services(&self) -> &[CatalogService] {
        &self.services
    }
}
