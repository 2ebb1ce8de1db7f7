use serde::Deserialize;

use crate::broker::domain::model::{
    entities::{
        cluster::{Cluster, ProviderSettings},
        service_plan::ServicePlan,
    },
    enums::broker_domain_error::BrokerDomainError,
    parameters::parse_raw_parameters,
    value_objects::cluster_name::ClusterName,
};

#[derive(Debug, Default, Deserialize)]
struct ClusterParameters {
    #[serde(default)]
    cluster: Option<Cluster>,
}

/// Builds the cluster definition sent to Atlas from the caller's `cluster`
/// parameter. The name always comes from the instance ID. The provider
/// defaults to the service's provider and a plan, when given, decides the
/// instance size.
pub fn cluster_from_params(
    raw_parameters: &[u8],
    cluster_name: &ClusterName,
    provider_name: &str,
    plan: Option<&ServicePlan>,
) -> Result<Cluster, BrokerDomainError> {
    let parameters: ClusterParameters = parse_raw_parameters(raw_parameters)?;
    let mut cluster = parameters.cluster.unwrap_or_default();

    cluster.name = cluster_name.value().to_string();

    let provider_settings = cluster
        .provider_settings
        .get_or_insert_with(ProviderSettings::default);

    if provider_settings.provider_name.is_none() {
        provider_settings.provider_name = Some(provider_name.to_string());
    }

    if let Some(plan) = plan {
        provider_settings.instance_size_name = Some(plan.instance_size().to_string());
    }

    Ok(cluster)
}
