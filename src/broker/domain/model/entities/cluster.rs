use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::broker::domain::model::{
    enums::cluster_state::ClusterState, parameters::null_as_default,
};

/// Atlas cluster definition. The same shape is accepted from callers under the
/// `cluster` parameter key, sent on create/update and read back from Atlas.
/// Read-only fields are never sent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScalingConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bi_connector: Option<BiConnectorConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,

    #[serde(rename = "diskSizeGB", default, skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_provider: Option<String>,

    #[serde(
        rename = "mongoDBMajorVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mongodb_major_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_backup_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_settings: Option<ProviderSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_specs: Option<Vec<ReplicationSpec>>,

    #[serde(default, skip_serializing)]
    pub srv_address: Option<String>,

    #[serde(rename = "mongoURIWithOptions", default, skip_serializing)]
    pub mongo_uri_with_options: Option<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing)]
    pub state_name: ClusterState,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing_provider_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_size_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,

    #[serde(rename = "diskIOPS", default, skip_serializing_if = "Option::is_none")]
    pub disk_iops: Option<u64>,

    #[serde(
        rename = "encryptEBSVolume",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub encrypt_ebs_volume: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AutoScalingConfig {
    #[serde(rename = "diskGBEnabled", default, skip_serializing_if = "Option::is_none")]
    pub disk_gb_enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiConnectorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_preference: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions_config: Option<BTreeMap<String, RegionsConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electable_nodes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_nodes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_nodes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}
