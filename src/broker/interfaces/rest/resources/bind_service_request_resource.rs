use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::broker::interfaces::rest::resources::provision_service_instance_request_resource::validate_parameters_object;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct BindServiceRequestResource {
    #[validate(length(min = 1))]
    pub service_id: String,

    #[validate(length(min = 1))]
    pub plan_id: String,

    /// `user` and `connectionString` keys are honored.
    #[serde(default)]
    #[validate(custom(function = "validate_parameters_object"))]
    pub parameters: Option<Value>,

    #[serde(default)]
    pub app_guid: Option<String>,

    #[serde(default)]
    pub bind_resource: Option<Value>,
}
