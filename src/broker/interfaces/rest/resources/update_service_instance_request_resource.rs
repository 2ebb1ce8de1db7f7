use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::broker::interfaces::rest::resources::provision_service_instance_request_resource::validate_parameters_object;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateServiceInstanceRequestResource {
    #[validate(length(min = 1))]
    pub service_id: String,

    #[serde(default)]
    pub plan_id: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_parameters_object"))]
    pub parameters: Option<Value>,

    #[serde(default)]
    pub previous_values: Option<Value>,

    #[serde(default)]
    pub context: Option<Value>,
}
