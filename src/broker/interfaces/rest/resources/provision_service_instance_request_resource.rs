use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProvisionServiceInstanceRequestResource {
    #[validate(length(min = 1))]
    pub service_id: String,

    #[validate(length(min = 1))]
    pub plan_id: String,

    #[serde(default)]
    #[validate(custom(function = "validate_parameters_object"))]
    pub parameters: Option<Value>,

    #[serde(default)]
    pub organization_guid: Option<String>,

    #[serde(default)]
    pub space_guid: Option<String>,

    #[serde(default)]
    pub context: Option<Value>,
}

pub fn validate_parameters_object(parameters: &Value) -> Result<(), validator::ValidationError> {
    if parameters.is_object() || parameters.is_null() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("parameters_must_be_object"))
    }
}
