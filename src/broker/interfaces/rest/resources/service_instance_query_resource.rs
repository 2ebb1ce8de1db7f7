use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AcceptsIncompleteQueryResource {
    pub accepts_incomplete: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct DeprovisionServiceInstanceQueryResource {
    pub service_id: Option<String>,
    pub plan_id: Option<String>,
    pub accepts_incomplete: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct LastOperationQueryResource {
    pub operation: Option<String>,
    pub service_id: Option<String>,
    pub plan_id: Option<String>,
}
