use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BrokerErrorResponseResource {
    pub error: String,
    pub description: String,
}
