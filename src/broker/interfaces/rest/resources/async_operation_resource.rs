use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AsyncOperationResource {
    /// Token to pass back as `operation` when polling the last operation.
    pub operation: String,
}
