use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BindingResource {
    pub credentials: BindingCredentialsResource,
}

#[derive(Clone, Deserialize, Serialize, ToSchema)]
pub struct BindingCredentialsResource {
    pub username: String,
    pub password: String,
    pub uri: String,
    pub connection_string: String,
}

impl std::fmt::Debug for BindingCredentialsResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingCredentialsResource")
            .field("username", &self.username)
            .field("uri", &self.uri)
            .finish_non_exhaustive()
    }
}
