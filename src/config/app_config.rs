use std::fmt;

pub const DEFAULT_ATLAS_BASE_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0";

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub atlas_base_url: String,
    pub atlas_group_id: String,
    pub atlas_public_key: String,
    pub atlas_private_key: String,
    /// When set, Atlas requests carry this bearer token instead of the API key pair.
    pub atlas_access_token: Option<String>,
    pub atlas_request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            atlas_base_url: std::env::var("ATLAS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ATLAS_BASE_URL.to_string()),
            atlas_group_id: std::env::var("ATLAS_GROUP_ID").unwrap_or_default(),
            atlas_public_key: std::env::var("ATLAS_PUBLIC_KEY").unwrap_or_default(),
            atlas_private_key: std::env::var("ATLAS_PRIVATE_KEY").unwrap_or_default(),
            atlas_access_token: std::env::var("ATLAS_ACCESS_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            atlas_request_timeout_secs: std::env::var("ATLAS_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }

    /// Whether enough is configured to authenticate against Atlas.
    pub fn has_atlas_credentials(&self) -> bool {
        self.atlas_access_token.is_some()
            || (!self.atlas_public_key.is_empty() && !self.atlas_private_key.is_empty())
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("atlas_base_url", &self.atlas_base_url)
            .field("atlas_group_id", &self.atlas_group_id)
            .field("atlas_public_key", &self.atlas_public_key)
            .field("atlas_private_key", &"<redacted>")
            .field(
                "atlas_access_token",
                &self.atlas_access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("atlas_request_timeout_secs", &self.atlas_request_timeout_secs)
            .finish()
    }
}
