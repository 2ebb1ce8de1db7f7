use std::{fmt, time::Duration};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    broker::domain::model::enums::backend_error::BackendError, config::app_config::AppConfig,
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone)]
pub enum AtlasCredentials {
    /// Service account access token, sent as a bearer token.
    AccessToken(String),
    /// Programmatic API key pair, sent as basic credentials.
    ApiKey {
        public_key: String,
        private_key: String,
    },
}

impl fmt::Debug for AtlasCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Self::ApiKey { public_key, .. } => f
                .debug_struct("ApiKey")
                .field("public_key", public_key)
                .finish_non_exhaustive(),
        }
    }
}

/// Body Atlas returns alongside non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtlasErrorResource {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

/// Authenticated client for one Atlas project. Built once at startup and
/// shared by the cluster and database user repositories.
#[derive(Clone, Debug)]
pub struct AtlasHttpClient {
    client: Client,
    base_url: String,
    group_id: String,
    credentials: AtlasCredentials,
}

impl AtlasHttpClient {
    pub fn new(
        base_url: impl Into<String>,
        group_id: impl Into<String>,
        credentials: AtlasCredentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            group_id: group_id.into(),
            credentials,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let credentials = match &config.atlas_access_token {
            Some(token) => AtlasCredentials::AccessToken(token.clone()),
            None => AtlasCredentials::ApiKey {
                public_key: config.atlas_public_key.clone(),
                private_key: config.atlas_private_key.clone(),
            },
        };

        Self::new(
            config.atlas_base_url.clone(),
            config.atlas_group_id.clone(),
            credentials,
            Duration::from_secs(config.atlas_request_timeout_secs),
        )
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Starts an authenticated request for a path below `/groups/{groupId}`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!(
            "{}/groups/{}{}",
            self.base_url,
            encode_path_segment(&self.group_id),
            path
        );
        debug!(method = %method, url = %url, "Sending Atlas request");

        let builder = self.client.request(method, url);
        match &self.credentials {
            AtlasCredentials::AccessToken(token) => builder.bearer_auth(token),
            AtlasCredentials::ApiKey {
                public_key,
                private_key,
            } => builder.basic_auth(public_key, Some(private_key)),
        }
    }

    /// Sends the request and turns non-2xx responses into `BackendError::Api`
    /// carrying the Atlas error code.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, BackendError> {
        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::Transport(Box::new(e)))?;

        let status = response.status();
        debug!(status = %status, "Received Atlas response");

        if status.is_success() {
            return Ok(response);
        }

        let body: AtlasErrorResource = response.json().await.unwrap_or_default();

        Err(BackendError::Api {
            status: status.as_u16(),
            error_code: body.error_code.unwrap_or_default(),
            detail: body
                .detail
                .or(body.reason)
                .unwrap_or_else(|| status.to_string()),
        })
    }

    pub async fn execute_json<T>(&self, builder: RequestBuilder) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        self.execute(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| BackendError::Transport(Box::new(e)))
    }
}

pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
