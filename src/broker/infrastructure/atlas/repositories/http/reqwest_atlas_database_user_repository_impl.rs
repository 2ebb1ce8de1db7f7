use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::broker::{
    domain::model::{
        entities::database_user::{ADMIN_DATABASE, DatabaseUser},
        enums::backend_error::BackendError,
    },
    infrastructure::atlas::repositories::{
        atlas_database_user_repository::AtlasDatabaseUserRepository,
        http::atlas_http_client::{AtlasHttpClient, encode_path_segment},
    },
};

pub struct ReqwestAtlasDatabaseUserRepositoryImpl {
    client: Arc<AtlasHttpClient>,
}

impl ReqwestAtlasDatabaseUserRepositoryImpl {
    pub fn new(client: Arc<AtlasHttpClient>) -> Self {
        Self { client }
    }

    fn user_path(username: &str) -> String {
        format!(
            "/databaseUsers/{ADMIN_DATABASE}/{}",
            encode_path_segment(username)
        )
    }
}

fn map_user_error(username: &str, error: BackendError) -> BackendError {
    match error {
        BackendError::Api {
            status, error_code, ..
        } if error_code == "USERNAME_NOT_FOUND" || (status == 404 && error_code.is_empty()) => {
            BackendError::UserNotFound(username.to_string())
        }
        BackendError::Api { error_code, .. } if error_code == "USER_ALREADY_EXISTS" => {
            BackendError::UserAlreadyExists(username.to_string())
        }
        other => other,
    }
}

#[async_trait]
impl AtlasDatabaseUserRepository for ReqwestAtlasDatabaseUserRepositoryImpl {
    async fn create_user(&self, user: &DatabaseUser) -> Result<DatabaseUser, BackendError> {
        let mut body = user.clone();
        body.group_id = Some(self.client.group_id().to_string());

        let request = self
            .client
            .request(Method::POST, "/databaseUsers")
            .json(&body);

        self.client
            .execute_json(request)
            .await
            .map_err(|error| map_user_error(&user.username, error))
    }

    async fn delete_user(&self, username: &str) -> Result<(), BackendError> {
        let request = self
            .client
            .request(Method::DELETE, &Self::user_path(username));

        self.client
            .execute(request)
            .await
            .map(|_| ())
            .map_err(|error| map_user_error(username, error))
    }
}
