use async_trait::async_trait;

use crate::broker::domain::model::{
    entities::database_user::DatabaseUser, enums::backend_error::BackendError,
};

#[async_trait]
pub trait AtlasDatabaseUserRepository: Send + Sync {
    async fn create_user(&self, user: &DatabaseUser) -> Result<DatabaseUser, BackendError>;

    async fn delete_user(&self, username: &str) -> Result<(), BackendError>;
}
