use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("cluster {0} not found")]
    ClusterNotFound(String),

    #[error("database user {0} not found")]
    UserNotFound(String),

    #[error("cluster {0} already exists")]
    ClusterAlreadyExists(String),

    #[error("database user {0} already exists")]
    UserAlreadyExists(String),

    #[error("atlas returned {status} {error_code}: {detail}")]
    Api {
        status: u16,
        error_code: String,
        detail: String,
    },

    #[error("atlas request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
