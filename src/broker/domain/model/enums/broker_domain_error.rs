use thiserror::Error;

use crate::broker::domain::model::enums::backend_error::BackendError;

#[derive(Debug, Error)]
pub enum BrokerDomainError {
    #[error("malformed parameters: {0}")]
    MalformedParameters(#[source] serde_json::Error),

    #[error("{0}")]
    ValidationError(String),

    #[error("this service plan requires client support for asynchronous service operations")]
    AsyncRequired,

    #[error("failed to generate binding password")]
    SecretGenerationFailed(#[source] rand::Error),

    #[error("couldn't parse backend address {address:?}")]
    InvalidBackendAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("binding {binding_id} cannot be retrieved")]
    NotRetrievable { binding_id: String },
}
