use serde::Deserialize;
use serde_json::{Map, Value};

use crate::broker::domain::model::{
    enums::{
        broker_domain_error::BrokerDomainError, connection_string_format::ConnectionStringFormat,
    },
    parameters::{null_as_default, parse_raw_parameters},
};

/// Rendering options for the binding connection string, read from the
/// `connectionString` bind parameter.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStringParameters {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skip_credentials: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub database: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Map<String, Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub format: ConnectionStringFormat,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BindParameters {
    #[serde(default)]
    connection_string: Option<ConnectionStringParameters>,
}

impl ConnectionStringParameters {
    pub fn from_params(raw_parameters: &[u8]) -> Result<Self, BrokerDomainError> {
        let parameters: BindParameters = parse_raw_parameters(raw_parameters)?;
        Ok(parameters.connection_string.unwrap_or_default())
    }
}
