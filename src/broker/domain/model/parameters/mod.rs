use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::broker::domain::model::enums::broker_domain_error::BrokerDomainError;

pub mod cluster_parameters;
pub mod connection_string_parameters;
pub mod user_parameters;

/// Deserializes a caller parameter blob. An empty blob, or a JSON `null`,
/// yields the defaults.
pub fn parse_raw_parameters<T>(raw_parameters: &[u8]) -> Result<T, BrokerDomainError>
where
    T: DeserializeOwned + Default,
{
    if raw_parameters.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice::<Option<T>>(raw_parameters)
        .map(Option::unwrap_or_default)
        .map_err(BrokerDomainError::MalformedParameters)
}

/// Field deserializer that reads an explicit `null` as the field default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
