use serde_json::Value;

use crate::broker::domain::model::{
    entities::cluster::Cluster,
    enums::{
        broker_domain_error::BrokerDomainError, connection_string_format::ConnectionStringFormat,
    },
    parameters::connection_string_parameters::ConnectionStringParameters,
    value_objects::cluster_address::ClusterAddress,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionString(String);

impl ConnectionString {
    /// Renders the cluster address selected by `parameters.format` with the
    /// binding credentials, database path and query options applied, in that
    /// order.
    pub fn build(
        parameters: &ConnectionStringParameters,
        cluster: &Cluster,
        username: &str,
        password: &str,
    ) -> Result<Self, BrokerDomainError> {
        let address = match parameters.format {
            ConnectionStringFormat::Standard => cluster.mongo_uri_with_options.as_deref(),
            ConnectionStringFormat::Srv => cluster.srv_address.as_deref(),
        }
        .unwrap_or_default();

        let mut address = ClusterAddress::parse(address)?;

        if !parameters.skip_credentials {
            address.set_credentials(username, password);
        }

        if !parameters.database.is_empty() {
            address.set_path(&parameters.database);
        }

        if !parameters.options.is_empty() {
            address.merge_query(
                parameters
                    .options
                    .iter()
                    .filter_map(|(key, value)| {
                        query_value(value).map(|value| (key.clone(), value))
                    }),
            );

            // Some drivers refuse a query string without a path separator.
            if !address.has_path() {
                address.set_path("/");
            }
        }

        Ok(Self(address.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Numbers are rendered as integers, truncating any fraction. Values other
/// than strings, numbers and booleans are dropped.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value as i64))
            .map(|value| value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}
