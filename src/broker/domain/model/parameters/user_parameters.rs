use serde::Deserialize;

use crate::broker::domain::model::{
    entities::database_user::{ADMIN_DATABASE, DatabaseUser, DatabaseUserRole},
    enums::broker_domain_error::BrokerDomainError,
    parameters::parse_raw_parameters,
    value_objects::{binding_id::BindingId, binding_password::BindingPassword},
};

/// Atlas UI default when creating a user.
const DEFAULT_ROLE_NAME: &str = "readWriteAnyDatabase";

#[derive(Debug, Default, Deserialize)]
struct UserParameters {
    #[serde(default)]
    user: Option<DatabaseUser>,
}

/// Builds the Atlas database user for a binding. Username and password are
/// always the binding ID and the minted password.
pub fn user_from_params(
    binding_id: &BindingId,
    password: &BindingPassword,
    raw_parameters: &[u8],
) -> Result<DatabaseUser, BrokerDomainError> {
    let parameters: UserParameters = parse_raw_parameters(raw_parameters)?;
    let mut user = parameters.user.unwrap_or_default();

    user.username = binding_id.value().to_string();
    user.password = password.value().to_string();
    user.database_name = ADMIN_DATABASE.to_string();

    if user.roles.is_empty() {
        user.roles = vec![DatabaseUserRole {
            role_name: DEFAULT_ROLE_NAME.to_string(),
            database_name: ADMIN_DATABASE.to_string(),
            collection_name: None,
        }];
    }

    Ok(user)
}
