use std::fmt;

use serde::{Deserialize, Serialize};

use crate::broker::domain::model::parameters::null_as_default;

pub const ADMIN_DATABASE: &str = "admin";

/// Atlas database user. The password is write-only on the Atlas side.
#[derive(Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub password: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub database_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<DatabaseUserRole>,

    #[serde(rename = "ldapAuthType", default, skip_serializing_if = "Option::is_none")]
    pub ldap_auth_type: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseUserRole {
    pub role_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub database_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

impl fmt::Debug for DatabaseUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseUser")
            .field("group_id", &self.group_id)
            .field("username", &self.username)
            .field("database_name", &self.database_name)
            .field("roles", &self.roles)
            .field("ldap_auth_type", &self.ldap_auth_type)
            .finish_non_exhaustive()
    }
}
