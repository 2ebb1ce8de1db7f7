use crate::broker::domain::model::value_objects::{
    binding_password::BindingPassword, connection_string::ConnectionString,
};

#[derive(Clone, Debug)]
pub struct BindingCredentials {
    username: String,
    password: BindingPassword,
    uri: String,
    connection_string: ConnectionString,
}

impl BindingCredentials {
    pub fn new(
        username: String,
        password: BindingPassword,
        uri: String,
        connection_string: ConnectionString,
    ) -> Self {
        Self {
            username,
            password,
            uri,
            connection_string,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &BindingPassword {
        &self.password
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn connection_string(&self) -> &ConnectionString {
        &self.connection_string
    }
}
