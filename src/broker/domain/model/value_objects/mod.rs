pub mod binding_id;
pub mod binding_password;
pub mod cluster_address;
pub mod cluster_name;
pub mod connection_string;
pub mod instance_id;

lazy_static::lazy_static! {
    pub(crate) static ref IDENTIFIER_REGEX: regex::Regex =
        regex::Regex::new("^[A-Za-z0-9][A-Za-z0-9._~-]{0,127}$").expect("valid regex");
}
