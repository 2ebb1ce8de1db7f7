pub mod backend_error;
pub mod broker_domain_error;
pub mod cluster_state;
pub mod connection_string_format;
pub mod last_operation_state;
pub mod operation_kind;
