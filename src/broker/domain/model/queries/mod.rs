pub mod get_binding_query;
pub mod last_operation_query;
