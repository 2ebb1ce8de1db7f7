pub mod catalog_query_service;
pub mod last_operation_query_service;
pub mod service_binding_command_service;
pub mod service_binding_query_service;
pub mod service_instance_command_service;
