pub mod catalog_query_service_impl;
pub mod last_operation_query_service_impl;
pub mod service_binding_query_service_impl;
