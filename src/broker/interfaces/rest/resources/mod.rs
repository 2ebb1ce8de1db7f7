pub mod async_operation_resource;
pub mod bind_service_request_resource;
pub mod binding_resource;
pub mod broker_error_response_resource;
pub mod catalog_resource;
pub mod last_operation_resource;
pub mod provision_service_instance_request_resource;
pub mod service_instance_query_resource;
pub mod update_service_instance_request_resource;
