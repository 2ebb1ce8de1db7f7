pub mod binding_credentials;
pub mod catalog_service;
pub mod cluster;
pub mod database_user;
pub mod last_operation;
pub mod service_catalog;
pub mod service_plan;
