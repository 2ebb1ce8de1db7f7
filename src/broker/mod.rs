use std::sync::Arc;

use axum::Router;

use crate::{
    broker::{
        application::{
            command_services::{
                service_binding_command_service_impl::ServiceBindingCommandServiceImpl,
                service_instance_command_service_impl::ServiceInstanceCommandServiceImpl,
            },
            query_services::{
                catalog_query_service_impl::CatalogQueryServiceImpl,
                last_operation_query_service_impl::LastOperationQueryServiceImpl,
                service_binding_query_service_impl::ServiceBindingQueryServiceImpl,
            },
        },
        domain::model::entities::service_catalog::ServiceCatalog,
        infrastructure::atlas::repositories::http::{
            atlas_http_client::AtlasHttpClient,
            reqwest_atlas_cluster_repository_impl::ReqwestAtlasClusterRepositoryImpl,
            reqwest_atlas_database_user_repository_impl::ReqwestAtlasDatabaseUserRepositoryImpl,
        },
        interfaces::rest::controllers::broker_rest_controller::{
            BrokerRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_broker_router(config: &AppConfig) -> Result<Router, reqwest::Error> {
    let client = Arc::new(AtlasHttpClient::from_config(config)?);

    let cluster_repository = Arc::new(ReqwestAtlasClusterRepositoryImpl::new(client.clone()));
    let user_repository = Arc::new(ReqwestAtlasDatabaseUserRepositoryImpl::new(client));
    let catalog = Arc::new(ServiceCatalog::atlas_default());

    let instance_command_service = Arc::new(ServiceInstanceCommandServiceImpl::new(
        cluster_repository.clone(),
        catalog.clone(),
    ));
    let binding_command_service = Arc::new(ServiceBindingCommandServiceImpl::new(
        cluster_repository.clone(),
        user_repository,
        catalog.clone(),
    ));
    let last_operation_query_service =
        Arc::new(LastOperationQueryServiceImpl::new(cluster_repository));
    let binding_query_service = Arc::new(ServiceBindingQueryServiceImpl::new());
    let catalog_query_service = Arc::new(CatalogQueryServiceImpl::new(catalog));

    Ok(router(BrokerRestControllerState {
        instance_command_service,
        binding_command_service,
        binding_query_service,
        last_operation_query_service,
        catalog_query_service,
    }))
}
