use atlas_service_broker::{
    broker::{
        build_broker_router,
        interfaces::rest::resources::{
            async_operation_resource::AsyncOperationResource,
            bind_service_request_resource::BindServiceRequestResource,
            binding_resource::{BindingCredentialsResource, BindingResource},
            broker_error_response_resource::BrokerErrorResponseResource,
            catalog_resource::{CatalogPlanResource, CatalogResource, CatalogServiceResource},
            last_operation_resource::LastOperationResource,
            provision_service_instance_request_resource::ProvisionServiceInstanceRequestResource,
            update_service_instance_request_resource::UpdateServiceInstanceRequestResource,
        },
    },
    config::app_config::AppConfig,
};
use axum::Router;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::get_catalog,
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::provision_service_instance,
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::update_service_instance,
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::deprovision_service_instance,
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::get_last_operation,
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::bind_service,
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::unbind_service,
        atlas_service_broker::broker::interfaces::rest::controllers::broker_rest_controller::get_service_binding
    ),
    components(
        schemas(
            CatalogResource,
            CatalogServiceResource,
            CatalogPlanResource,
            ProvisionServiceInstanceRequestResource,
            UpdateServiceInstanceRequestResource,
            BindServiceRequestResource,
            AsyncOperationResource,
            LastOperationResource,
            BindingResource,
            BindingCredentialsResource,
            BrokerErrorResponseResource
        )
    ),
    tags(
        (name = "broker", description = "Open Service Broker API backed by MongoDB Atlas")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if !config.has_atlas_credentials() {
        warn!("No Atlas credentials configured, every Atlas request will be rejected");
    }

    let broker_router = build_broker_router(&config).expect("failed to build broker router");

    let app = Router::new()
        .merge(broker_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(
        address = %addr,
        atlas_base_url = %config.atlas_base_url,
        atlas_group_id = %config.atlas_group_id,
        "Service broker listening"
    );
    info!(port = config.port, "Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
