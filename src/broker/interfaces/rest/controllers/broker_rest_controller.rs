use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use serde_json::Value;
use validator::Validate;

use crate::broker::{
    domain::{
        model::{
            commands::{
                bind_service_command::BindServiceCommand,
                deprovision_service_instance_command::DeprovisionServiceInstanceCommand,
                provision_service_instance_command::ProvisionServiceInstanceCommand,
                unbind_service_command::UnbindServiceCommand,
                update_service_instance_command::UpdateServiceInstanceCommand,
            },
            entities::catalog_service::CatalogService,
            enums::{
                backend_error::BackendError, broker_domain_error::BrokerDomainError,
                operation_kind::OperationKind,
            },
            queries::{
                get_binding_query::GetBindingQuery, last_operation_query::LastOperationQuery,
            },
        },
        services::{
            catalog_query_service::CatalogQueryService,
            last_operation_query_service::LastOperationQueryService,
            service_binding_command_service::ServiceBindingCommandService,
            service_binding_query_service::ServiceBindingQueryService,
            service_instance_command_service::ServiceInstanceCommandService,
        },
    },
    interfaces::rest::resources::{
        async_operation_resource::AsyncOperationResource,
        bind_service_request_resource::BindServiceRequestResource,
        binding_resource::{BindingCredentialsResource, BindingResource},
        broker_error_response_resource::BrokerErrorResponseResource,
        catalog_resource::{CatalogPlanResource, CatalogResource, CatalogServiceResource},
        last_operation_resource::LastOperationResource,
        provision_service_instance_request_resource::ProvisionServiceInstanceRequestResource,
        service_instance_query_resource::{
            AcceptsIncompleteQueryResource, DeprovisionServiceInstanceQueryResource,
            LastOperationQueryResource,
        },
        update_service_instance_request_resource::UpdateServiceInstanceRequestResource,
    },
};

type ErrorResponse = (StatusCode, Json<BrokerErrorResponseResource>);

#[derive(Clone)]
pub struct BrokerRestControllerState {
    pub instance_command_service: Arc<dyn ServiceInstanceCommandService>,
    pub binding_command_service: Arc<dyn ServiceBindingCommandService>,
    pub binding_query_service: Arc<dyn ServiceBindingQueryService>,
    pub last_operation_query_service: Arc<dyn LastOperationQueryService>,
    pub catalog_query_service: Arc<dyn CatalogQueryService>,
}

pub fn router(state: BrokerRestControllerState) -> Router {
    Router::new()
        .route("/v2/catalog", get(get_catalog))
        .route(
            "/v2/service_instances/:instance_id",
            put(provision_service_instance)
                .patch(update_service_instance)
                .delete(deprovision_service_instance),
        )
        .route(
            "/v2/service_instances/:instance_id/last_operation",
            get(get_last_operation),
        )
        .route(
            "/v2/service_instances/:instance_id/service_bindings/:binding_id",
            put(bind_service)
                .get(get_service_binding)
                .delete(unbind_service),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/v2/catalog",
    tag = "broker",
    responses(
        (status = 200, description = "Services and plans offered by the broker", body = CatalogResource)
    )
)]
pub async fn get_catalog(State(state): State<BrokerRestControllerState>) -> Json<CatalogResource> {
    let services = state
        .catalog_query_service
        .handle_list()
        .iter()
        .map(catalog_service_resource)
        .collect();

    Json(CatalogResource { services })
}

#[utoipa::path(
    put,
    path = "/v2/service_instances/{instance_id}",
    tag = "broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("accepts_incomplete" = Option<bool>, Query, description = "Must be true, provisioning is asynchronous")
    ),
    request_body = ProvisionServiceInstanceRequestResource,
    responses(
        (status = 202, description = "Cluster creation started", body = AsyncOperationResource),
        (status = 400, description = "Invalid payload or unknown service/plan", body = BrokerErrorResponseResource),
        (status = 409, description = "Cluster already exists", body = BrokerErrorResponseResource),
        (status = 422, description = "Asynchronous operations not accepted", body = BrokerErrorResponseResource),
        (status = 502, description = "Atlas failure", body = BrokerErrorResponseResource)
    )
)]
pub async fn provision_service_instance(
    State(state): State<BrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<AcceptsIncompleteQueryResource>,
    Json(request): Json<ProvisionServiceInstanceRequestResource>,
) -> Result<(StatusCode, Json<AsyncOperationResource>), ErrorResponse> {
    require_accepts_incomplete(query.accepts_incomplete)?;
    validate_request(&request)?;

    let command = ProvisionServiceInstanceCommand::new(
        instance_id,
        request.service_id,
        request.plan_id,
        raw_parameters(request.parameters.as_ref()).map_err(map_domain_error)?,
    )
    .map_err(map_domain_error)?;

    let operation = state
        .instance_command_service
        .handle_provision(command)
        .await
        .map_err(map_domain_error)?;

    Ok(accepted(operation))
}

#[utoipa::path(
    patch,
    path = "/v2/service_instances/{instance_id}",
    tag = "broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("accepts_incomplete" = Option<bool>, Query, description = "Must be true, updates are asynchronous")
    ),
    request_body = UpdateServiceInstanceRequestResource,
    responses(
        (status = 202, description = "Cluster update started", body = AsyncOperationResource),
        (status = 400, description = "Invalid payload or unknown service/plan", body = BrokerErrorResponseResource),
        (status = 404, description = "Cluster not found", body = BrokerErrorResponseResource),
        (status = 422, description = "Asynchronous operations not accepted", body = BrokerErrorResponseResource),
        (status = 502, description = "Atlas failure", body = BrokerErrorResponseResource)
    )
)]
pub async fn update_service_instance(
    State(state): State<BrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<AcceptsIncompleteQueryResource>,
    Json(request): Json<UpdateServiceInstanceRequestResource>,
) -> Result<(StatusCode, Json<AsyncOperationResource>), ErrorResponse> {
    require_accepts_incomplete(query.accepts_incomplete)?;
    validate_request(&request)?;

    let command = UpdateServiceInstanceCommand::new(
        instance_id,
        request.service_id,
        request.plan_id,
        raw_parameters(request.parameters.as_ref()).map_err(map_domain_error)?,
    )
    .map_err(map_domain_error)?;

    let operation = state
        .instance_command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(accepted(operation))
}

#[utoipa::path(
    delete,
    path = "/v2/service_instances/{instance_id}",
    tag = "broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("service_id" = Option<String>, Query, description = "Service identifier"),
        ("plan_id" = Option<String>, Query, description = "Plan identifier"),
        ("accepts_incomplete" = Option<bool>, Query, description = "Must be true, deletion is asynchronous")
    ),
    responses(
        (status = 202, description = "Cluster deletion started", body = AsyncOperationResource),
        (status = 410, description = "Cluster does not exist", body = BrokerErrorResponseResource),
        (status = 422, description = "Asynchronous operations not accepted", body = BrokerErrorResponseResource),
        (status = 502, description = "Atlas failure", body = BrokerErrorResponseResource)
    )
)]
pub async fn deprovision_service_instance(
    State(state): State<BrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<DeprovisionServiceInstanceQueryResource>,
) -> Result<(StatusCode, Json<AsyncOperationResource>), ErrorResponse> {
    require_accepts_incomplete(query.accepts_incomplete)?;

    let command = DeprovisionServiceInstanceCommand::new(instance_id).map_err(map_domain_error)?;

    let operation = state
        .instance_command_service
        .handle_deprovision(command)
        .await
        .map_err(map_domain_error_to_gone)?;

    Ok(accepted(operation))
}

#[utoipa::path(
    get,
    path = "/v2/service_instances/{instance_id}/last_operation",
    tag = "broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("operation" = Option<String>, Query, description = "Operation token returned when the operation was accepted")
    ),
    responses(
        (status = 200, description = "Current state of the operation", body = LastOperationResource),
        (status = 400, description = "Unknown operation", body = BrokerErrorResponseResource)
    )
)]
pub async fn get_last_operation(
    State(state): State<BrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<LastOperationQueryResource>,
) -> Result<Json<LastOperationResource>, ErrorResponse> {
    let query = LastOperationQuery::new(instance_id, query.operation).map_err(map_domain_error)?;

    let last_operation = state
        .last_operation_query_service
        .handle_last_operation(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LastOperationResource {
        state: last_operation.state().as_str().to_string(),
        description: last_operation.description().to_string(),
    }))
}

#[utoipa::path(
    put,
    path = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    tag = "broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("binding_id" = String, Path, description = "Binding identifier, used as the database username")
    ),
    request_body = BindServiceRequestResource,
    responses(
        (status = 201, description = "Database user created", body = BindingResource),
        (status = 400, description = "Invalid payload or unknown service/plan", body = BrokerErrorResponseResource),
        (status = 404, description = "Cluster not found", body = BrokerErrorResponseResource),
        (status = 409, description = "Binding already exists", body = BrokerErrorResponseResource),
        (status = 500, description = "Credential generation failure", body = BrokerErrorResponseResource),
        (status = 502, description = "Atlas failure", body = BrokerErrorResponseResource)
    )
)]
pub async fn bind_service(
    State(state): State<BrokerRestControllerState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
    Json(request): Json<BindServiceRequestResource>,
) -> Result<(StatusCode, Json<BindingResource>), ErrorResponse> {
    validate_request(&request)?;

    let command = BindServiceCommand::new(
        instance_id,
        binding_id,
        request.service_id,
        request.plan_id,
        raw_parameters(request.parameters.as_ref()).map_err(map_domain_error)?,
    )
    .map_err(map_domain_error)?;

    let credentials = state
        .binding_command_service
        .handle_bind(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(BindingResource {
            credentials: BindingCredentialsResource {
                username: credentials.username().to_string(),
                password: credentials.password().value().to_string(),
                uri: credentials.uri().to_string(),
                connection_string: credentials.connection_string().value().to_string(),
            },
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    tag = "broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("binding_id" = String, Path, description = "Binding identifier")
    ),
    responses(
        (status = 200, description = "Database user deleted"),
        (status = 410, description = "Cluster or database user does not exist", body = BrokerErrorResponseResource),
        (status = 502, description = "Atlas failure", body = BrokerErrorResponseResource)
    )
)]
pub async fn unbind_service(
    State(state): State<BrokerRestControllerState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
) -> Result<Json<Value>, ErrorResponse> {
    let command = UnbindServiceCommand::new(instance_id, binding_id).map_err(map_domain_error)?;

    state
        .binding_command_service
        .handle_unbind(command)
        .await
        .map_err(map_domain_error_to_gone)?;

    Ok(Json(serde_json::json!({})))
}

#[utoipa::path(
    get,
    path = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    tag = "broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("binding_id" = String, Path, description = "Binding identifier")
    ),
    responses(
        (status = 404, description = "Bindings are not retrievable", body = BrokerErrorResponseResource)
    )
)]
pub async fn get_service_binding(
    State(state): State<BrokerRestControllerState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
) -> Result<Json<BindingResource>, ErrorResponse> {
    let query = GetBindingQuery::new(instance_id, binding_id).map_err(map_domain_error)?;

    let credentials = state
        .binding_query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BindingResource {
        credentials: BindingCredentialsResource {
            username: credentials.username().to_string(),
            password: credentials.password().value().to_string(),
            uri: credentials.uri().to_string(),
            connection_string: credentials.connection_string().value().to_string(),
        },
    }))
}

fn accepted(operation: OperationKind) -> (StatusCode, Json<AsyncOperationResource>) {
    (
        StatusCode::ACCEPTED,
        Json(AsyncOperationResource {
            operation: operation.as_str().to_string(),
        }),
    )
}

fn catalog_service_resource(service: &CatalogService) -> CatalogServiceResource {
    CatalogServiceResource {
        id: service.id().to_string(),
        name: service.name().to_string(),
        description: service.description().to_string(),
        bindable: true,
        plan_updateable: true,
        instances_retrievable: false,
        bindings_retrievable: false,
        plans: service
            .plans()
            .iter()
            .map(|plan| CatalogPlanResource {
                id: plan.id().to_string(),
                name: plan.name().to_string(),
                description: plan.description().to_string(),
            })
            .collect(),
    }
}

fn require_accepts_incomplete(accepts_incomplete: Option<bool>) -> Result<(), ErrorResponse> {
    if accepts_incomplete.unwrap_or(false) {
        Ok(())
    } else {
        Err(map_domain_error(BrokerDomainError::AsyncRequired))
    }
}

fn validate_request(request: &impl Validate) -> Result<(), ErrorResponse> {
    request
        .validate()
        .map_err(|e| map_domain_error(BrokerDomainError::ValidationError(e.to_string())))
}

fn raw_parameters(parameters: Option<&Value>) -> Result<Vec<u8>, BrokerDomainError> {
    match parameters {
        Some(parameters) => {
            serde_json::to_vec(parameters).map_err(BrokerDomainError::MalformedParameters)
        }
        None => Ok(Vec::new()),
    }
}

fn map_domain_error(error: BrokerDomainError) -> ErrorResponse {
    error_response(error, StatusCode::NOT_FOUND)
}

/// Deleting something that is already gone answers 410 rather than 404.
fn map_domain_error_to_gone(error: BrokerDomainError) -> ErrorResponse {
    error_response(error, StatusCode::GONE)
}

fn error_response(error: BrokerDomainError, missing_status: StatusCode) -> ErrorResponse {
    let (status, code) = match &error {
        BrokerDomainError::MalformedParameters(_) => {
            (StatusCode::BAD_REQUEST, "MalformedParameters")
        }
        BrokerDomainError::ValidationError(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
        BrokerDomainError::AsyncRequired => (StatusCode::UNPROCESSABLE_ENTITY, "AsyncRequired"),
        BrokerDomainError::SecretGenerationFailed(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "SecretGenerationFailed")
        }
        BrokerDomainError::InvalidBackendAddress { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "InvalidBackendAddress")
        }
        BrokerDomainError::NotRetrievable { .. } => (StatusCode::NOT_FOUND, "NotRetrievable"),
        BrokerDomainError::Backend(backend_error) => match backend_error {
            BackendError::ClusterNotFound(_) | BackendError::UserNotFound(_) => {
                (missing_status, "NotFound")
            }
            BackendError::ClusterAlreadyExists(_) | BackendError::UserAlreadyExists(_) => {
                (StatusCode::CONFLICT, "Conflict")
            }
            BackendError::Api { .. } | BackendError::Transport(_) => {
                (StatusCode::BAD_GATEWAY, "BackendError")
            }
        },
    };

    (
        status,
        Json(BrokerErrorResponseResource {
            error: code.to_string(),
            description: error.to_string(),
        }),
    )
}
