use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogResource {
    pub services: Vec<CatalogServiceResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogServiceResource {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bindable: bool,
    pub plan_updateable: bool,
    pub instances_retrievable: bool,
    pub bindings_retrievable: bool,
    pub plans: Vec<CatalogPlanResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogPlanResource {
    pub id: String,
    pub name: String,
    pub description: String,
}
