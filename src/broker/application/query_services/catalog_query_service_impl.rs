use std::sync::Arc;

use crate::broker::domain::{
    model::entities::{catalog_service::CatalogService, service_catalog::ServiceCatalog},
    services::catalog_query_service::CatalogQueryService,
};

pub struct CatalogQueryServiceImpl {
    catalog: Arc<ServiceCatalog>,
}

impl CatalogQueryServiceImpl {
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self { catalog }
    }
}

impl CatalogQueryService for CatalogQueryServiceImpl {
    fn handle_list(&self) -> Vec<CatalogService> {
        self.catalog.services().to_vec()
    }
}
