use crate::broker::domain::model::entities::catalog_service::CatalogService;

pub trait CatalogQueryService: Send + Sync {
    fn handle_list(&self) -> Vec<CatalogService>;
}
