pub mod atlas_cluster_repository;
pub mod atlas_database_user_repository;
pub mod http;
