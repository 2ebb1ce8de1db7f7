pub mod atlas_http_client;
pub mod reqwest_atlas_cluster_repository_impl;
pub mod reqwest_atlas_database_user_repository_impl;
