use std::sync::Arc;

use crate::lobby::{
    application::query_services::lobby_query_service_impl::LobbyQueryServiceImpl,
    domain::services::lobby_query_service::LobbyQueryService,
    infrastructure::persistence::repositories::in_memory::in_memory_game_catalog_repository_impl::InMemoryGameCatalogRepositoryImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;

pub struct LobbyModule {
    pub query_service: Arc<dyn LobbyQueryService>,
}

pub fn build_lobby_module() -> LobbyModule {
    let game_catalog_repository = Arc::new(InMemoryGameCatalogRepositoryImpl::with_default_catalog());
    let query_service = Arc::new(LobbyQueryServiceImpl::new(game_catalog_repository));

    LobbyModule { query_service }
}
