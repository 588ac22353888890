use std::sync::Arc;

use async_trait::async_trait;

use crate::lobby::{
    domain::{
        model::{
            entities::{banner::Banner, game::Game},
            enums::{game_category::GameCategory, lobby_domain_error::LobbyDomainError},
            queries::{
                list_games_by_category_query::ListGamesByCategoryQuery,
                search_games_query::SearchGamesQuery,
            },
        },
        services::lobby_query_service::LobbyQueryService,
    },
    infrastructure::persistence::repositories::game_catalog_repository::GameCatalogRepository,
};

pub struct LobbyQueryServiceImpl {
    game_catalog_repository: Arc<dyn GameCatalogRepository>,
}

impl LobbyQueryServiceImpl {
    pub fn new(game_catalog_repository: Arc<dyn GameCatalogRepository>) -> Self {
        Self {
            game_catalog_repository,
        }
    }
}

#[async_trait]
impl LobbyQueryService for LobbyQueryServiceImpl {
    async fn list_categories(&self) -> Result<Vec<GameCategory>, LobbyDomainError> {
        let games = self.game_catalog_repository.list_games().await?;
        // Display order is fixed; categories with no games are not rendered.
        Ok(GameCategory::ALL
            .iter()
            .copied()
            .filter(|category| games.iter().any(|game| game.category == *category))
            .collect())
    }

    async fn handle_list_games(
        &self,
        query: ListGamesByCategoryQuery,
    ) -> Result<Vec<Game>, LobbyDomainError> {
        let games = self.game_catalog_repository.list_games().await?;
        Ok(games
            .into_iter()
            .filter(|game| game.category == query.category())
            .collect())
    }

    async fn handle_search_games(
        &self,
        query: SearchGamesQuery,
    ) -> Result<Vec<Game>, LobbyDomainError> {
        let needle = query.term().to_lowercase();
        let games = self.game_catalog_repository.list_games().await?;
        Ok(games
            .into_iter()
            .filter(|game| game.title.to_lowercase().contains(&needle))
            .collect())
    }

    async fn list_banners(&self) -> Result<Vec<Banner>, LobbyDomainError> {
        self.game_catalog_repository.list_banners().await
    }
}
