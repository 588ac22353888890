use async_trait::async_trait;

use crate::lobby::domain::model::{
    entities::{banner::Banner, game::Game},
    enums::{game_category::GameCategory, lobby_domain_error::LobbyDomainError},
    queries::{
        list_games_by_category_query::ListGamesByCategoryQuery,
        search_games_query::SearchGamesQuery,
    },
};

#[async_trait]
pub trait LobbyQueryService: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<GameCategory>, LobbyDomainError>;

    async fn handle_list_games(
        &self,
        query: ListGamesByCategoryQuery,
    ) -> Result<Vec<Game>, LobbyDomainError>;

    async fn handle_search_games(
        &self,
        query: SearchGamesQuery,
    ) -> Result<Vec<Game>, LobbyDomainError>;

    async fn list_banners(&self) -> Result<Vec<Banner>, LobbyDomainError>;
}
