use async_trait::async_trait;

use crate::lobby::domain::model::{
    entities::{banner::Banner, game::Game},
    enums::lobby_domain_error::LobbyDomainError,
};

#[async_trait]
pub trait GameCatalogRepository: Send + Sync {
    async fn list_games(&self) -> Result<Vec<Game>, LobbyDomainError>;

    async fn list_banners(&self) -> Result<Vec<Banner>, LobbyDomainError>;
}
