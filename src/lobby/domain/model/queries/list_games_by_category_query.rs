use crate::lobby::domain::model::enums::{
    game_category::GameCategory, lobby_domain_error::LobbyDomainError,
};

#[derive(Clone, Debug)]
pub struct ListGamesByCategoryQuery {
    category: GameCategory,
}

impl ListGamesByCategoryQuery {
    pub fn new(category: String) -> Result<Self, LobbyDomainError> {
        Ok(Self {
            category: category.parse()?,
        })
    }

    pub fn category(&self) -> GameCategory {
        self.category
    }
}
