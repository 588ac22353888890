use serde::{Deserialize, Serialize};

use crate::lobby::domain::model::enums::game_category::GameCategory;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub category: GameCategory,
    pub provider: Option<String>,
    pub rtp: Option<String>,
}
