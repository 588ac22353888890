use async_trait::async_trait;

use crate::lobby::{
    domain::model::{
        entities::{banner::Banner, game::Game},
        enums::{game_category::GameCategory, lobby_domain_error::LobbyDomainError},
    },
    infrastructure::persistence::repositories::game_catalog_repository::GameCatalogRepository,
};

/// Read-only catalog backing the lobby. The data ships with the build; there
/// is no game provider integration behind it.
pub struct InMemoryGameCatalogRepositoryImpl {
    games: Vec<Game>,
    banners: Vec<Banner>,
}

impl InMemoryGameCatalogRepositoryImpl {
    pub fn new(games: Vec<Game>, banners: Vec<Banner>) -> Self {
        Self { games, banners }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(default_games(), default_banners())
    }
}

#[async_trait]
impl GameCatalogRepository for InMemoryGameCatalogRepositoryImpl {
    async fn list_games(&self) -> Result<Vec<Game>, LobbyDomainError> {
        Ok(self.games.clone())
    }

    async fn list_banners(&self) -> Result<Vec<Banner>, LobbyDomainError> {
        Ok(self.banners.clone())
    }
}

fn game(
    id: u32,
    title: &str,
    image_url: &str,
    category: GameCategory,
    provider: Option<&str>,
    rtp: Option<&str>,
) -> Game {
    Game {
        id,
        title: title.to_string(),
        image_url: image_url.to_string(),
        category,
        provider: provider.map(str::to_string),
        rtp: rtp.map(str::to_string),
    }
}

fn default_games() -> Vec<Game> {
    vec![
        game(
            1,
            "Golden Dragon",
            "https://images.unsplash.com/photo-1634443686889-d0e9726ba84a?w=800&q=80",
            GameCategory::Slots,
            Some("NetEnt"),
            Some("96.5%"),
        ),
        game(
            2,
            "Fortune Tiger",
            "https://images.unsplash.com/photo-1585435421671-0c16764628ce?w=800&q=80",
            GameCategory::Slots,
            Some("Pragmatic Play"),
            Some("97.2%"),
        ),
        game(
            3,
            "Mystic Forest",
            "https://images.unsplash.com/photo-1516339901601-2e1b62dc0c45?w=800&q=80",
            GameCategory::Slots,
            Some("Microgaming"),
            Some("95.8%"),
        ),
        game(
            4,
            "Texas Hold'em",
            "https://images.unsplash.com/photo-1511193311914-0346f16efe90?w=800&q=80",
            GameCategory::Poker,
            Some("Evolution Gaming"),
            None,
        ),
        game(
            5,
            "Caribbean Stud",
            "https://images.unsplash.com/photo-1544698310-74ea9d1c8258?w=800&q=80",
            GameCategory::Poker,
            Some("Playtech"),
            None,
        ),
        game(
            6,
            "Aviator",
            "https://images.unsplash.com/photo-1568607689150-17e625c1586e?w=800&q=80",
            GameCategory::CrashGames,
            Some("Spribe"),
            None,
        ),
        game(
            7,
            "Spaceman",
            "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?w=800&q=80",
            GameCategory::CrashGames,
            Some("Pragmatic Play"),
            None,
        ),
        game(
            8,
            "Lightning Roulette",
            "https://images.unsplash.com/photo-1606167668584-78701c57f13d?w=800&q=80",
            GameCategory::LiveCasino,
            Some("Evolution Gaming"),
            None,
        ),
        game(
            9,
            "Blackjack VIP",
            "https://images.unsplash.com/photo-1509009082772-593008ff9d77?w=800&q=80",
            GameCategory::LiveCasino,
            Some("Pragmatic Play Live"),
            None,
        ),
    ]
}

fn default_banners() -> Vec<Banner> {
    vec![
        Banner {
            id: 1,
            title: String::new(),
            image_url:
                "https://imagedelivery.net/BgH9d8bzsn4n0yijn4h7IQ/6b8fa979-ffe3-4e65-0535-8474cced3b00/w=1200"
                    .to_string(),
            description: String::new(),
        },
        Banner {
            id: 2,
            title: String::new(),
            image_url:
                "https://imagedelivery.net/BgH9d8bzsn4n0yijn4h7IQ/89e90b60-bd28-4cdc-3dd4-8c3491804f00/w=1200"
                    .to_string(),
            description: String::new(),
        },
        Banner {
            id: 3,
            title: String::new(),
            image_url:
                "https://imagedelivery.net/BgH9d8bzsn4n0yijn4h7IQ/2efd07b7-9d73-4442-5fd8-a33b970c6300/w=1200"
                    .to_string(),
            description: String::new(),
        },
    ]
}
