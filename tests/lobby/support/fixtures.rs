use golden_crown::lobby::domain::model::{
    entities::{banner::Banner, game::Game},
    enums::game_category::GameCategory,
};

pub fn sample_game(id: u32, title: &str, category: GameCategory) -> Game {
    Game {
        id,
        title: title.to_string(),
        image_url: format!("https://example.test/games/{id}.jpg"),
        category,
        provider: None,
        rtp: None,
    }
}

/// Small catalog with no Poker entries, so category filtering is observable.
pub fn sample_games() -> Vec<Game> {
    vec![
        sample_game(1, "Fortune Tiger", GameCategory::Slots),
        sample_game(2, "Golden Dragon", GameCategory::Slots),
        sample_game(3, "Aviator", GameCategory::CrashGames),
        sample_game(4, "Lightning Roulette", GameCategory::LiveCasino),
    ]
}

pub fn sample_banners() -> Vec<Banner> {
    vec![
        Banner {
            id: 1,
            title: "Welcome bonus".to_string(),
            image_url: "https://example.test/banners/1.jpg".to_string(),
            description: "Double your first deposit".to_string(),
        },
        Banner {
            id: 2,
            title: String::new(),
            image_url: "https://example.test/banners/2.jpg".to_string(),
            description: String::new(),
        },
    ]
}
