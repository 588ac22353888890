use golden_crown::lobby::{
    build_lobby_module,
    domain::{
        model::{
            enums::{game_category::GameCategory, lobby_domain_error::LobbyDomainError},
            queries::{
                list_games_by_category_query::ListGamesByCategoryQuery,
                search_games_query::SearchGamesQuery,
            },
        },
        services::lobby_query_service::LobbyQueryService,
    },
};

use crate::support::create_sample_harness;

#[tokio::test]
async fn list_categories_follows_display_order_and_skips_empty_ones() {
    let harness = create_sample_harness();

    let categories = harness
        .service
        .list_categories()
        .await
        .expect("categories should list");

    // The sample catalog has no Poker games.
    assert_eq!(
        categories,
        vec![
            GameCategory::Slots,
            GameCategory::CrashGames,
            GameCategory::LiveCasino
        ]
    );
    assert_eq!(harness.repository.list_games_calls(), 1);
}

#[tokio::test]
async fn handle_list_games_filters_by_category() {
    let harness = create_sample_harness();

    let query = ListGamesByCategoryQuery::new("Slots".to_string()).expect("known category");
    let games = harness
        .service
        .handle_list_games(query)
        .await
        .expect("listing should succeed");

    let titles: Vec<&str> = games.iter().map(|game| game.title.as_str()).collect();
    assert_eq!(titles, vec!["Fortune Tiger", "Golden Dragon"]);
}

#[tokio::test]
async fn handle_search_games_is_case_insensitive() {
    let harness = create_sample_harness();

    let query = SearchGamesQuery::new("fortune".to_string()).expect("non-empty term");
    let games = harness
        .service
        .handle_search_games(query)
        .await
        .expect("search should succeed");

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "Fortune Tiger");
}

#[tokio::test]
async fn handle_search_games_matches_title_substrings() {
    let harness = create_sample_harness();

    let query = SearchGamesQuery::new("drag".to_string()).expect("non-empty term");
    let games = harness
        .service
        .handle_search_games(query)
        .await
        .expect("search should succeed");

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "Golden Dragon");
}

#[tokio::test]
async fn handle_search_games_returns_empty_when_nothing_matches() {
    let harness = create_sample_harness();

    let query = SearchGamesQuery::new("baccarat".to_string()).expect("non-empty term");
    let games = harness
        .service
        .handle_search_games(query)
        .await
        .expect("search should succeed");

    assert!(games.is_empty());
}

#[test]
fn search_query_rejects_blank_terms() {
    let result = SearchGamesQuery::new("   ".to_string());
    assert!(matches!(result, Err(LobbyDomainError::EmptySearchTerm)));
}

#[test]
fn category_query_rejects_unknown_labels() {
    let result = ListGamesByCategoryQuery::new("Bingo".to_string());
    assert!(matches!(result, Err(LobbyDomainError::UnknownCategory(_))));
}

#[tokio::test]
async fn default_catalog_serves_all_four_categories() {
    let module = build_lobby_module();

    let categories = module
        .query_service
        .list_categories()
        .await
        .expect("categories should list");

    assert_eq!(categories, GameCategory::ALL.to_vec());
}

#[tokio::test]
async fn default_catalog_ships_three_banners() {
    let module = build_lobby_module();

    let banners = module
        .query_service
        .list_banners()
        .await
        .expect("banners should list");

    assert_eq!(banners.len(), 3);
}
