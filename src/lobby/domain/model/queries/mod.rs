pub mod list_games_by_category_query;
pub mod search_games_query;
