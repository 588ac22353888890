pub mod game_category;
pub mod lobby_domain_error;
