pub mod in_memory;
pub mod player_account_repository;
