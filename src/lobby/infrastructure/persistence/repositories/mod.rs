pub mod game_catalog_repository;
pub mod in_memory;
