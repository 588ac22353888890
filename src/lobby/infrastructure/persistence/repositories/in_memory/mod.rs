pub mod in_memory_game_catalog_repository_impl;
