pub mod in_memory_player_account_repository_impl;
