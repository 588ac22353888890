pub mod login_command;
pub mod register_player_command;
