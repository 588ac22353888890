pub mod login_accepted_event;
pub mod player_registered_event;
