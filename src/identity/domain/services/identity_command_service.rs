use async_trait::async_trait;

use crate::identity::domain::model::{
    commands::{login_command::LoginCommand, register_player_command::RegisterPlayerCommand},
    enums::identity_domain_error::IdentityDomainError,
    events::{
        login_accepted_event::LoginAcceptedEvent, player_registered_event::PlayerRegisteredEvent,
    },
};

#[async_trait]
pub trait IdentityCommandService: Send + Sync {
    async fn handle_register(
        &self,
        command: RegisterPlayerCommand,
    ) -> Result<PlayerRegisteredEvent, IdentityDomainError>;

    async fn handle_login(
        &self,
        command: LoginCommand,
    ) -> Result<LoginAcceptedEvent, IdentityDomainError>;
}
