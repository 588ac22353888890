use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::identity::{
    domain::{
        model::{
            commands::{
                login_command::LoginCommand, register_player_command::RegisterPlayerCommand,
            },
            enums::identity_domain_error::IdentityDomainError,
            events::{
                login_accepted_event::LoginAcceptedEvent,
                player_registered_event::PlayerRegisteredEvent,
            },
        },
        services::identity_command_service::IdentityCommandService,
    },
    infrastructure::persistence::repositories::player_account_repository::{
        PlayerAccountRecord, PlayerAccountRepository,
    },
};

pub struct IdentityCommandServiceImpl {
    player_account_repository: Arc<dyn PlayerAccountRepository>,
}

impl IdentityCommandServiceImpl {
    pub fn new(player_account_repository: Arc<dyn PlayerAccountRepository>) -> Self {
        Self {
            player_account_repository,
        }
    }
}

#[async_trait]
impl IdentityCommandService for IdentityCommandServiceImpl {
    async fn handle_register(
        &self,
        command: RegisterPlayerCommand,
    ) -> Result<PlayerRegisteredEvent, IdentityDomainError> {
        if self
            .player_account_repository
            .find_by_email(command.email())
            .await?
            .is_some()
        {
            return Err(IdentityDomainError::EmailAlreadyRegistered);
        }

        let record = PlayerAccountRecord {
            player_id: Uuid::now_v7(),
            email: command.email().value().to_string(),
            phone_country_code: command.phone().country_code().to_string(),
            phone_number: command.phone().number().to_string(),
            nationality: command.nationality().as_str().to_string(),
            cpf: command.cpf().map(|cpf| cpf.value().to_string()),
            registered_at: Utc::now(),
        };
        self.player_account_repository
            .insert(record.clone())
            .await?;

        tracing::info!(
            player_id = %record.player_id,
            email = %record.email,
            nationality = %record.nationality,
            "register data received"
        );

        Ok(PlayerRegisteredEvent {
            player_id: record.player_id,
            email: record.email,
            nationality: record.nationality,
            registered_at: record.registered_at,
        })
    }

    async fn handle_login(
        &self,
        command: LoginCommand,
    ) -> Result<LoginAcceptedEvent, IdentityDomainError> {
        let record = self
            .player_account_repository
            .find_by_email(command.email())
            .await?
            .ok_or(IdentityDomainError::AccountNotFound)?;

        // No credential verification: sign-in is a stub that resolves the
        // account and reports the submission.
        tracing::info!(
            player_id = %record.player_id,
            remember_me = command.remember_me(),
            "login data received"
        );

        Ok(LoginAcceptedEvent {
            player_id: record.player_id,
            email: record.email,
            remember_me: command.remember_me(),
        })
    }
}
