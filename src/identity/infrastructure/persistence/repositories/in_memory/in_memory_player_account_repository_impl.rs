use std::sync::Mutex;

use async_trait::async_trait;

use crate::identity::{
    domain::model::{
        enums::identity_domain_error::IdentityDomainError,
        value_objects::email_address::EmailAddress,
    },
    infrastructure::persistence::repositories::player_account_repository::{
        PlayerAccountRecord, PlayerAccountRepository,
    },
};

/// Account store for the dialog stubs. Nothing survives the process; there is
/// no persistence behind the lobby.
pub struct InMemoryPlayerAccountRepositoryImpl {
    records: Mutex<Vec<PlayerAccountRecord>>,
}

impl InMemoryPlayerAccountRepositoryImpl {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPlayerAccountRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerAccountRepository for InMemoryPlayerAccountRepositoryImpl {
    async fn insert(&self, record: PlayerAccountRecord) -> Result<(), IdentityDomainError> {
        let mut records = self.records.lock().map_err(|_| {
            IdentityDomainError::InfrastructureError("player account store poisoned".to_string())
        })?;
        records.push(record);
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<PlayerAccountRecord>, IdentityDomainError> {
        let records = self.records.lock().map_err(|_| {
            IdentityDomainError::InfrastructureError("player account store poisoned".to_string())
        })?;
        Ok(records
            .iter()
            .find(|record| record.email == email.value())
            .cloned())
    }
}
