use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::domain::model::{
    enums::identity_domain_error::IdentityDomainError, value_objects::email_address::EmailAddress,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerAccountRecord {
    pub player_id: Uuid,
    pub email: String,
    pub phone_country_code: String,
    pub phone_number: String,
    pub nationality: String,
    pub cpf: Option<String>,
    pub registered_at: DateTime<Utc>,
}

#[async_trait]
pub trait PlayerAccountRepository: Send + Sync {
    async fn insert(&self, record: PlayerAccountRecord) -> Result<(), IdentityDomainError>;

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<PlayerAccountRecord>, IdentityDomainError>;
}
