use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::identity::domain::model::{
    commands::login_command::LoginCommand, enums::identity_domain_error::IdentityDomainError,
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LoginFormResource {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl LoginFormResource {
    pub fn into_command(self) -> Result<LoginCommand, IdentityDomainError> {
        LoginCommand::new(self.email, self.password, self.remember_me)
    }
}
