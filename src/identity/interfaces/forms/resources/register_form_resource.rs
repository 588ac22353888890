use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::identity::domain::model::{
    commands::register_player_command::{RegisterPlayerCommand, RegisterPlayerCommandParts},
    enums::identity_domain_error::IdentityDomainError,
    value_objects::{cpf::Cpf, password::Password},
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PhoneFormResource {
    #[validate(length(min = 1, message = "Country code is required"))]
    pub country_code: String,
    #[validate(length(min = 8, max = 15, message = "Phone number length is invalid"))]
    pub number: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterFormResource {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(nested)]
    pub phone: PhoneFormResource,
    #[validate(custom(
        function = validate_signup_password,
        message = "Password must be at least 8 characters and mix upper case, lower case, numbers and special characters"
    ))]
    pub password: String,
    #[validate(length(min = 1, message = "Nationality is required"))]
    pub nationality: String,
    #[validate(custom(function = validate_cpf, message = "Invalid CPF"))]
    pub cpf: Option<String>,
}

fn validate_signup_password(password: &str) -> Result<(), ValidationError> {
    Password::new(password.to_string())
        .map(|_| ())
        .map_err(|_| ValidationError::new("password_policy"))
}

/// Refinement rule for the optional cpf field. An empty value passes: the
/// field is only rendered for the Brazilian nationality, and the form
/// controller discards whatever is stored when any other nationality is
/// selected (see `RegisterPlayerCommand::new`).
fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.is_empty() {
        return Ok(());
    }
    if Cpf::is_valid(cpf) {
        Ok(())
    } else {
        Err(ValidationError::new("cpf_checksum"))
    }
}

impl RegisterFormResource {
    pub fn into_command(self) -> Result<RegisterPlayerCommand, IdentityDomainError> {
        RegisterPlayerCommand::new(RegisterPlayerCommandParts {
            email: self.email,
            phone_country_code: self.phone.country_code,
            phone_number: self.phone.number,
            password: self.password,
            nationality: self.nationality,
            cpf: self.cpf,
        })
    }
}
