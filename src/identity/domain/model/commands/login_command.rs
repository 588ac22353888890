use crate::identity::domain::model::{
    enums::identity_domain_error::IdentityDomainError, value_objects::email_address::EmailAddress,
};

pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Debug)]
pub struct LoginCommand {
    email: EmailAddress,
    password: String,
    remember_me: bool,
}

impl LoginCommand {
    pub fn new(
        email: String,
        password: String,
        remember_me: bool,
    ) -> Result<Self, IdentityDomainError> {
        // Sign-in only checks a minimum length; the composition policy applies
        // to sign-up.
        if password.len() < MIN_LOGIN_PASSWORD_LENGTH {
            return Err(IdentityDomainError::PasswordTooShort);
        }
        Ok(Self {
            email: EmailAddress::new(email)?,
            password,
            remember_me,
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    pub fn remember_me(&self) -> bool {
        self.remember_me
    }
}
