use crate::identity::domain::model::{
    enums::{identity_domain_error::IdentityDomainError, nationality::Nationality},
    value_objects::{
        cpf::Cpf, email_address::EmailAddress, password::Password, phone_number::PhoneNumber,
    },
};

pub struct RegisterPlayerCommandParts {
    pub email: String,
    pub phone_country_code: String,
    pub phone_number: String,
    pub password: String,
    pub nationality: String,
    pub cpf: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RegisterPlayerCommand {
    email: EmailAddress,
    phone: PhoneNumber,
    password: Password,
    nationality: Nationality,
    cpf: Option<Cpf>,
}

impl RegisterPlayerCommand {
    pub fn new(parts: RegisterPlayerCommandParts) -> Result<Self, IdentityDomainError> {
        let nationality = Nationality::new(parts.nationality)?;
        // The cpf field only exists while the Brazilian nationality is
        // selected; a value left behind after switching away is discarded.
        let cpf = if nationality.requires_cpf() {
            parts
                .cpf
                .filter(|value| !value.trim().is_empty())
                .map(Cpf::new)
                .transpose()?
        } else {
            None
        };
        Ok(Self {
            email: EmailAddress::new(parts.email)?,
            phone: PhoneNumber::new(parts.phone_country_code, parts.phone_number)?,
            password: Password::new(parts.password)?,
            nationality,
            cpf,
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
    pub fn password(&self) -> &Password {
        &self.password
    }
    pub fn nationality(&self) -> &Nationality {
        &self.nationality
    }
    pub fn cpf(&self) -> Option<&Cpf> {
        self.cpf.as_ref()
    }
}
