use crate::identity::domain::model::enums::identity_domain_error::IdentityDomainError;

const MIN_SUBSCRIBER_DIGITS: usize = 8;
const MAX_SUBSCRIBER_DIGITS: usize = 15;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PhoneNumber {
    country_code: String,
    number: String,
}

impl PhoneNumber {
    pub fn new(country_code: String, number: String) -> Result<Self, IdentityDomainError> {
        let code = country_code.trim();
        if code.is_empty() {
            return Err(IdentityDomainError::InvalidPhoneNumber);
        }
        // Separators are stripped before counting, like the cpf cleaning rule.
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < MIN_SUBSCRIBER_DIGITS || digits.len() > MAX_SUBSCRIBER_DIGITS {
            return Err(IdentityDomainError::InvalidPhoneNumber);
        }
        Ok(Self {
            country_code: code.to_string(),
            number: digits,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}
