use lazy_static::lazy_static;
use regex::Regex;

use crate::identity::domain::model::enums::identity_domain_error::IdentityDomainError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: String) -> Result<Self, IdentityDomainError> {
        let trimmed = value.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(IdentityDomainError::InvalidEmailAddress);
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
