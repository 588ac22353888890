use lazy_static::lazy_static;
use regex::Regex;

use crate::identity::domain::model::enums::identity_domain_error::IdentityDomainError;

pub const MIN_SIGNUP_PASSWORD_LENGTH: usize = 8;

lazy_static! {
    pub(crate) static ref UPPERCASE_RE: Regex = Regex::new("[A-Z]").expect("uppercase pattern");
    pub(crate) static ref LOWERCASE_RE: Regex = Regex::new("[a-z]").expect("lowercase pattern");
    pub(crate) static ref DIGIT_RE: Regex = Regex::new("[0-9]").expect("digit pattern");
    pub(crate) static ref SPECIAL_RE: Regex =
        Regex::new("[^A-Za-z0-9]").expect("special character pattern");
}

/// Sign-up password. The policy mirrors the registration dialog: at least 8
/// characters mixing uppercase, lowercase, a digit and a special character.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Password(String);

impl Password {
    pub fn new(value: String) -> Result<Self, IdentityDomainError> {
        let meets_policy = value.len() >= MIN_SIGNUP_PASSWORD_LENGTH
            && UPPERCASE_RE.is_match(&value)
            && LOWERCASE_RE.is_match(&value)
            && DIGIT_RE.is_match(&value)
            && SPECIAL_RE.is_match(&value);
        if !meets_policy {
            return Err(IdentityDomainError::WeakPassword);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
