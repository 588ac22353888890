use crate::identity::domain::model::enums::identity_domain_error::IdentityDomainError;

const BRAZILIAN_LABEL: &str = "Brazilian";

/// Nationality selector value. Only the Brazilian sentinel changes behavior
/// (the cpf field); every other selection is carried through as its label.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Nationality {
    Brazilian,
    Other(String),
}

impl Nationality {
    pub fn new(value: String) -> Result<Self, IdentityDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IdentityDomainError::InvalidNationality);
        }
        Ok(match trimmed {
            BRAZILIAN_LABEL => Self::Brazilian,
            other => Self::Other(other.to_string()),
        })
    }

    pub fn requires_cpf(&self) -> bool {
        matches!(self, Self::Brazilian)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Brazilian => BRAZILIAN_LABEL,
            Self::Other(label) => label,
        }
    }
}
