use crate::lobby::domain::model::enums::lobby_domain_error::LobbyDomainError;

#[derive(Clone, Debug)]
pub struct SearchGamesQuery {
    term: String,
}

impl SearchGamesQuery {
    pub fn new(term: String) -> Result<Self, LobbyDomainError> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(LobbyDomainError::EmptySearchTerm);
        }
        Ok(Self {
            term: trimmed.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}
