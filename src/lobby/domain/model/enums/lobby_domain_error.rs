use thiserror::Error;

#[derive(Debug, Error)]
pub enum LobbyDomainError {
    #[error("unknown game category: {0}")]
    UnknownCategory(String),

    #[error("search term is empty")]
    EmptySearchTerm,

    #[error("carousel needs at least one slide")]
    EmptyCarousel,

    #[error("slide index {0} is out of bounds")]
    SlideOutOfBounds(usize),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
