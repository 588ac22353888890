use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityDomainError {
    #[error("email address is invalid")]
    InvalidEmailAddress,

    #[error("phone number is invalid")]
    InvalidPhoneNumber,

    #[error("password does not meet the sign-up policy")]
    WeakPassword,

    #[error("password is too short")]
    PasswordTooShort,

    #[error("nationality is invalid")]
    InvalidNationality,

    #[error("cpf is invalid")]
    InvalidCpf,

    #[error("email address is already registered")]
    EmailAlreadyRegistered,

    #[error("account not found")]
    AccountNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
