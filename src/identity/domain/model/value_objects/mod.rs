pub mod cpf;
pub mod email_address;
pub mod password;
pub mod phone_number;
