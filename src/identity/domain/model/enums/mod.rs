pub mod identity_domain_error;
pub mod nationality;
pub mod password_strength;
