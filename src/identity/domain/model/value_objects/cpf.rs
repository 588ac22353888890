use crate::identity::domain::model::enums::identity_domain_error::IdentityDomainError;

const CPF_LENGTH: usize = 11;

/// Brazilian taxpayer identifier, stored as its cleaned 11-digit form.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub fn new(value: String) -> Result<Self, IdentityDomainError> {
        if !Self::is_valid(&value) {
            return Err(IdentityDomainError::InvalidCpf);
        }
        let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
        Ok(Self(digits))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Checksum verdict for raw user input. Only decimal digits are
    /// significant; dots, dashes and whitespace are ignored. Any shape that
    /// does not carry exactly 11 digits with both check digits intact yields
    /// `false` - this function never errors.
    pub fn is_valid(input: &str) -> bool {
        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != CPF_LENGTH {
            return false;
        }
        // Sequences like "00000000000" satisfy the checksum but are blacklisted.
        if digits.iter().all(|d| *d == digits[0]) {
            return false;
        }
        digits[9] == check_digit(&digits[..9]) && digits[10] == check_digit(&digits[..10])
    }
}

fn check_digit(prefix: &[u32]) -> u32 {
    let top_weight = (prefix.len() + 1) as u32;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (top_weight - i as u32))
        .sum();
    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}
