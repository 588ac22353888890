use golden_crown::identity::domain::model::{
    enums::identity_domain_error::IdentityDomainError, value_objects::cpf::Cpf,
};

use crate::support::{FORMATTED_CPF, VALID_CPF};

#[test]
fn accepts_known_valid_identifier() {
    assert!(Cpf::is_valid(VALID_CPF));
}

#[test]
fn rejects_empty_input() {
    assert!(!Cpf::is_valid(""));
}

#[test]
fn rejects_inputs_without_exactly_eleven_digits() {
    for input in ["5299822472", "529982247251", "123", "abc", "529.982.247-2"] {
        assert!(!Cpf::is_valid(input), "expected {input:?} to be invalid");
    }
}

#[test]
fn rejects_all_equal_digit_sequences() {
    for digit in 0..=9 {
        let sequence = digit.to_string().repeat(11);
        assert!(
            !Cpf::is_valid(&sequence),
            "expected {sequence} to be blacklisted"
        );
    }
}

#[test]
fn rejects_any_mutation_of_the_first_check_digit() {
    for replacement in "013456789".chars() {
        let mut digits: Vec<char> = VALID_CPF.chars().collect();
        digits[9] = replacement;
        let mutated: String = digits.into_iter().collect();
        assert!(!Cpf::is_valid(&mutated), "expected {mutated} to be invalid");
    }
}

#[test]
fn rejects_any_mutation_of_the_second_check_digit() {
    for replacement in "012346789".chars() {
        let mut digits: Vec<char> = VALID_CPF.chars().collect();
        digits[10] = replacement;
        let mutated: String = digits.into_iter().collect();
        assert!(!Cpf::is_valid(&mutated), "expected {mutated} to be invalid");
    }
}

#[test]
fn formatting_punctuation_does_not_change_the_verdict() {
    assert_eq!(Cpf::is_valid(FORMATTED_CPF), Cpf::is_valid(VALID_CPF));
    assert!(Cpf::is_valid(" 529 982 247 25 "));
    assert!(Cpf::is_valid("529-982-247/25"));
}

#[test]
fn value_object_stores_the_cleaned_digits() {
    let cpf = Cpf::new(FORMATTED_CPF.to_string()).expect("formatted cpf should parse");
    assert_eq!(cpf.value(), VALID_CPF);
}

#[test]
fn value_object_rejects_a_bad_checksum() {
    let result = Cpf::new("52998224724".to_string());
    assert!(matches!(result, Err(IdentityDomainError::InvalidCpf)));
}
