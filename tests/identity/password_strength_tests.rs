use golden_crown::identity::domain::model::enums::password_strength::PasswordStrength;

use crate::support::STRONG_PASSWORD;

#[test]
fn empty_password_scores_zero() {
    assert_eq!(PasswordStrength::score(""), 0.0);
    assert_eq!(PasswordStrength::evaluate(""), PasswordStrength::Weak);
}

#[test]
fn full_character_mix_scores_one_hundred() {
    assert_eq!(PasswordStrength::score(STRONG_PASSWORD), 100.0);
    assert_eq!(
        PasswordStrength::evaluate(STRONG_PASSWORD),
        PasswordStrength::Strong
    );
}

#[test]
fn single_character_class_stays_weak_or_fair() {
    assert_eq!(PasswordStrength::evaluate("!"), PasswordStrength::Weak);
    assert_eq!(PasswordStrength::evaluate("abc"), PasswordStrength::Fair);
}

#[test]
fn long_lowercase_password_is_only_good() {
    // Length and lowercase: 50 points.
    assert_eq!(PasswordStrength::score("abcdefgh"), 50.0);
    assert_eq!(
        PasswordStrength::evaluate("abcdefgh"),
        PasswordStrength::Good
    );
}

#[test]
fn banding_thresholds() {
    assert_eq!(PasswordStrength::from_score(24.9), PasswordStrength::Weak);
    assert_eq!(PasswordStrength::from_score(25.0), PasswordStrength::Fair);
    assert_eq!(PasswordStrength::from_score(50.0), PasswordStrength::Good);
    assert_eq!(PasswordStrength::from_score(75.0), PasswordStrength::Strong);
}

#[test]
fn labels_match_the_indicator_copy() {
    assert_eq!(PasswordStrength::Weak.as_str(), "Weak");
    assert_eq!(PasswordStrength::Fair.as_str(), "Fair");
    assert_eq!(PasswordStrength::Good.as_str(), "Good");
    assert_eq!(PasswordStrength::Strong.as_str(), "Strong");
}
