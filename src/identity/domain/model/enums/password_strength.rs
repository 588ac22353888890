use crate::identity::domain::model::value_objects::password::{
    DIGIT_RE, LOWERCASE_RE, MIN_SIGNUP_PASSWORD_LENGTH, SPECIAL_RE, UPPERCASE_RE,
};

/// Banding shown by the strength indicator under the password field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Score on a 0..=100 scale: 25 points each for length, uppercase and
    /// lowercase, 12.5 each for a digit and a special character.
    pub fn score(password: &str) -> f32 {
        if password.is_empty() {
            return 0.0;
        }
        let mut score = 0.0;
        if password.len() >= MIN_SIGNUP_PASSWORD_LENGTH {
            score += 25.0;
        }
        if UPPERCASE_RE.is_match(password) {
            score += 25.0;
        }
        if LOWERCASE_RE.is_match(password) {
            score += 25.0;
        }
        if DIGIT_RE.is_match(password) {
            score += 12.5;
        }
        if SPECIAL_RE.is_match(password) {
            score += 12.5;
        }
        score
    }

    pub fn evaluate(password: &str) -> Self {
        Self::from_score(Self::score(password))
    }

    pub fn from_score(score: f32) -> Self {
        if score < 25.0 {
            Self::Weak
        } else if score < 50.0 {
            Self::Fair
        } else if score < 75.0 {
            Self::Good
        } else {
            Self::Strong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}
