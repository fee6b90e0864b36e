//! Character variety section - uppercase, lowercase, digits, special characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

/// Special characters recognized by the scorer.
pub const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '?', '_', '-', '+', '=',
];

/// True if the password contains an ASCII uppercase letter.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// True if the password contains an ASCII lowercase letter.
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// True if the password contains an ASCII digit.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// True if the password contains a character from [`SPECIAL_CHARS`].
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(&c))
}

/// Scores character-class coverage.
///
/// +1 for uppercase, +1 for lowercase, +1 for a digit, +2 for a special
/// character; one feedback entry per missing class.
pub fn character_class_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let mut outcome = SectionOutcome::default();

    if has_uppercase(pwd) {
        outcome.score += 1;
    } else {
        outcome.feedback.push("Missing uppercase letter".to_string());
    }

    if has_lowercase(pwd) {
        outcome.score += 1;
    } else {
        outcome.feedback.push("Missing lowercase letter".to_string());
    }

    if has_digit(pwd) {
        outcome.score += 1;
    } else {
        outcome.feedback.push("Missing number".to_string());
    }

    if has_special(pwd) {
        outcome.score += 2;
    } else {
        outcome
            .feedback
            .push("Missing special character (! @ # $ % ^ & * ? _ - + =)".to_string());
    }

    outcome
}
