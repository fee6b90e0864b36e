//! Length section - tiered score over password length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// Maps password length (in characters) to a tier score.
///
/// ≥16 → 4, ≥12 → 3, ≥8 → 1, otherwise 0. No tier yields 2; the gap is
/// part of the scoring contract.
pub fn length_tier(password: &str) -> i32 {
    let len = password.chars().count();
    if len >= 16 {
        4
    } else if len >= RECOMMENDED_LENGTH {
        3
    } else if len >= MIN_LENGTH {
        1
    } else {
        0
    }
}

/// Scores password length and reports shortness feedback.
///
/// Passwords below the recommended tier get a suggestion; passwords below
/// the minimum additionally get a hard warning.
pub fn length_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let tier = length_tier(pwd);

    let mut feedback = Vec::new();
    if tier < 3 {
        feedback.push(format!(
            "Consider using at least {} characters for stronger security",
            RECOMMENDED_LENGTH
        ));
    }
    if pwd.chars().count() < MIN_LENGTH {
        feedback.push(format!(
            "Password is too short (minimum {} characters)",
            MIN_LENGTH
        ));
    }

    SectionOutcome {
        score: tier,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_tier_boundaries() {
        assert_eq!(length_tier(""), 0);
        assert_eq!(length_tier("abcdefg"), 0);
        assert_eq!(length_tier("abcdefgh"), 1);
        assert_eq!(length_tier("abcdefghijk"), 1);
        assert_eq!(length_tier("abcdefghijkl"), 3);
        assert_eq!(length_tier("abcdefghijklmno"), 3);
        assert_eq!(length_tier("abcdefghijklmnop"), 4);
    }

    #[test]
    fn test_length_tier_never_two() {
        for len in 0..64 {
            let pwd: String = "x".repeat(len);
            assert_ne!(length_tier(&pwd), 2, "tier 2 must not exist (len {})", len);
        }
    }

    #[test]
    fn test_length_tier_counts_characters_not_bytes() {
        // 8 two-byte characters
        assert_eq!(length_tier("éééééééé"), 1);
    }

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let outcome = length_section(&pwd);
        assert_eq!(outcome.score, 0);
        assert_eq!(
            outcome.feedback,
            vec![
                "Consider using at least 12 characters for stronger security".to_string(),
                "Password is too short (minimum 8 characters)".to_string(),
            ]
        );
    }

    #[test]
    fn test_length_section_minimum_only_suggests() {
        let pwd = SecretString::new("12345678".to_string().into());
        let outcome = length_section(&pwd);
        assert_eq!(outcome.score, 1);
        assert_eq!(
            outcome.feedback,
            vec!["Consider using at least 12 characters for stronger security".to_string()]
        );
    }

    #[test]
    fn test_length_section_recommended_is_clean() {
        let pwd = SecretString::new("twelve-chars".to_string().into());
        let outcome = length_section(&pwd);
        assert_eq!(outcome.score, 3);
        assert!(outcome.feedback.is_empty());
    }
}
