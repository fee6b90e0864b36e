//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::sections::{
    character_class_section, common_password_section, entropy_section, length_section,
    repeated_pattern_section, sequential_digit_section,
};
use crate::types::Evaluation;
use crate::wordlist::CommonPasswordSet;

/// Evaluates password strength against a loaded common-password list.
///
/// Sections run in a fixed order and the feedback list preserves that
/// order: common-password check, length, character classes, sequential
/// digits, repeated patterns, entropy. A common-password hit is a veto:
/// the final score is 0 no matter what the other sections contributed.
/// Otherwise the accumulated score is floored at 0; there is no upper
/// clamp.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `common` - Reference list of known-weak passwords
///
/// # Returns
/// An `Evaluation` containing the final score and ordered feedback.
pub fn evaluate_strength(password: &SecretString, common: &CommonPasswordSet) -> Evaluation {
    let mut score = 0;
    let mut feedback = Vec::new();

    let vetoed = match common_password_section(password, common) {
        Some(reason) => {
            feedback.push(reason);
            true
        }
        None => false,
    };

    let sections = [
        length_section(password),
        character_class_section(password),
        sequential_digit_section(password),
        repeated_pattern_section(password),
        entropy_section(password),
    ];

    for outcome in sections {
        score += outcome.score;
        feedback.extend(outcome.feedback);
    }

    let score = if vetoed { 0 } else { score.max(0) };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "evaluation complete: score {}, {} feedback entries",
        score,
        feedback.len()
    );

    Evaluation { score, feedback }
}

/// Async adapter that runs the evaluator and sends the result via channel.
///
/// The evaluation itself is synchronous; this wrapper only delivers the
/// result to a consumer task.
#[cfg(feature = "async")]
pub async fn evaluate_strength_tx(
    password: &SecretString,
    common: &CommonPasswordSet,
    tx: mpsc::Sender<Evaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let evaluation = evaluate_strength(password, common);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strength;

    fn common_set() -> CommonPasswordSet {
        CommonPasswordSet::from_entries(["password", "123456", "qwerty", "admin", "password123"])
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_additive_baseline_plus_entropy() {
        // 16 chars, all four classes, no penalties:
        // length 4 + classes (1+1+1+2) = 9, entropy 16 × log2(94) ≈ 104.9 → +3
        let evaluation = evaluate_strength(&secret("Xk3!Tqw9Lm@pZr5v"), &common_set());
        assert_eq!(evaluation.score, 12);
        assert_eq!(evaluation.strength(), Strength::Strong);
        assert_eq!(
            evaluation.feedback,
            vec!["High entropy makes the password unpredictable".to_string()]
        );
    }

    #[test]
    fn test_medium_password() {
        // length 1 + classes 3 + entropy (10 × log2(62) ≈ 59.5) +1 = 5
        let evaluation = evaluate_strength(&secret("Summer2047"), &common_set());
        assert_eq!(evaluation.score, 5);
        assert_eq!(evaluation.strength(), Strength::Medium);
    }

    #[test]
    fn test_common_password_veto_forces_zero() {
        // Without the veto this would score 1 + 2 + 1 = 4 (Medium)
        let evaluation = evaluate_strength(&secret("password123"), &common_set());
        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.strength(), Strength::Weak);
        assert_eq!(
            evaluation.feedback[0],
            "Password found in common password list (high risk)"
        );
    }

    #[test]
    fn test_veto_overrides_an_otherwise_strong_password() {
        let common = CommonPasswordSet::from_entries(["Xk3!Tqw9Lm@pZr5v"]);
        let evaluation = evaluate_strength(&secret("Xk3!Tqw9Lm@pZr5v"), &common);
        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.strength(), Strength::Weak);
    }

    #[test]
    fn test_penalties_floor_at_zero() {
        // "aaa1234" = classes 2, sequential -2, repeated -2, entropy +1 → floored to 0
        let evaluation = evaluate_strength(&secret("aaa1234"), &common_set());
        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.strength(), Strength::Weak);
    }

    #[test]
    fn test_feedback_order_is_fixed() {
        let evaluation = evaluate_strength(&secret("abc"), &common_set());
        assert_eq!(
            evaluation.feedback,
            vec![
                "Consider using at least 12 characters for stronger security".to_string(),
                "Password is too short (minimum 8 characters)".to_string(),
                "Missing uppercase letter".to_string(),
                "Missing number".to_string(),
                "Missing special character (! @ # $ % ^ & * ? _ - + =)".to_string(),
                "Low entropy makes the password predictable".to_string(),
            ]
        );
        assert_eq!(evaluation.score, 1);
    }

    #[test]
    fn test_empty_password() {
        let evaluation = evaluate_strength(&secret(""), &common_set());
        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.strength(), Strength::Weak);
        assert!(!evaluation.feedback.is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let common = common_set();
        let first = evaluate_strength(&secret("MyPass123!"), &common);
        let second = evaluate_strength(&secret("MyPass123!"), &common);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_word_list_never_vetoes() {
        let evaluation = evaluate_strength(&secret("password123"), &CommonPasswordSet::empty());
        assert!(evaluation.score > 0);
    }
}
