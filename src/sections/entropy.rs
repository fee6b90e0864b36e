//! Entropy section - pool-based randomness estimate.

use secrecy::{ExposeSecret, SecretString};
use super::variety::{has_digit, has_lowercase, has_special, has_uppercase};
use super::SectionOutcome;

const LOW_ENTROPY_BITS: f64 = 35.0;
const HIGH_ENTROPY_BITS: f64 = 60.0;

/// Effective alphabet size for the character classes present.
///
/// +26 lowercase, +26 uppercase, +10 digits, +32 specials. Only the fixed
/// special set counts; unrecognized characters add nothing.
pub fn pool_size(password: &str) -> u32 {
    let mut pool = 0;
    if has_lowercase(password) {
        pool += 26;
    }
    if has_uppercase(password) {
        pool += 26;
    }
    if has_digit(password) {
        pool += 10;
    }
    if has_special(password) {
        pool += 32;
    }
    pool
}

/// Estimated entropy in bits: character length × log2(pool).
///
/// A password with no recognized character class has entropy 0. The
/// estimate ignores repetition, so "aaaaaaaaaaaaaaaa" rates the same as
/// 16 distinct lowercase letters.
pub fn entropy_estimate(password: &str) -> f64 {
    let pool = pool_size(password);
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).log2()
}

/// Awards an entropy bonus.
///
/// Below 35 bits there is no bonus and a warning; 35 to 60 bits earns +1;
/// 60 bits or more earns +3 and praise.
pub fn entropy_section(password: &SecretString) -> SectionOutcome {
    let entropy = entropy_estimate(password.expose_secret());

    if entropy >= HIGH_ENTROPY_BITS {
        SectionOutcome {
            score: 3,
            feedback: vec!["High entropy makes the password unpredictable".to_string()],
        }
    } else if entropy >= LOW_ENTROPY_BITS {
        SectionOutcome {
            score: 1,
            feedback: Vec::new(),
        }
    } else {
        SectionOutcome {
            score: 0,
            feedback: vec!["Low entropy makes the password predictable".to_string()],
        }
    }
}
