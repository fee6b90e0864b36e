//! Sequential-digit section - detects ascending or descending digit runs.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const RUN_LENGTH: usize = 4;
const SEQUENCE_PENALTY: i32 = -2;

/// True if the digits of the password, taken in order with everything
/// else removed, contain a window of 4 stepping +1 or -1.
///
/// "abcd1234xyz" is flagged (1,2,3,4), "password9876" is flagged
/// (9,8,7,6), "13579" is not (step +2).
pub fn has_sequential_digits(password: &str) -> bool {
    let digits: Vec<i32> = password
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as i32)
        .collect();

    if digits.len() < RUN_LENGTH {
        return false;
    }

    digits.windows(RUN_LENGTH).any(|w| {
        w.windows(2).all(|pair| pair[1] == pair[0] + 1)
            || w.windows(2).all(|pair| pair[1] == pair[0] - 1)
    })
}

/// Penalizes sequential digit runs.
pub fn sequential_digit_section(password: &SecretString) -> SectionOutcome {
    if has_sequential_digits(password.expose_secret()) {
        return SectionOutcome {
            score: SEQUENCE_PENALTY,
            feedback: vec!["Contains sequential numbers (e.g. 1234, 9876)".to_string()],
        };
    }
    SectionOutcome::default()
}
