//! Repeated-pattern section - character runs and adjacent block repeats.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const PATTERN_PENALTY: i32 = -2;

/// True if any character repeats 3+ times consecutively ("aaa", "111")
/// or the password contains two identical adjacent substrings of the
/// same length ("abab" = "ab" + "ab"). First hit short-circuits.
///
/// The block scan is O(n²) over password length; fine for human-typed
/// input.
pub fn has_repeated_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    // Runs (e.g. "aaa")
    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
    }

    // Adjacent block repeats (e.g. "1212" = "12" + "12")
    for size in 2..=chars.len() / 2 {
        for start in 0..=chars.len() - 2 * size {
            if chars[start..start + size] == chars[start + size..start + 2 * size] {
                return true;
            }
        }
    }

    false
}

/// Penalizes repetitive structure.
pub fn repeated_pattern_section(password: &SecretString) -> SectionOutcome {
    if has_repeated_pattern(password.expose_secret()) {
        return SectionOutcome {
            score: PATTERN_PENALTY,
            feedback: vec!["Contains repeated patterns (e.g. aaa, abab)".to_string()],
        };
    }
    SectionOutcome::default()
}
