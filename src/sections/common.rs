//! Common-password section - exact-match lookup against the loaded word list.

use crate::wordlist::CommonPasswordSet;
use secrecy::{ExposeSecret, SecretString};

/// Checks the password against the common-password list.
///
/// Membership is an exact match of the lower-cased password. A hit is a
/// veto: the caller discards the accumulated score entirely instead of
/// applying a penalty.
///
/// # Returns
/// - `Some(reason)` if the password is in the list
/// - `None` otherwise
pub fn common_password_section(
    password: &SecretString,
    common: &CommonPasswordSet,
) -> Option<String> {
    if common.contains(password.expose_secret()) {
        return Some("Password found in common password list (high risk)".to_string());
    }
    None
}
