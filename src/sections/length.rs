//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;

/// Recommended minimum password length.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters long",
            MIN_LENGTH
        ));
    }
    None
}
