//! Character class section - flags passwords drawn from a single class.

use secrecy::{ExposeSecret, SecretString};

/// True iff the password is non-empty and consists of ASCII digits only.
pub fn has_only_digits(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_digit())
}

/// True iff the password is non-empty and consists of lowercase latin letters only.
pub fn has_only_lowercase_letters(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_lowercase())
}

/// True iff the password is non-empty and consists of uppercase latin letters only.
pub fn has_only_uppercase_letters(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_uppercase())
}

/// Collects single-class weaknesses.
///
/// The three checks are independent; each one that matches emits its own
/// reason.
///
/// # Returns
/// User-facing reasons for every class check that matched, empty if none did.
pub fn character_class_section(password: &SecretString) -> Vec<String> {
    let pwd = password.expose_secret();
    let mut reasons = Vec::new();
    if has_only_digits(pwd) {
        reasons.push("Password must not consist of digits only".to_string());
    }
    if has_only_lowercase_letters(pwd) {
        reasons.push("Password must not consist of lowercase latin letters only".to_string());
    }
    if has_only_uppercase_letters(pwd) {
        reasons.push("Password must not consist of uppercase latin letters only".to_string());
    }
    reasons
}
