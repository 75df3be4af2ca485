//! Diversity section - checks the number of distinct symbols.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;

/// Recommended minimum number of distinct symbols.
pub const MIN_DIFFERENT_SYMBOLS: usize = 5;

/// Checks if the password uses enough distinct symbols.
///
/// # Returns
/// - `Some(reason)` if too few distinct symbols are used
/// - `None` if the password is diverse enough
pub fn diversity_section(password: &SecretString) -> SectionResult {
    let distinct: HashSet<char> = password.expose_secret().chars().collect();
    if distinct.len() < MIN_DIFFERENT_SYMBOLS {
        return Some(format!(
            "Password must include at least {} different symbols",
            MIN_DIFFERENT_SYMBOLS
        ));
    }
    None
}
