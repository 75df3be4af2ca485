//! Password heuristic evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{character_class_section, diversity_section, length_section};

/// Evaluates password weaknesses and returns the reasons found.
///
/// The sections form a decision tree rather than independent flags: a
/// password that is too short is reported as too short and nothing else;
/// diversity is checked next on its own; only a long and diverse password
/// reaches the character class checks, which then run independently of each
/// other.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// User-facing weakness reasons, empty if no section fired.
pub fn evaluate_heuristics(password: &SecretString) -> Vec<String> {
    if let Some(reason) = length_section(password) {
        return vec![reason];
    }
    if let Some(reason) = diversity_section(password) {
        return vec![reason];
    }
    character_class_section(password)
}
