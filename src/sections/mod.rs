//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password weakness.

mod character_class;
mod diversity;
mod length;

pub use character_class::{
    character_class_section, has_only_digits, has_only_lowercase_letters,
    has_only_uppercase_letters,
};
pub use diversity::{MIN_DIFFERENT_SYMBOLS, diversity_section};
pub use length::{MIN_LENGTH, length_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
