//! # Measurement Patterns Module
//!
//! This module contains regex patterns used to pull numbers out of measurement text.

use lazy_static::lazy_static;
use regex::Regex;

// Leading run of digits, slashes, dots, whitespace and hyphens ("1 1/2", "2-3", "0.5")
pub const QUANTITY_TOKEN_PATTERN: &str = r"^[\d./\s-]+";

// Longest numeric prefix, read the way parseFloat reads it ("1.5" of "1.5.2", "2" of "2 3")
pub const LEADING_NUMBER_PATTERN: &str = r"^(?:\d+(?:\.\d*)?|\.\d+)";

// First number anywhere in the text, used by package sizing
pub const FIRST_NUMBER_PATTERN: &str = r"\d+(?:\.\d+)?";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref QUANTITY_TOKEN_REGEX: Regex =
        Regex::new(QUANTITY_TOKEN_PATTERN).expect("Quantity token pattern should be valid");
    pub static ref LEADING_NUMBER_REGEX: Regex =
        Regex::new(LEADING_NUMBER_PATTERN).expect("Leading number pattern should be valid");
    pub static ref FIRST_NUMBER_REGEX: Regex =
        Regex::new(FIRST_NUMBER_PATTERN).expect("First number pattern should be valid");
}
