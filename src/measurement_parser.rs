//! # Measurement Parser
//!
//! This module turns free-text recipe measurements into a structured
//! quantity, unit and unit group.
//!
//! ## Features
//!
//! - Handle ranges (2-3, 1/2-1), averaged to their midpoint
//! - Handle mixed numbers (1 1/2) and simple fractions (3/4)
//! - Default to a quantity of 1 when no number is present ("egg")
//! - Recognize volume, weight and count units, including trailing words ("cups mixed")
//! - Never fail: unknown units come back with no group so the text can be shown verbatim
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::measurement_parser::parse;
//! use grocery_list::measurement_types::UnitGroup;
//!
//! let parsed = parse("1 1/2 cups");
//! assert_eq!(parsed.quantity, 1.5);
//! assert_eq!(parsed.unit, "cups");
//! assert_eq!(parsed.group, Some(UnitGroup::Volume));
//! ```

use crate::measurement_patterns::{LEADING_NUMBER_REGEX, QUANTITY_TOKEN_REGEX};
use crate::measurement_types::{ParsedMeasurement, UnitGroup};
use log::{debug, trace};
use std::sync::LazyLock;

/// Quantity used when the measurement carries no readable number
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Recognized unit tokens per group, searched in order
static UNIT_TABLE: LazyLock<Vec<(UnitGroup, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        (
            UnitGroup::Volume,
            vec![
                "cup", "cups", "c",
                "tablespoon", "tablespoons", "tbsp", "tbs",
                "teaspoon", "teaspoons", "tsp",
                "fl oz", "fluid ounce", "fluid ounces",
                "pint", "pints", "pt",
                "quart", "quarts", "qt",
                "gallon", "gallons", "gal",
                "ml", "milliliter", "milliliters", "millilitre", "millilitres",
                "l", "liter", "liters", "litre", "litres",
            ],
        ),
        (
            UnitGroup::Weight,
            vec![
                "lb", "lbs", "pound", "pounds",
                "oz", "ounce", "ounces",
                "g", "gram", "grams",
                "kg", "kilogram", "kilograms",
            ],
        ),
        (
            UnitGroup::Count,
            vec!["", "piece", "pieces", "whole", "slice", "slices", "count", "counts"],
        ),
    ]
});

/// Parse a measurement such as "1/2 cup", "2 tbsp" or "1 1/2 lbs"
///
/// The leading numeric run is read as the quantity and the remaining text is
/// matched against the unit table. Text whose unit is not recognized comes
/// back with `group == None` and the original text preserved.
pub fn parse(text: &str) -> ParsedMeasurement {
    let lower = text.trim().to_lowercase();

    let (quantity_token, unit_text) = match QUANTITY_TOKEN_REGEX.find(&lower) {
        Some(m) => (m.as_str().trim(), lower[m.end()..].trim()),
        None => ("", lower.as_str()),
    };

    let quantity = parse_quantity(quantity_token);
    trace!(
        "Quantity token '{}' -> {}, unit text '{}'",
        quantity_token,
        quantity,
        unit_text
    );

    match match_unit(unit_text) {
        Some((unit, group)) => ParsedMeasurement {
            quantity,
            unit: unit.to_string(),
            group: Some(group),
            original_text: text.to_string(),
        },
        None => {
            debug!("Unrecognized unit in measurement '{}'", text);
            ParsedMeasurement {
                quantity,
                unit: String::new(),
                group: None,
                original_text: text.to_string(),
            }
        }
    }
}

/// Resolve a quantity token: range, mixed number, fraction, then plain number
pub fn parse_quantity(token: &str) -> f64 {
    let token = token.trim();

    if token.contains('-') {
        let sides: Vec<&str> = token.split('-').map(str::trim).collect();
        if let [low, high] = sides.as_slice() {
            if let (Some(low), Some(high)) = (parse_simple(low), parse_simple(high)) {
                return (low + high) / 2.0;
            }
        }
    }

    let parts: Vec<&str> = token.split_whitespace().collect();
    if let [whole, fraction] = parts.as_slice() {
        if fraction.contains('/') {
            if let (Ok(whole), Some(fraction)) = (whole.parse::<f64>(), parse_fraction(fraction)) {
                return whole + fraction;
            }
        }
    }

    if token.contains('/') {
        if let Some(value) = parse_fraction(token) {
            return value;
        }
    }

    parse_leading_number(token).unwrap_or(DEFAULT_QUANTITY)
}

/// A single side of a range: either "a/b" or a plain number
fn parse_simple(token: &str) -> Option<f64> {
    if token.contains('/') {
        parse_fraction(token)
    } else {
        parse_leading_number(token)
    }
}

/// Parse "num/denom"; a zero denominator is not a fraction
fn parse_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.trim().split_once('/')?;
    let numerator: f64 = numerator.trim().parse().ok()?;
    let denominator: f64 = denominator.trim().parse().ok()?;

    if denominator == 0.0 {
        return None;
    }

    Some(numerator / denominator)
}

fn parse_leading_number(token: &str) -> Option<f64> {
    LEADING_NUMBER_REGEX
        .find(token.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Match the text after the quantity against the unit table
///
/// A token matches when the text equals it, or starts with it followed by a
/// space or a period ("cups mixed", "tbsp. sugar").
pub fn match_unit(unit_text: &str) -> Option<(&'static str, UnitGroup)> {
    for (group, tokens) in UNIT_TABLE.iter() {
        for &token in tokens {
            if unit_matches(unit_text, token) {
                return Some((token, *group));
            }
        }
    }
    None
}

fn unit_matches(unit_text: &str, token: &str) -> bool {
    if unit_text == token {
        return true;
    }
    if token.is_empty() {
        return false;
    }
    match unit_text.strip_prefix(token) {
        Some(rest) => rest.starts_with(' ') || rest.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_simple_measurement() {
        let parsed = parse("2 cups");
        assert_close(parsed.quantity, 2.0);
        assert_eq!(parsed.unit, "cups");
        assert_eq!(parsed.group, Some(UnitGroup::Volume));
        assert_eq!(parsed.original_text, "2 cups");
    }

    #[test]
    fn test_parse_fraction_measurement() {
        let parsed = parse("1/2 cup");
        assert_close(parsed.quantity, 0.5);
        assert_eq!(parsed.unit, "cup");

        let parsed = parse("1 1/2 lbs");
        assert_close(parsed.quantity, 1.5);
        assert_eq!(parsed.unit, "lbs");
        assert_eq!(parsed.group, Some(UnitGroup::Weight));
    }

    #[test]
    fn test_parse_range_measurement() {
        let parsed = parse("2-3 tbsp");
        assert_close(parsed.quantity, 2.5);
        assert_eq!(parsed.unit, "tbsp");

        let parsed = parse("1/2-1 cup");
        assert_close(parsed.quantity, 0.75);
    }

    #[test]
    fn test_parse_unitless_count() {
        let parsed = parse("2");
        assert_close(parsed.quantity, 2.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.group, Some(UnitGroup::Count));
    }

    #[test]
    fn test_parse_count_units() {
        let parsed = parse("3 slices");
        assert_eq!(parsed.unit, "slices");
        assert_eq!(parsed.group, Some(UnitGroup::Count));

        let parsed = parse("1 whole");
        assert_eq!(parsed.group, Some(UnitGroup::Count));
    }

    #[test]
    fn test_parse_unit_with_trailing_words() {
        let parsed = parse("1 cups mixed");
        assert_eq!(parsed.unit, "cups");
        assert_eq!(parsed.group, Some(UnitGroup::Volume));

        let parsed = parse("2 tbsp. melted");
        assert_eq!(parsed.unit, "tbsp");
    }

    #[test]
    fn test_unit_prefix_requires_separator() {
        // "gallon" must not be read as "g", nor "cupcake" as "cup"
        let parsed = parse("1 gallon");
        assert_eq!(parsed.unit, "gallon");
        assert_eq!(parsed.group, Some(UnitGroup::Volume));

        let parsed = parse("1 cupcake");
        assert_eq!(parsed.group, None);
    }

    #[test]
    fn test_parse_unrecognized_unit() {
        let parsed = parse("a pinch of salt");
        assert_close(parsed.quantity, 1.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.group, None);
        assert_eq!(parsed.original_text, "a pinch of salt");
    }

    #[test]
    fn test_parse_without_number_defaults_to_one() {
        let parsed = parse("cup");
        assert_close(parsed.quantity, 1.0);
        assert_eq!(parsed.group, Some(UnitGroup::Volume));
    }

    #[test]
    fn test_parse_case_and_whitespace() {
        let parsed = parse("  2 TBSP  ");
        assert_close(parsed.quantity, 2.0);
        assert_eq!(parsed.unit, "tbsp");
        assert_eq!(parsed.original_text, "  2 TBSP  ");
    }

    #[test]
    fn test_parse_attached_unit() {
        let parsed = parse("500g");
        assert_close(parsed.quantity, 500.0);
        assert_eq!(parsed.unit, "g");
        assert_eq!(parsed.group, Some(UnitGroup::Weight));
    }

    #[test]
    fn test_quantity_parsing() {
        assert_close(parse_quantity("2.5"), 2.5);
        assert_close(parse_quantity("3/4"), 0.75);
        assert_close(parse_quantity("2 1/4"), 2.25);
        assert_close(parse_quantity("1-2"), 1.5);
        assert_close(parse_quantity(""), 1.0);
        assert_close(parse_quantity("1/0"), 1.0);
    }

    #[test]
    fn test_fluid_ounces_are_volume() {
        let parsed = parse("8 fl oz");
        assert_eq!(parsed.unit, "fl oz");
        assert_eq!(parsed.group, Some(UnitGroup::Volume));
    }
}
