//! # Measurement Formatter
//!
//! Renders an accumulated canonical quantity back into a shopping-list
//! string. Large volumes are promoted to quarts, small ones demoted to
//! tablespoons or teaspoons, heavy weights promoted to pounds, and amounts
//! under ten are shown as kitchen fractions (eighths) when they are close
//! enough to one.
//!
//! Unit names are never singularized: four cups renders as `"1 quarts"`.
//!
//! ```rust
//! use grocery_list::measurement_formatter::format;
//!
//! assert_eq!(format(1.125, "cups"), "1 1/8 cups");
//! assert_eq!(format(2.333, "ounces"), "2.33 ounces");
//! ```

use log::trace;

/// Maximum distance from an eighth for a quantity to be shown as a fraction
pub const FRACTION_TOLERANCE: f64 = 0.01;

/// Quantities at or above this are shown as decimals rather than fractions
pub const FRACTION_LIMIT: f64 = 10.0;

/// Display strings for the fractional eighths
const EIGHTHS: [(f64, &str); 7] = [
    (0.125, "1/8"),
    (0.25, "1/4"),
    (0.375, "3/8"),
    (0.5, "1/2"),
    (0.625, "5/8"),
    (0.75, "3/4"),
    (0.875, "7/8"),
];

/// Format a quantity in a canonical unit ("cups", "ounces" or "")
pub fn format(quantity: f64, canonical_unit: &str) -> String {
    format_with_tolerance(quantity, canonical_unit, FRACTION_TOLERANCE)
}

/// Same as [`format`] with a custom fraction tolerance
pub fn format_with_tolerance(quantity: f64, canonical_unit: &str, tolerance: f64) -> String {
    let (promoted, unit) = promote_unit(quantity, canonical_unit);
    let number = format_number(promoted, tolerance);
    trace!(
        "Formatted {} {} as {} {}",
        quantity,
        canonical_unit,
        number,
        unit
    );
    format!("{} {}", number, unit).trim().to_string()
}

/// Pick the display unit for a canonical quantity and convert into it
pub fn promote_unit(quantity: f64, canonical_unit: &str) -> (f64, &str) {
    match canonical_unit {
        "cups" => {
            if quantity >= 4.0 {
                (quantity / 4.0, "quarts")
            } else if quantity >= 0.25 {
                (quantity, "cups")
            } else if quantity >= 1.0 / 16.0 {
                (quantity * 16.0, "tablespoons")
            } else {
                (quantity * 48.0, "teaspoons")
            }
        }
        "ounces" => {
            if quantity >= 16.0 {
                (quantity / 16.0, "pounds")
            } else {
                (quantity, "ounces")
            }
        }
        other => (quantity, other),
    }
}

/// Render a number as a whole number, an eighth, a mixed number or a decimal
pub fn format_number(quantity: f64, tolerance: f64) -> String {
    if quantity >= FRACTION_LIMIT {
        let rounded = (quantity * 10.0).round() / 10.0;
        return format!("{}", rounded);
    }

    let rounded = (quantity * 8.0).round() / 8.0;
    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }

    if (quantity - rounded).abs() <= tolerance {
        let whole = rounded.trunc();
        let remainder = rounded - whole;
        if let Some(fraction) = eighth_name(remainder, tolerance) {
            return if whole == 0.0 {
                fraction.to_string()
            } else {
                format!("{} {}", whole as i64, fraction)
            };
        }
    }

    format!("{:.2}", quantity)
}

fn eighth_name(value: f64, tolerance: f64) -> Option<&'static str> {
    EIGHTHS
        .iter()
        .find(|(eighth, _)| (value - eighth).abs() < tolerance)
        .map(|(_, name)| *name)
}
