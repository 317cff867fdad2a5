//! # Unit Standardizer
//!
//! Converts parsed quantities into the canonical unit of their group so
//! they can be summed: cups for volume, ounces for weight, no unit for counts.

use crate::measurement_types::{StandardQuantity, UnitGroup};
use log::warn;

// ============================================================================
// Volume Conversion Constants (to cups)
// ============================================================================

/// Cups per tablespoon
pub const CUPS_PER_TBSP: f64 = 1.0 / 16.0;
/// Cups per teaspoon
pub const CUPS_PER_TSP: f64 = 1.0 / 48.0;
/// Cups per fluid ounce
pub const CUPS_PER_FL_OZ: f64 = 1.0 / 8.0;
/// Cups per pint
pub const CUPS_PER_PINT: f64 = 2.0;
/// Cups per quart
pub const CUPS_PER_QUART: f64 = 4.0;
/// Cups per gallon
pub const CUPS_PER_GALLON: f64 = 16.0;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Cups per milliliter
pub const CUPS_PER_ML: f64 = 1.0 / ML_PER_CUP;
/// Cups per liter
pub const CUPS_PER_LITER: f64 = 1000.0 / ML_PER_CUP;

// ============================================================================
// Weight Conversion Constants (to ounces)
// ============================================================================

/// Ounces per pound
pub const OZ_PER_LB: f64 = 16.0;
/// Ounces per gram
pub const OZ_PER_GRAM: f64 = 0.035274;
/// Ounces per kilogram
pub const OZ_PER_KG: f64 = 35.274;

/// Get the factor that converts one `unit` into the canonical unit of `group`
pub fn conversion_factor(unit: &str, group: UnitGroup) -> Option<f64> {
    match group {
        UnitGroup::Volume => match unit {
            "cup" | "cups" | "c" => Some(1.0),
            "tablespoon" | "tablespoons" | "tbsp" | "tbs" => Some(CUPS_PER_TBSP),
            "teaspoon" | "teaspoons" | "tsp" => Some(CUPS_PER_TSP),
            "fl oz" | "fluid ounce" | "fluid ounces" => Some(CUPS_PER_FL_OZ),
            "pint" | "pints" | "pt" => Some(CUPS_PER_PINT),
            "quart" | "quarts" | "qt" => Some(CUPS_PER_QUART),
            "gallon" | "gallons" | "gal" => Some(CUPS_PER_GALLON),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Some(CUPS_PER_ML)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Some(CUPS_PER_LITER),
            _ => None,
        },
        UnitGroup::Weight => match unit {
            "oz" | "ounce" | "ounces" => Some(1.0),
            "lb" | "lbs" | "pound" | "pounds" => Some(OZ_PER_LB),
            "g" | "gram" | "grams" => Some(OZ_PER_GRAM),
            "kg" | "kilogram" | "kilograms" => Some(OZ_PER_KG),
            _ => None,
        },
        UnitGroup::Count => match unit {
            "piece" | "pieces" | "whole" | "slice" | "slices" | "count" | "counts" => Some(1.0),
            _ => None,
        },
    }
}

/// Convert a quantity into its group's canonical unit
///
/// Quantities without a group, already in the canonical unit, or without a
/// unit are returned unchanged.
pub fn standardize(quantity: f64, unit: &str, group: Option<UnitGroup>) -> StandardQuantity {
    let unchanged = StandardQuantity {
        quantity,
        unit: unit.to_string(),
    };

    let Some(group) = group else {
        return unchanged;
    };

    let canonical = group.canonical_unit();
    if unit == canonical || unit.is_empty() {
        return unchanged;
    }

    match conversion_factor(unit, group) {
        Some(factor) => StandardQuantity {
            quantity: quantity * factor,
            unit: canonical.to_string(),
        },
        None => {
            warn!("No {} conversion for unit '{}', keeping it as is", group, unit);
            unchanged
        }
    }
}
