//! # Measurement Types Module
//!
//! This module defines the core types produced by measurement parsing and
//! consumed by standardization and consolidation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Group of mutually convertible units
///
/// Quantities are only ever summed within the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitGroup {
    /// Volume units, accumulated in cups
    Volume,
    /// Weight units, accumulated in ounces
    Weight,
    /// Counts and unitless quantities
    Count,
}

impl UnitGroup {
    /// Get the canonical base unit for this group
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            UnitGroup::Volume => "cups",
            UnitGroup::Weight => "ounces",
            UnitGroup::Count => "",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitGroup::Volume => "volume",
            UnitGroup::Weight => "weight",
            UnitGroup::Count => "count",
        }
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A measurement parsed from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMeasurement {
    /// Numeric amount (defaults to 1 when no number could be read)
    pub quantity: f64,
    /// The matched unit token (e.g., "tbsp"), empty when unitless or unrecognized
    pub unit: String,
    /// Unit group, `None` when the unit text was not recognized
    pub group: Option<UnitGroup>,
    /// The text exactly as it was given to the parser
    pub original_text: String,
}

impl ParsedMeasurement {
    /// Whether the unit was recognized and the quantity can be summed
    pub fn is_recognized(&self) -> bool {
        self.group.is_some()
    }
}

/// A quantity expressed in its group's canonical unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardQuantity {
    pub quantity: f64,
    pub unit: String,
}
