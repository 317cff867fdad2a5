//! # Grocery Configuration Module
//!
//! This module defines the tunable parameters of grocery list generation,
//! with defaults that reproduce the standard shopping-list output.

use crate::grocery_errors::GroceryError;
use crate::measurement_formatter::FRACTION_TOLERANCE;
use std::env;

// Constants for grocery list configuration
pub const DEFAULT_PACKAGE: &str = "standard package";
pub const SMALL_QUANTITY_THRESHOLD: f64 = 4.0;

// Environment variables read by `GroceryConfig::from_env`
pub const ENV_DEFAULT_PACKAGE: &str = "GROCERY_DEFAULT_PACKAGE";
pub const ENV_SMALL_QUANTITY_THRESHOLD: &str = "GROCERY_SMALL_QUANTITY_THRESHOLD";
pub const ENV_FRACTION_TOLERANCE: &str = "GROCERY_FRACTION_TOLERANCE";

/// Configuration for grocery list generation
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryConfig {
    /// Package text used when an ingredient has no known package sizes
    pub default_package: String,
    /// Small-unit measurements at or below this amount get the smallest package
    pub small_quantity_threshold: f64,
    /// Maximum distance from an eighth for a quantity to be shown as a fraction
    pub fraction_tolerance: f64,
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            default_package: DEFAULT_PACKAGE.to_string(),
            small_quantity_threshold: SMALL_QUANTITY_THRESHOLD,
            fraction_tolerance: FRACTION_TOLERANCE,
        }
    }
}

impl GroceryConfig {
    /// Build a configuration from `GROCERY_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, GroceryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GroceryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(package) = lookup(ENV_DEFAULT_PACKAGE) {
            config.default_package = package.trim().to_string();
        }
        if let Some(value) = lookup(ENV_SMALL_QUANTITY_THRESHOLD) {
            config.small_quantity_threshold = parse_number(ENV_SMALL_QUANTITY_THRESHOLD, &value)?;
        }
        if let Some(value) = lookup(ENV_FRACTION_TOLERANCE) {
            config.fraction_tolerance = parse_number(ENV_FRACTION_TOLERANCE, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), GroceryError> {
        if self.default_package.is_empty() {
            return Err(GroceryError::Config(
                "default package must not be empty".to_string(),
            ));
        }
        if !(self.small_quantity_threshold >= 0.0) {
            return Err(GroceryError::Config(format!(
                "small quantity threshold must be non-negative, got {}",
                self.small_quantity_threshold
            )));
        }
        // Eighths are 0.125 apart; a tolerance of half that would match two of them
        if !(self.fraction_tolerance > 0.0 && self.fraction_tolerance < 0.0625) {
            return Err(GroceryError::Config(format!(
                "fraction tolerance must be in (0, 0.0625), got {}",
                self.fraction_tolerance
            )));
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, GroceryError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| GroceryError::Config(format!("{key}='{value}' is not a number: {e}")))
}
