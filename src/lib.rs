//! # Grocery List
//!
//! Consolidates free-text ingredient measurements from several recipes into
//! a categorized shopping list: measurements are parsed, converted to
//! canonical units, summed per ingredient, and rendered as kitchen-friendly
//! quantities with a suggested package size.

pub mod consolidator;
pub mod grocery_config;
pub mod grocery_errors;
pub mod ingredient_categorizer;
pub mod ingredient_model;
pub mod measurement_formatter;
pub mod measurement_parser;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod occurrence_loader;
pub mod package_recommender;
pub mod unit_standardizer;

pub use consolidator::{build_grocery_list, consolidate, GroceryListBuilder};
pub use ingredient_categorizer::{categorize, Category};
pub use ingredient_model::{
    ConsolidatedIngredient, GroceryList, GroceryListItem, GrocerySection, GroupTotal,
    IngredientOccurrence,
};
pub use measurement_formatter::format;
pub use measurement_parser::parse;
pub use measurement_types::{ParsedMeasurement, StandardQuantity, UnitGroup};
pub use package_recommender::recommend;
pub use unit_standardizer::standardize;
