//! # Ingredient and Grocery List Data Model
//!
//! This module defines the data flowing through grocery list generation:
//! raw ingredient occurrences from selected recipes, the consolidated
//! per-ingredient totals, and the rendered grocery list.
//!
//! ## Core Concepts
//!
//! - **IngredientOccurrence**: One ingredient line of one selected recipe
//! - **GroupTotal**: A running total for one unit group, in its canonical unit
//! - **ConsolidatedIngredient**: Every occurrence of one ingredient name merged together
//! - **GroceryList**: Display records grouped into category sections
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::ingredient_model::IngredientOccurrence;
//!
//! let flour = IngredientOccurrence::new("flour", "2 cups")
//!     .with_recipe("r1", "Pancakes")
//!     .with_category("Baking");
//! assert_eq!(flour.category.as_deref(), Some("Baking"));
//! ```

use crate::measurement_formatter::format_with_tolerance;
use crate::measurement_types::UnitGroup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient line of one selected recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientOccurrence {
    /// The ingredient name as written in the recipe (e.g., "Flour")
    #[serde(alias = "ingredientName")]
    pub name: String,

    /// Free-text measurement (e.g., "1 1/2 cups")
    pub measurement_text: String,

    /// Optional precomputed shopping category; assigned by keyword when absent
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub recipe_id: String,

    #[serde(default)]
    pub recipe_name: String,
}

impl IngredientOccurrence {
    pub fn new(name: &str, measurement_text: &str) -> Self {
        Self {
            name: name.to_string(),
            measurement_text: measurement_text.to_string(),
            category: None,
            recipe_id: String::new(),
            recipe_name: String::new(),
        }
    }

    /// Set the recipe this occurrence came from
    pub fn with_recipe(mut self, recipe_id: &str, recipe_name: &str) -> Self {
        self.recipe_id = recipe_id.to_string();
        self.recipe_name = recipe_name.to_string();
        self
    }

    /// Set a precomputed category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Grouping key: lower-cased, trimmed name
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Accumulated quantity for one unit group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub group: UnitGroup,
    /// Running total in `unit`
    pub quantity: f64,
    /// Canonical unit of the group
    pub unit: String,
    /// Every measurement text that contributed, in order
    pub original_texts: Vec<String>,
}

/// All occurrences of one ingredient name within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedIngredient {
    /// Name as first seen (trimmed)
    pub name: String,
    pub category: String,
    /// Per-group totals in the order the groups were first populated
    pub group_totals: Vec<GroupTotal>,
    /// Measurements whose unit was not recognized, verbatim
    pub unparsed_texts: Vec<String>,
    /// Names of the recipes that use this ingredient, without duplicates
    pub recipes: Vec<String>,
    /// Measurement of the first occurrence, used for package sizing
    pub first_measurement_text: String,
}

impl ConsolidatedIngredient {
    pub fn new(name: &str, category: &str, first_measurement_text: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            category: category.to_string(),
            group_totals: Vec::new(),
            unparsed_texts: Vec::new(),
            recipes: Vec::new(),
            first_measurement_text: first_measurement_text.to_string(),
        }
    }

    /// Add a standardized quantity to its group's running total
    ///
    /// The first contribution to a group creates its total; later ones are
    /// summed into it. Totals of different groups are never combined.
    pub fn add_quantity(&mut self, group: UnitGroup, quantity: f64, unit: &str, original_text: &str) {
        match self.group_totals.iter_mut().find(|total| total.group == group) {
            Some(total) => {
                total.quantity += quantity;
                total.original_texts.push(original_text.to_string());
            }
            None => self.group_totals.push(GroupTotal {
                group,
                quantity,
                unit: unit.to_string(),
                original_texts: vec![original_text.to_string()],
            }),
        }
    }

    /// Keep a measurement that could not be parsed
    pub fn add_unparsed(&mut self, measurement_text: &str) {
        self.unparsed_texts.push(measurement_text.to_string());
    }

    /// Remember a contributing recipe
    pub fn add_recipe(&mut self, recipe_name: &str) {
        let recipe_name = recipe_name.trim();
        if !recipe_name.is_empty() && !self.recipes.iter().any(|r| r == recipe_name) {
            self.recipes.push(recipe_name.to_string());
        }
    }

    /// Get the running total for a group, if any occurrence contributed to it
    pub fn total_for(&self, group: UnitGroup) -> Option<&GroupTotal> {
        self.group_totals.iter().find(|total| total.group == group)
    }

    /// Number of occurrences merged into this ingredient
    pub fn occurrence_count(&self) -> usize {
        self.group_totals
            .iter()
            .map(|total| total.original_texts.len())
            .sum::<usize>()
            + self.unparsed_texts.len()
    }

    /// Shopping-list measurement: formatted group totals then unparsed texts
    pub fn display_measurement(&self, fraction_tolerance: f64) -> String {
        self.group_totals
            .iter()
            .map(|total| format_with_tolerance(total.quantity, &total.unit, fraction_tolerance))
            .chain(self.unparsed_texts.iter().cloned())
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// One rendered line of the grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryListItem {
    pub display_name: String,
    pub formatted_measurement: String,
    pub recommended_package: String,
    pub recipes: Vec<String>,
}

/// All items of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrocerySection {
    pub category: String,
    pub items: Vec<GroceryListItem>,
}

/// A generated grocery list, sections ordered by category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<GrocerySection>,
}

impl GroceryList {
    /// Total number of items across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// Find the section for a category (case-insensitive)
    pub fn section(&self, category: &str) -> Option<&GrocerySection> {
        self.sections
            .iter()
            .find(|section| section.category.eq_ignore_ascii_case(category))
    }

    /// Find an item by display name (case-insensitive)
    pub fn find_item(&self, name: &str) -> Option<&GroceryListItem> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.display_name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for GroceryListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.formatted_measurement.is_empty() {
            write!(f, "{}", self.display_name)?;
        } else {
            write!(f, "{}: {}", self.display_name, self.formatted_measurement)?;
        }
        write!(f, " [{}]", self.recommended_package)
    }
}

impl fmt::Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grocery List ({} items):", self.item_count())?;

        for section in &self.sections {
            writeln!(f, "{}", section.category)?;
            for item in &section.items {
                writeln!(f, "  • {}", item)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement_formatter::FRACTION_TOLERANCE;

    #[test]
    fn test_occurrence_builder() {
        let occurrence = IngredientOccurrence::new("  Flour ", "2 cups").with_recipe("r1", "Pancakes");

        assert_eq!(occurrence.normalized_name(), "flour");
        assert_eq!(occurrence.recipe_name, "Pancakes");
        assert!(occurrence.category.is_none());
    }

    #[test]
    fn test_occurrence_deserializes_camel_case() {
        let json = r#"{"ingredientName": "Sugar", "measurementText": "1 cup", "recipeId": "r2", "recipeName": "Cake"}"#;
        let occurrence: IngredientOccurrence = serde_json::from_str(json).unwrap();

        assert_eq!(occurrence.name, "Sugar");
        assert_eq!(occurrence.measurement_text, "1 cup");
        assert_eq!(occurrence.recipe_id, "r2");
        assert_eq!(occurrence.category, None);
    }

    #[test]
    fn test_add_quantity_sums_within_group() {
        let mut ingredient = ConsolidatedIngredient::new("flour", "Grains & Bakery", "1 cup");
        ingredient.add_quantity(UnitGroup::Volume, 1.0, "cups", "1 cup");
        ingredient.add_quantity(UnitGroup::Volume, 0.125, "cups", "2 tbsp");

        let total = ingredient.total_for(UnitGroup::Volume).unwrap();
        assert_eq!(total.quantity, 1.125);
        assert_eq!(total.original_texts, vec!["1 cup", "2 tbsp"]);
        assert_eq!(ingredient.group_totals.len(), 1);
    }

    #[test]
    fn test_groups_stay_separate() {
        let mut ingredient = ConsolidatedIngredient::new("butter", "Dairy & Eggs", "4 oz");
        ingredient.add_quantity(UnitGroup::Weight, 4.0, "ounces", "4 oz");
        ingredient.add_quantity(UnitGroup::Volume, 0.5, "cups", "1/2 cup");
        ingredient.add_unparsed("a knob");

        assert_eq!(ingredient.group_totals[0].group, UnitGroup::Weight);
        assert_eq!(ingredient.group_totals[1].group, UnitGroup::Volume);
        assert_eq!(ingredient.occurrence_count(), 3);
        assert_eq!(
            ingredient.display_measurement(FRACTION_TOLERANCE),
            "4 ounces, 1/2 cups, a knob"
        );
    }

    #[test]
    fn test_recipes_are_deduplicated() {
        let mut ingredient = ConsolidatedIngredient::new("salt", "Pantry", "1 tsp");
        ingredient.add_recipe("Soup");
        ingredient.add_recipe("Soup");
        ingredient.add_recipe("");
        ingredient.add_recipe("Bread");

        assert_eq!(ingredient.recipes, vec!["Soup", "Bread"]);
    }

    #[test]
    fn test_item_display() {
        let item = GroceryListItem {
            display_name: "Flour".to_string(),
            formatted_measurement: "1 1/8 cups".to_string(),
            recommended_package: "5 lb bag".to_string(),
            recipes: vec![],
        };

        assert_eq!(item.to_string(), "Flour: 1 1/8 cups [5 lb bag]");
    }
}
