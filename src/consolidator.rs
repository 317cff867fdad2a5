//! # Ingredient Consolidation and Grocery List Generation
//!
//! This module merges ingredient occurrences from several recipes into one
//! entry per ingredient and renders the result as a grocery list grouped by
//! category.
//!
//! Consolidation rules:
//! - Occurrences are grouped by category, then by lower-cased trimmed name
//! - Quantities are summed only within the same unit group, in canonical units
//! - Measurements with an unknown unit are kept verbatim, never dropped
//! - Ingredient order within a category follows first appearance
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::consolidator::build_grocery_list;
//! use grocery_list::ingredient_model::IngredientOccurrence;
//!
//! let occurrences = vec![
//!     IngredientOccurrence::new("Flour", "1 cup").with_recipe("r1", "Pancakes"),
//!     IngredientOccurrence::new("flour", "2 tbsp").with_recipe("r2", "Gravy"),
//! ];
//!
//! let list = build_grocery_list(&occurrences);
//! let flour = list.find_item("flour").unwrap();
//! assert_eq!(flour.formatted_measurement, "1 1/8 cups");
//! ```

use crate::grocery_config::GroceryConfig;
use crate::grocery_errors::GroceryError;
use crate::ingredient_categorizer::categorize;
use crate::ingredient_model::{
    ConsolidatedIngredient, GroceryList, GroceryListItem, GrocerySection, IngredientOccurrence,
};
use crate::measurement_parser::parse;
use crate::package_recommender::PackageRecommender;
use crate::unit_standardizer::standardize;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Consolidated ingredients of one category, with a name index for merging
#[derive(Default)]
struct CategoryBucket {
    ingredients: Vec<ConsolidatedIngredient>,
    index_by_name: HashMap<String, usize>,
}

/// Merge occurrences into one consolidated ingredient per category and name
///
/// Occurrences with a blank name are skipped. Category keys are compared
/// exactly, so precomputed categories differing only in case ("Dairy" and
/// "dairy") stay separate.
pub fn consolidate(
    occurrences: &[IngredientOccurrence],
) -> HashMap<String, Vec<ConsolidatedIngredient>> {
    let mut buckets: HashMap<String, CategoryBucket> = HashMap::new();

    for occurrence in occurrences {
        let key = occurrence.normalized_name();
        if key.is_empty() {
            warn!(
                recipe = %occurrence.recipe_name,
                "Skipping ingredient occurrence without a name"
            );
            continue;
        }

        let category = occurrence_category(occurrence);
        let bucket = buckets.entry(category.clone()).or_default();

        let index = match bucket.index_by_name.get(&key) {
            Some(&index) => index,
            None => {
                bucket.ingredients.push(ConsolidatedIngredient::new(
                    &occurrence.name,
                    &category,
                    &occurrence.measurement_text,
                ));
                let index = bucket.ingredients.len() - 1;
                bucket.index_by_name.insert(key.clone(), index);
                index
            }
        };
        let ingredient = &mut bucket.ingredients[index];

        let parsed = parse(&occurrence.measurement_text);
        match parsed.group {
            Some(group) => {
                let standard = standardize(parsed.quantity, &parsed.unit, Some(group));
                debug!(
                    ingredient = %key,
                    %group,
                    quantity = standard.quantity,
                    "Accumulating '{}'",
                    parsed.original_text
                );
                ingredient.add_quantity(
                    group,
                    standard.quantity,
                    &standard.unit,
                    &parsed.original_text,
                );
            }
            None => {
                debug!(ingredient = %key, "Keeping unparsed measurement '{}'", occurrence.measurement_text);
                ingredient.add_unparsed(&occurrence.measurement_text);
            }
        }
        ingredient.add_recipe(&occurrence.recipe_name);
    }

    buckets
        .into_iter()
        .map(|(category, bucket)| (category, bucket.ingredients))
        .collect()
}

/// Precomputed category when present, keyword category otherwise
fn occurrence_category(occurrence: &IngredientOccurrence) -> String {
    match occurrence.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => category.to_string(),
        _ => categorize(&occurrence.name).as_str().to_string(),
    }
}

/// Builds grocery lists with a given configuration
#[derive(Debug, Clone)]
pub struct GroceryListBuilder {
    config: GroceryConfig,
    recommender: PackageRecommender,
}

impl Default for GroceryListBuilder {
    fn default() -> Self {
        let config = GroceryConfig::default();
        let recommender = PackageRecommender::with_config(&config);
        Self {
            config,
            recommender,
        }
    }
}

impl GroceryListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grocery_list::consolidator::GroceryListBuilder;
    /// use grocery_list::grocery_config::GroceryConfig;
    ///
    /// let config = GroceryConfig {
    ///     default_package: "any size".to_string(),
    ///     ..Default::default()
    /// };
    /// let builder = GroceryListBuilder::with_config(config)?;
    /// # Ok::<(), grocery_list::grocery_errors::GroceryError>(())
    /// ```
    pub fn with_config(config: GroceryConfig) -> Result<Self, GroceryError> {
        config.validate()?;
        info!(
            default_package = %config.default_package,
            small_quantity_threshold = config.small_quantity_threshold,
            fraction_tolerance = config.fraction_tolerance,
            "Creating GroceryListBuilder with custom config"
        );
        let recommender = PackageRecommender::with_config(&config);
        Ok(Self {
            config,
            recommender,
        })
    }

    pub fn config(&self) -> &GroceryConfig {
        &self.config
    }

    /// Consolidate occurrences and render them as a grocery list
    pub fn build(&self, occurrences: &[IngredientOccurrence]) -> GroceryList {
        let consolidated = consolidate(occurrences);
        let sections = self.render_sections(consolidated);

        let list = GroceryList {
            generated_at: Utc::now(),
            sections,
        };
        info!(
            occurrences = occurrences.len(),
            items = list.item_count(),
            sections = list.sections.len(),
            "Generated grocery list"
        );
        list
    }

    /// Render consolidated ingredients, sections ordered by category name (case-insensitive)
    pub fn render_sections(
        &self,
        consolidated: HashMap<String, Vec<ConsolidatedIngredient>>,
    ) -> Vec<GrocerySection> {
        let mut sections: Vec<GrocerySection> = consolidated
            .into_iter()
            .map(|(category, ingredients)| GrocerySection {
                items: ingredients
                    .iter()
                    .map(|ingredient| self.render_item(ingredient))
                    .collect(),
                category,
            })
            .collect();

        sections.sort_by(|a, b| {
            a.category
                .to_lowercase()
                .cmp(&b.category.to_lowercase())
                .then_with(|| a.category.cmp(&b.category))
        });
        sections
    }

    /// Render one consolidated ingredient as a grocery list line
    pub fn render_item(&self, ingredient: &ConsolidatedIngredient) -> GroceryListItem {
        GroceryListItem {
            display_name: ingredient.name.clone(),
            formatted_measurement: ingredient.display_measurement(self.config.fraction_tolerance),
            recommended_package: self
                .recommender
                .recommend(&ingredient.name, &ingredient.first_measurement_text),
            recipes: ingredient.recipes.clone(),
        }
    }
}

/// Build a grocery list with the default configuration
pub fn build_grocery_list(occurrences: &[IngredientOccurrence]) -> GroceryList {
    GroceryListBuilder::default().build(occurrences)
}
