//! # Package-Size Recommender
//!
//! Suggests a real-world retail size for an ingredient. Works on a single
//! raw occurrence (name plus measurement text), independently of the
//! consolidated totals.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::package_recommender::recommend;
//!
//! assert_eq!(recommend("flour", "2 cups"), "5 lb bag");
//! assert_eq!(recommend("vanilla", "1 tsp"), "1 oz bottle");
//! assert_eq!(recommend("dragon fruit", "1"), "standard package");
//! ```

use crate::grocery_config::{GroceryConfig, DEFAULT_PACKAGE, SMALL_QUANTITY_THRESHOLD};
use crate::measurement_parser::match_unit;
use crate::measurement_patterns::FIRST_NUMBER_REGEX;
use log::{debug, trace};
use std::sync::LazyLock;

/// Keywords that mark a measurement as a small amount
const SMALL_UNIT_KEYWORDS: [&str; 6] = ["teaspoon", "tsp", "tablespoon", "tbsp", "pinch", "dash"];

/// Multi-word ingredients, checked before the generic table
static SPECIAL_PACKAGE_RULES: LazyLock<Vec<(&'static str, Vec<&'static str>)>> =
    LazyLock::new(|| {
        vec![
            ("chicken breast", vec!["3 lb family pack", "1 lb pack"]),
            ("ground beef", vec!["2 lb pack", "1 lb pack"]),
            ("olive oil", vec!["25.3 oz bottle", "16.9 oz bottle", "8.5 oz bottle"]),
            ("brown sugar", vec!["2 lb bag", "1 lb box"]),
            ("soy sauce", vec!["15 oz bottle", "5 oz bottle"]),
            ("heavy cream", vec!["1 quart", "1 pint"]),
            ("baking soda", vec!["1 lb box", "8 oz box"]),
            ("baking powder", vec!["8.1 oz can", "4 oz can"]),
            ("bell pepper", vec!["3 pack", "1 each"]),
        ]
    });

/// Ingredient keyword to package sizes, default first and smallest last
static PACKAGE_SIZES: LazyLock<Vec<(&'static str, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        ("flour", vec!["5 lb bag", "2 lb bag"]),
        ("sugar", vec!["4 lb bag", "1 lb box"]),
        ("salt", vec!["26 oz canister", "4 oz shaker"]),
        ("pepper", vec!["4 oz tin", "1 oz tin"]),
        ("vanilla", vec!["4 oz bottle", "2 oz bottle", "1 oz bottle"]),
        ("cinnamon", vec!["2.37 oz jar", "0.75 oz jar"]),
        ("butter", vec!["1 lb (4 sticks)", "1/2 lb (2 sticks)"]),
        ("milk", vec!["1 gallon", "1/2 gallon", "1 quart"]),
        ("eggplant", vec!["1 each"]),
        ("egg", vec!["1 dozen", "6 count"]),
        ("cheese", vec!["16 oz block", "8 oz block"]),
        ("yogurt", vec!["32 oz tub", "6 oz cup"]),
        ("rice", vec!["5 lb bag", "2 lb bag"]),
        ("pasta", vec!["16 oz box", "8 oz box"]),
        ("oats", vec!["42 oz canister", "18 oz canister"]),
        ("oil", vec!["48 oz bottle", "16 oz bottle"]),
        ("vinegar", vec!["32 oz bottle", "16 oz bottle"]),
        ("honey", vec!["24 oz bottle", "12 oz bottle"]),
        ("broth", vec!["32 oz carton", "14.5 oz can"]),
        ("onion", vec!["3 lb bag", "1 each"]),
        ("garlic", vec!["3 bulb pack", "1 bulb"]),
        ("potato", vec!["5 lb bag", "1 lb"]),
        ("tomato", vec!["2 lb pack", "1 each"]),
        ("lemon", vec!["2 lb bag", "1 each"]),
        ("chicken", vec!["3 lb pack", "1 lb pack"]),
        ("bacon", vec!["16 oz pack", "12 oz pack"]),
    ]
});

/// Package recommender with configurable default and small-amount threshold
#[derive(Debug, Clone)]
pub struct PackageRecommender {
    default_package: String,
    small_quantity_threshold: f64,
}

impl Default for PackageRecommender {
    fn default() -> Self {
        Self {
            default_package: DEFAULT_PACKAGE.to_string(),
            small_quantity_threshold: SMALL_QUANTITY_THRESHOLD,
        }
    }
}

impl PackageRecommender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &GroceryConfig) -> Self {
        Self {
            default_package: config.default_package.clone(),
            small_quantity_threshold: config.small_quantity_threshold,
        }
    }

    /// Recommend a package size for one ingredient occurrence
    ///
    /// Small amounts get the last (smallest) size in the ingredient's list,
    /// anything else the first.
    pub fn recommend(&self, ingredient_name: &str, measurement_text: &str) -> String {
        let name = normalize_package_name(ingredient_name);

        let Some(sizes) = lookup_sizes(&name) else {
            trace!("No package sizes for '{}'", name);
            return self.default_package.clone();
        };

        let small = self.is_small_quantity(measurement_text);
        let chosen = if small { sizes.last() } else { sizes.first() };
        debug!(
            "Package for '{}' ({}, small={}): {:?}",
            name, measurement_text, small, chosen
        );

        chosen
            .map(|size| size.to_string())
            .unwrap_or_else(|| self.default_package.clone())
    }

    /// Whether a measurement names a small unit with a first number at or below the threshold
    ///
    /// Only the first number in the text is looked at; a missing number counts as 1.
    pub fn is_small_quantity(&self, measurement_text: &str) -> bool {
        let lower = measurement_text.to_lowercase();
        if !SMALL_UNIT_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            return false;
        }

        let quantity = FIRST_NUMBER_REGEX
            .find(&lower)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(1.0);

        quantity <= self.small_quantity_threshold
    }
}

/// Recommend a package size with the default configuration
pub fn recommend(ingredient_name: &str, measurement_text: &str) -> String {
    PackageRecommender::default().recommend(ingredient_name, measurement_text)
}

/// Lower-case a name and drop stray quantity and unit tokens ("2 cups flour" -> "flour")
pub fn normalize_package_name(ingredient_name: &str) -> String {
    ingredient_name
        .to_lowercase()
        .split_whitespace()
        .filter(|token| !is_quantity_token(token) && match_unit(token).is_none())
        .collect::<Vec<&str>>()
        .join(" ")
}

fn is_quantity_token(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '/' | '.' | '-'))
}

fn lookup_sizes(name: &str) -> Option<&'static [&'static str]> {
    SPECIAL_PACKAGE_RULES
        .iter()
        .chain(PACKAGE_SIZES.iter())
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, sizes)| sizes.as_slice())
}
