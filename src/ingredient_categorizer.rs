//! # Ingredient Categorizer
//!
//! Maps an ingredient name to a grocery store section using keyword
//! containment. The first category with a matching keyword wins, so the
//! order of `CATEGORY_KEYWORDS` decides ties ("chicken broth" is meat,
//! "eggplant" is produce).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Shopping category for grocery store organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    MeatSeafood,
    Produce,
    DairyEggs,
    GrainsBakery,
    Pantry,
    Frozen,
    Beverages,
    SnacksSweets,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MeatSeafood => "Meat & Seafood",
            Category::Produce => "Produce",
            Category::DairyEggs => "Dairy & Eggs",
            Category::GrainsBakery => "Grains & Bakery",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::SnacksSweets => "Snacks & Sweets",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered category keyword table
static CATEGORY_KEYWORDS: LazyLock<Vec<(Category, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        (
            Category::MeatSeafood,
            vec![
                "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "steak",
                "salmon", "tuna", "shrimp", "fish", "cod", "tilapia", "crab", "lobster",
                "scallop", "prosciutto", "chorizo", "meatball",
            ],
        ),
        (
            Category::Produce,
            vec![
                "onion", "garlic", "tomato", "potato", "carrot", "celery", "lettuce",
                "spinach", "kale", "bell pepper", "jalapeno", "broccoli", "cucumber",
                "zucchini", "mushroom", "avocado", "lemon", "lime", "apple", "banana",
                "berry", "berries", "orange", "cilantro", "parsley", "basil", "ginger",
                "scallion", "shallot", "cabbage", "eggplant", "squash", "fresh herbs",
            ],
        ),
        (
            Category::DairyEggs,
            vec![
                "milk", "cheese", "butter", "cream", "yogurt", "egg", "parmesan",
                "mozzarella", "cheddar", "ricotta", "feta",
            ],
        ),
        (
            Category::GrainsBakery,
            vec![
                "bread", "flour", "rice", "pasta", "spaghetti", "noodle", "oat", "tortilla",
                "bun", "bagel", "quinoa", "cracker", "couscous", "pita",
            ],
        ),
        (
            Category::Pantry,
            vec![
                "oil", "vinegar", "salt", "pepper", "sugar", "honey", "sauce", "broth",
                "stock", "spice", "cumin", "paprika", "cinnamon", "oregano", "vanilla",
                "baking soda", "baking powder", "beans", "lentil", "canned", "syrup",
                "mustard", "ketchup", "mayonnaise", "soy", "nut", "almond", "peanut",
            ],
        ),
        (
            Category::Frozen,
            vec!["frozen", "ice cubes", "ice pop", "popsicle", "sorbet"],
        ),
        (
            Category::Beverages,
            vec!["water", "juice", "coffee", "tea", "soda", "wine", "beer", "kombucha"],
        ),
        (
            Category::SnacksSweets,
            vec![
                "chocolate", "chip", "cookie", "candy", "popcorn", "pretzel", "marshmallow",
                "sprinkles", "gummy",
            ],
        ),
    ]
});

/// Categorize an ingredient by name
///
/// Returns `Category::Other` when no keyword matches.
pub fn categorize(ingredient_name: &str) -> Category {
    let normalized = ingredient_name.trim().to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
