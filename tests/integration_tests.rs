//! # Integration Tests
//!
//! End-to-end grocery list generation: occurrences from several recipes in,
//! categorized and consolidated shopping lines out.

use grocery_list::consolidator::{build_grocery_list, GroceryListBuilder};
use grocery_list::grocery_config::GroceryConfig;
use grocery_list::ingredient_model::IngredientOccurrence;
use grocery_list::occurrence_loader::parse_occurrences_json;

fn occurrence(name: &str, measurement: &str, recipe_id: &str, recipe: &str) -> IngredientOccurrence {
    IngredientOccurrence::new(name, measurement).with_recipe(recipe_id, recipe)
}

fn weekly_plan() -> Vec<IngredientOccurrence> {
    vec![
        // Pancakes
        occurrence("Flour", "1 cup", "r1", "Pancakes"),
        occurrence("Milk", "1 1/4 cups", "r1", "Pancakes"),
        occurrence("Eggs", "2", "r1", "Pancakes"),
        occurrence("Vanilla", "1 tsp", "r1", "Pancakes"),
        occurrence("Butter", "2 tbsp", "r1", "Pancakes"),
        // Chicken soup
        occurrence("Chicken Breast", "1 1/2 lbs", "r2", "Chicken Soup"),
        occurrence("garlic", "2 cloves", "r2", "Chicken Soup"),
        occurrence("Salt", "a pinch of salt", "r2", "Chicken Soup"),
        occurrence("flour", "2 tbsp", "r2", "Chicken Soup"),
        // Garlic bread
        occurrence("Garlic", "1/4 cup minced", "r3", "Garlic Bread"),
        occurrence("butter", "4 oz", "r3", "Garlic Bread"),
        occurrence("eggs", "1", "r3", "Garlic Bread"),
        occurrence("chicken breast", "8 oz", "r3", "Garlic Bread"),
    ]
}

#[test]
fn test_weekly_plan_grocery_list() {
    let list = build_grocery_list(&weekly_plan());

    let categories: Vec<&str> = list.sections.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(
        categories,
        vec!["Dairy & Eggs", "Grains & Bakery", "Meat & Seafood", "Pantry", "Produce"]
    );

    let flour = list.find_item("flour").unwrap();
    assert_eq!(flour.display_name, "Flour");
    assert_eq!(flour.formatted_measurement, "1 1/8 cups");
    assert_eq!(flour.recommended_package, "5 lb bag");
    assert_eq!(flour.recipes, vec!["Pancakes", "Chicken Soup"]);

    let eggs = list.find_item("eggs").unwrap();
    assert_eq!(eggs.formatted_measurement, "3");

    // 24 oz + 8 oz = 32 oz
    let chicken = list.find_item("chicken breast").unwrap();
    assert_eq!(chicken.formatted_measurement, "2 pounds");
    assert_eq!(chicken.recommended_package, "3 lb family pack");

    // Volume and weight contributions stay separate
    let butter = list.find_item("butter").unwrap();
    assert_eq!(butter.formatted_measurement, "2 tablespoons, 4 ounces");

    let garlic = list.find_item("garlic").unwrap();
    assert_eq!(garlic.formatted_measurement, "1/4 cups, 2 cloves");

    let salt = list.find_item("salt").unwrap();
    assert_eq!(salt.formatted_measurement, "a pinch of salt");
    assert_eq!(salt.recommended_package, "4 oz shaker");

    let vanilla = list.find_item("vanilla").unwrap();
    assert_eq!(vanilla.formatted_measurement, "1 teaspoons");
    assert_eq!(vanilla.recommended_package, "1 oz bottle");
}

#[test]
fn test_every_occurrence_is_accounted_for() {
    let plan = weekly_plan();
    let consolidated = grocery_list::consolidate(&plan);

    let merged: usize = consolidated
        .values()
        .flat_map(|ingredients| ingredients.iter())
        .map(|ingredient| ingredient.occurrence_count())
        .sum();

    assert_eq!(merged, plan.len());
}

#[test]
fn test_items_keep_first_seen_order() {
    let list = build_grocery_list(&weekly_plan());
    let dairy = list.section("dairy & eggs").unwrap();

    let names: Vec<&str> = dairy.items.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Eggs", "Butter"]);
}

#[test]
fn test_json_round_trip_of_grocery_list() {
    let json = r#"[
        {"ingredientName": "Sugar", "measurementText": "1/2 cup", "recipeId": "r1", "recipeName": "Cake"},
        {"ingredientName": "sugar", "measurementText": "1/4 cup", "recipeId": "r2", "recipeName": "Cookies"},
        {"ingredientName": "Sprinkles", "measurementText": "to taste", "recipeId": "r2", "recipeName": "Cookies", "category": "Decorations"}
    ]"#;

    let occurrences = parse_occurrences_json(json).unwrap();
    let list = build_grocery_list(&occurrences);

    assert_eq!(list.find_item("sugar").unwrap().formatted_measurement, "3/4 cups");
    assert_eq!(list.section("Decorations").unwrap().items[0].formatted_measurement, "to taste");

    let serialized = serde_json::to_string(&list).unwrap();
    let restored: grocery_list::GroceryList = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, list);
}

#[test]
fn test_custom_default_package() {
    let config = GroceryConfig {
        default_package: "any size".to_string(),
        ..GroceryConfig::default()
    };
    let builder = GroceryListBuilder::with_config(config).unwrap();

    let list = builder.build(&[occurrence("za'atar", "1 tbsp", "r1", "Flatbread")]);
    let item = list.find_item("za'atar").unwrap();

    assert_eq!(item.recommended_package, "any size");
    assert_eq!(item.formatted_measurement, "1 tablespoons");
}

#[test]
fn test_empty_input() {
    let list = build_grocery_list(&[]);
    assert_eq!(list.item_count(), 0);
    assert!(list.sections.is_empty());
}
