//! # Occurrence Loader
//!
//! Reads ingredient occurrences from JSON, either a plain array of
//! occurrences or an object with an `ingredients` array.

use crate::grocery_errors::GroceryError;
use crate::ingredient_model::IngredientOccurrence;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum OccurrenceDocument {
    List(Vec<IngredientOccurrence>),
    Wrapped { ingredients: Vec<IngredientOccurrence> },
}

/// Decode occurrences from JSON text
pub fn parse_occurrences_json(json: &str) -> Result<Vec<IngredientOccurrence>, GroceryError> {
    let document: OccurrenceDocument = serde_json::from_str(json)?;
    let occurrences = match document {
        OccurrenceDocument::List(occurrences) => occurrences,
        OccurrenceDocument::Wrapped { ingredients } => ingredients,
    };
    debug!("Decoded {} ingredient occurrences", occurrences.len());
    Ok(occurrences)
}

/// Read occurrences from a JSON file
pub fn load_occurrences(path: &Path) -> Result<Vec<IngredientOccurrence>, GroceryError> {
    info!("Loading ingredient occurrences from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| GroceryError::Io(format!("{}: {}", path.display(), e)))?;
    parse_occurrences_json(&content)
}
