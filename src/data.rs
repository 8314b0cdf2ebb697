//! JSON inputs for the CLI: recipe catalogs, pantry snapshots and cooking
//! preferences. Every record is validated before it reaches the engine.

use std::path::Path;

use anyhow::{Context, Result};
use pantrymatch_shared::pantry::PantryItem;
use pantrymatch_shared::profile::CookingPreferences;
use pantrymatch_shared::recipe::Recipe;
use serde::de::DeserializeOwned;
use validator::Validate;

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn validate_all<T: Validate>(records: &[T], kind: &str, path: &Path) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(pantrymatch_shared::Error::from)
            .with_context(|| format!("{kind} #{index} in {} is invalid", path.display()))?;
    }

    Ok(())
}

#[tracing::instrument]
pub async fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = read_json(path).await?;
    validate_all(&recipes, "recipe", path)?;

    tracing::debug!(count = recipes.len(), "recipes loaded");

    Ok(recipes)
}

#[tracing::instrument]
pub async fn load_pantry(path: &Path) -> Result<Vec<PantryItem>> {
    let pantry: Vec<PantryItem> = read_json(path).await?;
    validate_all(&pantry, "pantry item", path)?;

    tracing::debug!(count = pantry.len(), "pantry loaded");

    Ok(pantry)
}

#[tracing::instrument]
pub async fn load_preferences(path: &Path) -> Result<CookingPreferences> {
    let preferences: CookingPreferences = read_json(path).await?;
    validate_all(std::slice::from_ref(&preferences), "preferences", path)?;

    Ok(preferences)
}
