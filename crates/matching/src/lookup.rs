use std::collections::HashMap;

use pantrymatch_shared::recipe::Recipe;
use pantrymatch_shared::{Error, Result};
use serde::Serialize;

use crate::engine::MatchScore;

/// A ranked match joined back to its recipe for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedRecipe<'r> {
    pub recipe: &'r Recipe,
    #[serde(rename = "match")]
    pub score: MatchScore,
}

fn index(recipes: &[Recipe]) -> HashMap<&str, &Recipe> {
    recipes.iter().map(|r| (r.id.as_str(), r)).collect()
}

/// Recipe with the given id. When ids repeat, the last one wins.
pub fn find_recipe<'r>(recipes: &'r [Recipe], id: &str) -> Result<&'r Recipe> {
    recipes
        .iter()
        .rfind(|recipe| recipe.id == id)
        .ok_or_else(|| Error::NotFound(id.to_owned()))
}

/// Recipes in the order of `ids`, unknown ids are skipped.
pub fn recipes_by_ids<'r, S: AsRef<str>>(ids: &[S], recipes: &'r [Recipe]) -> Vec<&'r Recipe> {
    let index = index(recipes);

    ids.iter()
        .filter_map(|id| index.get(id.as_ref()).copied())
        .collect()
}

/// Joins ranked matches with their recipes, dropping matches without one.
pub fn pair_with_recipes(matches: Vec<MatchScore>, recipes: &[Recipe]) -> Vec<RankedRecipe<'_>> {
    let index = index(recipes);

    matches
        .into_iter()
        .filter_map(|score| {
            index
                .get(score.recipe_id.as_str())
                .copied()
                .map(|recipe| RankedRecipe { recipe, score })
        })
        .collect()
}
