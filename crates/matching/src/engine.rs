use std::collections::HashMap;

use pantrymatch_shared::Result;
use pantrymatch_shared::normalize;
use pantrymatch_shared::pantry::PantryItem;
use pantrymatch_shared::profile::UserProfile;
use pantrymatch_shared::recipe::{Recipe, RecipeIngredient};
use serde::Serialize;

use crate::catalog::SubstitutionCatalog;
use crate::options::{ScoreWeights, ScoringOptions};
use crate::subscore;

/// A recipe ingredient covered by a catalog substitute found in the pantry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Substitution {
    pub ingredient: RecipeIngredient,
    pub substitute: String,
}

/// Every recipe ingredient lands in exactly one of the three buckets.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IngredientMatch {
    pub available: Vec<RecipeIngredient>,
    pub substitutable: Vec<Substitution>,
    pub missing: Vec<RecipeIngredient>,
}

/// Rounded sub-scores, each in 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub availability: u8,
    pub substitution: u8,
    pub dietary: u8,
    pub time: u8,
    pub cookware: u8,
    pub skill: u8,
    pub nutrition: u8,
    pub cost: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchScore {
    pub recipe_id: String,
    pub total_score: u8,
    pub breakdown: ScoreBreakdown,
    pub available_ingredients: Vec<RecipeIngredient>,
    pub missing_ingredients: Vec<RecipeIngredient>,
    pub substitutable_ingredients: Vec<Substitution>,
}

/// Unrounded sub-scores, combined before any rounding happens.
#[derive(Clone, Copy, Debug)]
struct SubScores {
    availability: f64,
    substitution: f64,
    dietary: f64,
    time: f64,
    cookware: f64,
    skill: f64,
    nutrition: f64,
    cost: f64,
}

impl SubScores {
    fn weighted_total(&self, weights: &ScoreWeights) -> f64 {
        self.availability * weights.availability
            + self.substitution * weights.substitution
            + self.dietary * weights.dietary
            + self.time * weights.time
            + self.cookware * weights.cookware
            + self.skill * weights.skill
            + self.nutrition * weights.nutrition
            + self.cost * weights.cost
    }

    fn rounded(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            availability: round_score(self.availability),
            substitution: round_score(self.substitution),
            dietary: round_score(self.dietary),
            time: round_score(self.time),
            cookware: round_score(self.cookware),
            skill: round_score(self.skill),
            nutrition: round_score(self.nutrition),
            cost: round_score(self.cost),
        }
    }
}

fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Scores recipes against a pantry snapshot and a user profile.
///
/// The engine holds no mutable state: scoring the same inputs twice yields the
/// same [`MatchScore`], and independent calls can run in any order.
#[derive(Clone, Debug)]
pub struct ScoringEngine<'a> {
    catalog: &'a SubstitutionCatalog,
    options: ScoringOptions,
}

impl Default for ScoringEngine<'static> {
    fn default() -> Self {
        Self::new(SubstitutionCatalog::builtin())
    }
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a SubstitutionCatalog) -> Self {
        Self {
            catalog,
            options: ScoringOptions::default(),
        }
    }

    pub fn with_options(catalog: &'a SubstitutionCatalog, options: ScoringOptions) -> Result<Self> {
        options.validate()?;

        Ok(Self { catalog, options })
    }

    /// Splits the recipe ingredients into available, substitutable and missing.
    ///
    /// An ingredient is available when the pantry holds at least the required
    /// quantity under the same name. Otherwise the catalog candidates are tried
    /// in order and the first one with enough stock wins. Units are not
    /// converted, only the raw quantities are compared.
    pub fn classify(&self, recipe: &Recipe, pantry: &[PantryItem]) -> IngredientMatch {
        let stock: HashMap<String, &PantryItem> = pantry
            .iter()
            .map(|item| (normalize(&item.name), item))
            .collect();

        let has_enough = |name: &str, required: f64| {
            stock
                .get(name)
                .is_some_and(|item| item.available_quantity() >= required)
        };

        let mut result = IngredientMatch::default();

        for ingredient in &recipe.ingredients {
            let name = normalize(&ingredient.name);

            if has_enough(name.as_str(), ingredient.quantity) {
                result.available.push(ingredient.clone());
                continue;
            }

            let substitute = self
                .catalog
                .substitutes(&name)
                .iter()
                .find(|candidate| has_enough(candidate.as_str(), ingredient.quantity));

            match substitute {
                Some(substitute) => {
                    tracing::trace!(ingredient = %name, %substitute, "using substitute");
                    result.substitutable.push(Substitution {
                        ingredient: ingredient.clone(),
                        substitute: substitute.clone(),
                    });
                }
                None => result.missing.push(ingredient.clone()),
            }
        }

        result
    }

    pub fn score(
        &self,
        recipe: &Recipe,
        pantry: &[PantryItem],
        profile: &UserProfile,
        time_budget: u32,
    ) -> MatchScore {
        let ingredients = self.classify(recipe, pantry);
        let total = recipe.ingredients.len();

        let sub_scores = SubScores {
            availability: subscore::coverage(ingredients.available.len(), total),
            substitution: subscore::coverage(ingredients.substitutable.len(), total),
            dietary: subscore::dietary(recipe, profile),
            time: subscore::time(recipe.time_total, time_budget),
            cookware: subscore::cookware(&recipe.cookware_required, &profile.cookware),
            skill: subscore::skill(recipe.skill_required, profile.skill_level),
            nutrition: subscore::nutrition(
                &recipe.nutrition,
                &profile.macro_goals,
                self.options.meals_per_day,
            ),
            cost: subscore::cost(ingredients.missing.len()),
        };

        let total_score = round_score(sub_scores.weighted_total(&self.options.weights));

        tracing::debug!(recipe_id = %recipe.id, total_score, "scored recipe");

        MatchScore {
            recipe_id: recipe.id.clone(),
            total_score,
            breakdown: sub_scores.rounded(),
            available_ingredients: ingredients.available,
            missing_ingredients: ingredients.missing,
            substitutable_ingredients: ingredients.substitutable,
        }
    }
}

/// Scores one recipe with the builtin catalog and default weights.
pub fn score(
    recipe: &Recipe,
    pantry: &[PantryItem],
    profile: &UserProfile,
    time_budget: u32,
) -> MatchScore {
    ScoringEngine::default().score(recipe, pantry, profile, time_budget)
}
